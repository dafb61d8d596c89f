//! Infrastructure layer.

pub mod backend;
pub mod database;
pub mod storage;

pub use self::{
    backend::Backend,
    database::Database,
    storage::Storage,
};
#[cfg(feature = "postgres")]
pub use self::database::{postgres, Postgres};
