//! [`Query`] collection related to a single [`User`].

use common::operations::By;

use crate::domain::{user, User};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`User`] by its [`user::Email`] (exact match as persisted).
pub type ByEmail<'e> = DatabaseQuery<By<Option<User>, &'e user::Email>>;
