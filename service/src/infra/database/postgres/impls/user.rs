//! [`User`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<'e, C> Database<Select<By<Option<User>, &'e user::Email>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, &'e user::Email>>,
    ) -> Result<Self::Ok, Self::Err> {
        let email = by.into_inner();

        // Exact match on the email as persisted, deliberately case-sensitive.
        const SQL: &str = "\
            SELECT id, name, email, status, \
                   subscription_status, subscription_plan, \
                   subscription_expires_at, \
                   created_at \
            FROM users \
            WHERE email = $1::VARCHAR \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&email])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                status: row.get("status"),
                subscription_status: row.get("subscription_status"),
                subscription_plan: row.get("subscription_plan"),
                subscription_expires_at: row.get("subscription_expires_at"),
                created_at: row.get("created_at"),
            }))
    }
}
