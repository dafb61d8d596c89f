//! [`User`] definitions.

pub mod session;

use std::sync::LazyLock;

use common::{define_kind, unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::session::Session;

/// Portal user.
#[derive(Clone, Debug, From, Serialize)]
pub struct User {
    /// ID of this [`User`]
    pub id: Id,

    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// Account [`Status`] of this [`User`].
    pub status: Status,

    /// [`subscription::Status`] of this [`User`].
    pub subscription_status: subscription::Status,

    /// [`subscription::Plan`] of this [`User`], if any was ever chosen.
    pub subscription_plan: Option<subscription::Plan>,

    /// [`DateTime`] when the subscription of this [`User`] expires.
    #[serde(with = "common::datetime::serde::rfc3339::option")]
    pub subscription_expires_at: Option<subscription::ExpirationDateTime>,

    /// [`DateTime`] when this [`User`] was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

/// ID of a [`User`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether this [`Email`] belongs to the provided `domain`
    /// (case-insensitively).
    #[must_use]
    pub fn ends_with_domain(&self, domain: impl AsRef<str>) -> bool {
        self.0
            .to_lowercase()
            .ends_with(&domain.as_ref().to_lowercase())
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                "^([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                     \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                  |\\x22([^\\x0d\\x22\\x5c\\x80-\\xff]\
                  |\\x5c[\\x00-\\x7f])*\\x22)\
                  (\\x2e([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                           \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                        |\\x22([^\\x0d\\x22\\x5c\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x22))*\\x40\
                  ([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                     \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                  |\\x5b([^\\x0d\\x5b-\\x5d\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x5d)\
                  (\\x2e([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                           \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                        |\\x5b([^\\x0d\\x5b-\\x5d\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x5d))*$",
            )
            .expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

define_kind! {
    #[doc = "Account status of a [`User`]."]
    enum Status {
        #[doc = "Email address is not confirmed yet."]
        Pending,

        #[doc = "Email address has been confirmed."]
        Verified,
    }
}

pub mod subscription {
    //! Subscription-related definitions of a [`User`].

    use common::{define_kind, unit, DateTimeOf};
    #[cfg(doc)]
    use common::DateTime;

    #[cfg(doc)]
    use super::User;

    define_kind! {
        #[doc = "Status of a [`User`]'s subscription."]
        enum Status {
            #[doc = "Subscription is paid up and usable."]
            Active,

            #[doc = "No usable subscription."]
            Inactive,
        }
    }

    define_kind! {
        #[doc = "Billing plan of a [`User`]'s subscription."]
        enum Plan {
            #[doc = "Entry-level plan."]
            Starter,

            #[doc = "Mid-tier plan."]
            Professional,

            #[doc = "Custom-priced plan."]
            Enterprise,
        }
    }

    /// [`DateTime`] when a [`User`]'s subscription expires.
    pub type ExpirationDateTime = DateTimeOf<(Status, unit::Expiration)>;
}

/// [`DateTime`] when a [`User`] was created.
pub type CreationDateTime = DateTimeOf<(User, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::Email;

    #[test]
    fn email_domain_check_is_case_insensitive() {
        let email = Email::new("User@Harsh.COM").unwrap();
        assert!(email.ends_with_domain("@harsh.com"));
        assert!(email.ends_with_domain("@HARSH.com"));
        assert!(!email.ends_with_domain("@example.com"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(Email::new("user@harsh.com").is_some());
        assert!(Email::new("not an email").is_none());
        assert!(Email::new("").is_none());
    }
}
