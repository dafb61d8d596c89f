//! [`Session`] definitions.

use derive_more::{AsRef, Display, FromStr};
use serde::Deserialize;

#[cfg(doc)]
use crate::domain::User;

/// Client-side session of a signed-in [`User`], persisted by the login flow.
///
/// Only read by this code, never written. The persisted entry may carry more
/// fields than declared here; they are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    /// Bearer [`Token`] authenticating the [`User`].
    #[serde(default)]
    token: Option<Token>,
}

impl Session {
    /// Returns the usable [`Token`] of this [`Session`], if any.
    ///
    /// An empty token is as good as none.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref().filter(|t| !t.as_ref().is_empty())
    }
}

/// Access token of a [`Session`].
///
/// Opaque to this code: issued and interpreted by the backend only.
#[derive(AsRef, Clone, Debug, Deserialize, Display, FromStr)]
#[as_ref(str)]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] without checking its contents.
    ///
    /// # Safety
    ///
    /// The provided `token` must be a valid [`Token`] representation.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod spec {
    use super::Session;

    #[test]
    fn ignores_unknown_fields() {
        let session: Session = serde_json::from_str(
            r#"{"token":"abc123","name":"Jane","isAdmin":false}"#,
        )
        .unwrap();
        assert_eq!(session.token().map(AsRef::as_ref), Some("abc123"));
    }

    #[test]
    fn treats_empty_and_missing_token_as_none() {
        let empty: Session = serde_json::from_str(r#"{"token":""}"#).unwrap();
        assert!(empty.token().is_none());

        let missing: Session = serde_json::from_str("{}").unwrap();
        assert!(missing.token().is_none());

        let null: Session = serde_json::from_str(r#"{"token":null}"#).unwrap();
        assert!(null.token().is_none());
    }
}
