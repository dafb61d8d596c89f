//! Local [`Storage`] of the signed-in user's session.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing as log;

use crate::domain::user::Session;
#[cfg(doc)]
use crate::domain::User;

/// Key of the [`Session`] entry, as written by the login flow.
pub const SESSION_KEY: &str = "user";

/// Local key-value storage of the client-side session state.
///
/// Every entry is a JSON file under the storage directory. This code only
/// ever reads the storage; the login flow owns all writes.
#[derive(Clone, Debug)]
pub struct Storage {
    /// Directory holding the entries.
    dir: PathBuf,
}

impl Storage {
    /// Creates a new [`Storage`] over the provided directory.
    ///
    /// The directory is not required to exist: reading from a non-existing
    /// one behaves as reading an empty [`Storage`].
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory this [`Storage`] reads from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and parses the entry persisted under the provided `key`.
    ///
    /// Every failure mode (missing entry, unreadable file, malformed
    /// content) collapses into [`None`]. A present-but-unusable entry is
    /// reported with a single diagnostic; a missing one is not an anomaly
    /// and is passed over silently.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.dir.join(format!("{key}.json"));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!(
                    "failed to read `{}` entry of the local storage: {e}",
                    path.display(),
                );
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| {
                log::warn!(
                    "failed to parse `{}` entry of the local storage: {e}",
                    path.display(),
                );
            })
            .ok()
    }

    /// Returns the persisted [`Session`], if any.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.read(SESSION_KEY)
    }

    /// Builds authentication headers for an outgoing backend request.
    ///
    /// The returned [`http::HeaderMap`] carries a single
    /// `Authorization: Bearer <token>` entry when the persisted [`Session`]
    /// holds a usable token, and is empty otherwise. Never fails: a missing
    /// or unusable credential degrades into an empty map, so a broken local
    /// state cannot break an unrelated request.
    #[must_use]
    pub fn auth_headers(&self) -> http::HeaderMap {
        let mut headers = http::HeaderMap::new();

        let Some(session) = self.session() else {
            return headers;
        };
        let Some(token) = session.token() else {
            return headers;
        };

        match format!("Bearer {token}").parse::<http::HeaderValue>() {
            Ok(mut value) => {
                value.set_sensitive(true);
                drop(headers.insert(http::header::AUTHORIZATION, value));
            }
            Err(e) => {
                log::warn!(
                    "persisted token is not usable as an \
                     `Authorization` header: {e}",
                );
            }
        }

        headers
    }
}

#[cfg(test)]
mod spec {
    use std::fs;

    use super::{Storage, SESSION_KEY};

    fn storage_with_entry(raw: &str) -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(format!("{SESSION_KEY}.json")), raw)
            .unwrap();
        let storage = Storage::new(dir.path());
        (dir, storage)
    }

    #[test]
    fn provides_bearer_header_for_persisted_token() {
        let (_dir, storage) = storage_with_entry(r#"{"token":"abc123"}"#);

        let headers = storage.auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer abc123",
        );
    }

    #[test]
    fn provides_nothing_without_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());

        assert!(storage.session().is_none());
        assert!(storage.auth_headers().is_empty());
    }

    #[test]
    fn provides_nothing_for_missing_directory() {
        let storage = Storage::new("/nonexistent/storage/dir");

        assert!(storage.session().is_none());
        assert!(storage.auth_headers().is_empty());
    }

    #[test]
    fn absorbs_malformed_session_entry() {
        let (_dir, storage) = storage_with_entry("{not valid json");

        assert!(storage.session().is_none());
        assert!(storage.auth_headers().is_empty());
    }

    #[test]
    fn treats_empty_token_as_no_credentials() {
        let (_dir, storage) = storage_with_entry(r#"{"token":""}"#);

        assert!(storage.session().is_some());
        assert!(storage.auth_headers().is_empty());
    }
}
