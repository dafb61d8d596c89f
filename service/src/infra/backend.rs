//! HTTP client of the secondary (AI/intake) portal [`Backend`].

use std::{env, time::Duration};

use derive_more::{Display, Error as StdError, From};
use reqwest::{Method, RequestBuilder, Url};
use smart_default::SmartDefault;
use tracerr::Traced;

use super::Storage;
#[cfg(doc)]
use crate::domain::user::Session;

/// Environment variable overriding the [`Backend`] base address.
pub const BASE_URL_ENV: &str = "PORTAL_API_URL";

/// [`Backend`] client configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base address of the backend.
    #[default("http://localhost:8000".to_owned())]
    pub base_url: String,

    /// Timeout of a whole request/response cycle.
    #[default(Duration::from_secs(30))]
    pub request_timeout: Duration,

    /// Timeout of establishing a connection.
    #[default(Duration::from_secs(10))]
    pub connect_timeout: Duration,
}

impl Config {
    /// Creates a new [`Config`] with the base address taken from the
    /// [`BASE_URL_ENV`] environment variable, falling back to the local
    /// development default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut conf = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            conf.base_url = url;
        }
        conf
    }
}

/// Pre-configured HTTP client of the secondary portal backend.
///
/// Constructed once at startup; the base address is immutable afterwards.
/// Holds no per-request mutable state, so one instance safely serves
/// concurrent independent requests.
#[derive(Clone, Debug)]
pub struct Backend {
    /// Base address requests are resolved against.
    base_url: Url,

    /// Underlying HTTP client.
    http: reqwest::Client,

    /// Local [`Storage`] credentials are read from.
    storage: Storage,
}

impl Backend {
    /// Creates a new [`Backend`] client with the provided parameters.
    ///
    /// # Errors
    ///
    /// If the configured base address is not a valid URL, or the underlying
    /// HTTP client fails to initialize.
    pub fn new(
        conf: &Config,
        storage: Storage,
    ) -> Result<Self, Traced<InitError>> {
        let base_url = conf
            .base_url
            .parse::<Url>()
            .map_err(tracerr::from_and_wrap!(=> InitError))?;
        let http = reqwest::Client::builder()
            .timeout(conf.request_timeout)
            .connect_timeout(conf.connect_timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> InitError))?;

        Ok(Self {
            base_url,
            http,
            storage,
        })
    }

    /// Starts building a `method` request to the provided backend `path`.
    ///
    /// Credentials present in the [`Storage`] at call time are attached as
    /// an `Authorization` header; the request proceeds unmodified when there
    /// are none. Nothing else about the request is touched: construction and
    /// transport errors surface to the caller unchanged.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .headers(self.storage.auth_headers())
    }

    /// Starts building a `GET` request to the provided backend `path`.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Starts building a `POST` request to the provided backend `path`.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Resolves the provided `path` against the base address.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/'),
        )
    }
}

/// Error of creating a new [`Backend`] client.
#[derive(Debug, Display, From, StdError)]
pub enum InitError {
    /// Configured base address is not a valid URL.
    #[display("invalid backend base address: {_0}")]
    InvalidBaseUrl(url::ParseError),

    /// Underlying HTTP client failed to initialize.
    #[display("failed to initialize the HTTP client: {_0}")]
    Http(reqwest::Error),
}

#[cfg(test)]
mod spec {
    use std::fs;

    use super::{Backend, Config, Storage};

    fn backend(dir: &tempfile::TempDir) -> Backend {
        Backend::new(&Config::default(), Storage::new(dir.path())).unwrap()
    }

    #[test]
    fn attaches_bearer_token_to_requests() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("user.json"), r#"{"token":"abc123"}"#)
            .unwrap();

        let request = backend(&dir).get("/api/intake").build().unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:8000/api/intake");
        assert_eq!(
            request.headers().get(http::header::AUTHORIZATION).unwrap(),
            "Bearer abc123",
        );
    }

    #[test]
    fn sends_no_credentials_without_session() {
        let dir = tempfile::tempdir().unwrap();

        let request = backend(&dir).get("/api/intake").build().unwrap();

        assert!(request.headers().get(http::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn leaves_other_headers_and_body_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("user.json"), r#"{"token":"abc123"}"#)
            .unwrap();

        let request = backend(&dir)
            .post("api/chat")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(r#"{"message":"hi"}"#)
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "application/json",
        );
        assert_eq!(
            request.headers().get(http::header::AUTHORIZATION).unwrap(),
            "Bearer abc123",
        );
        assert_eq!(
            request.body().and_then(reqwest::Body::as_bytes),
            Some(r#"{"message":"hi"}"#.as_bytes()),
        );
    }

    #[test]
    fn rejects_invalid_base_address() {
        let dir = tempfile::tempdir().unwrap();
        let conf = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };

        assert!(Backend::new(&conf, Storage::new(dir.path())).is_err());
    }
}
