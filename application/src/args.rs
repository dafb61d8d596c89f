//! [`Args`] definitions.

use clap::Parser;
use service::domain::user;

/// Diagnostic lookup of a portal user record by its email address.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Email address of the user to look up (exact match as persisted).
    pub email: user::Email,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::Args;

    #[test]
    fn requires_email_argument() {
        assert!(Args::try_parse_from(["lookup-user"]).is_err());
    }

    #[test]
    fn parses_email_argument() {
        let args =
            Args::try_parse_from(["lookup-user", "user@harsh.com"]).unwrap();
        assert_eq!(args.email.to_string(), "user@harsh.com");
        assert_eq!(args.config, "config.toml");
    }

    #[test]
    fn rejects_malformed_email_argument() {
        assert!(Args::try_parse_from(["lookup-user", "not an email"])
            .is_err());
    }
}
