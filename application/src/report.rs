//! Rendering of the user lookup report.

use common::DateTime;
use service::domain::User;

/// Renders the diagnostic report of a user lookup outcome.
///
/// A found record is printed in full (as pretty JSON) together with the
/// derived checks; an absent one produces a single "not found" line.
#[must_use]
pub fn render(user: Option<&User>, internal_domain: &str) -> String {
    let Some(user) = user else {
        return "User not found.\n".to_owned();
    };

    let record = serde_json::to_string_pretty(user)
        .unwrap_or_else(|e| format!("<unprintable record: {e}>"));

    let expired = user
        .subscription_expires_at
        .is_some_and(|at| at < DateTime::now().coerce());

    format!(
        "User found:\n\
         {record}\n\
         --- Checks ---\n\
         Email ends with {internal_domain}: {internal}\n\
         Subscription Status: {status}\n\
         Subscription expired: {expired}\n",
        internal = user.email.ends_with_domain(internal_domain),
        status = user.subscription_status,
    )
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use service::domain::user::{self, subscription, User};

    use super::render;

    fn user(email: &str) -> User {
        User {
            id: user::Id::new(),
            name: user::Name::new("Jane Doe").unwrap(),
            email: user::Email::new(email).unwrap(),
            status: user::Status::Verified,
            subscription_status: subscription::Status::Active,
            subscription_plan: Some(subscription::Plan::Starter),
            subscription_expires_at: None,
            created_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn reports_found_user_with_checks() {
        let report = render(Some(&user("user@harsh.com")), "@harsh.com");

        assert!(report.starts_with("User found:\n"));
        assert!(report.contains(r#""email": "user@harsh.com""#));
        assert!(report.contains("Email ends with @harsh.com: true\n"));
        assert!(report.contains("Subscription Status: ACTIVE\n"));
        assert!(report.contains("Subscription expired: false\n"));
    }

    #[test]
    fn domain_check_is_case_insensitive() {
        let report = render(Some(&user("User@HARSH.com")), "@harsh.com");

        assert!(report.contains("Email ends with @harsh.com: true\n"));
    }

    #[test]
    fn reports_foreign_domain() {
        let report = render(Some(&user("user@example.com")), "@harsh.com");

        assert!(report.contains("Email ends with @harsh.com: false\n"));
    }

    #[test]
    fn reports_missing_user() {
        assert_eq!(render(None, "@harsh.com"), "User not found.\n");
    }
}
