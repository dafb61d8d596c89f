//! Case [`Status`] classification and its badge style tokens.

use strum::{Display, EnumString};

/// Workflow status of a case, parsed from the free-form strings the backend
/// reports.
///
/// Synonymous spellings collapse into one canonical variant, so every portal
/// surface renders the same badge for `"open"` and `"active"`.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Status {
    /// Case is being actively worked on.
    #[strum(serialize = "active", serialize = "open")]
    Active,

    /// Case has been brought to a conclusion.
    #[strum(serialize = "resolved", serialize = "closed")]
    Resolved,

    /// Case is awaiting action.
    #[strum(serialize = "pending", serialize = "in progress")]
    Pending,

    /// Case is under review.
    #[strum(serialize = "review", serialize = "in review")]
    Review,

    /// Case has an upcoming scheduled event.
    Scheduled,

    /// Case requires immediate attention.
    #[strum(serialize = "urgent", serialize = "critical")]
    Urgent,
}

impl Status {
    /// Classifies the provided free-form `status` string, if any.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// Unrecognized and absent input yield [`None`].
    #[must_use]
    pub fn classify(status: Option<&str>) -> Option<Self> {
        status.and_then(|s| s.trim().parse().ok())
    }

    /// Returns the [`Style`] token of this [`Status`] for the light portal
    /// theme.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Active => Style::Active,
            Self::Resolved => Style::Resolved,
            Self::Pending => Style::Pending,
            Self::Review => Style::Review,
            Self::Scheduled => Style::Scheduled,
            Self::Urgent => Style::Urgent,
        }
    }

    /// Returns the [`DarkStyle`] token of this [`Status`] for the dark portal
    /// theme.
    #[must_use]
    pub const fn dark_style(self) -> DarkStyle {
        match self {
            Self::Active => DarkStyle::Active,
            Self::Resolved => DarkStyle::Resolved,
            Self::Pending => DarkStyle::Pending,
            Self::Review => DarkStyle::Review,
            Self::Scheduled => DarkStyle::Scheduled,
            Self::Urgent => DarkStyle::Urgent,
        }
    }
}

/// Badge style token of the light portal theme.
///
/// [`Display`]s as the CSS class list of the badge.
///
/// [`Display`]: std::fmt::Display
#[derive(
    Clone, Copy, Debug, Default, derive_more::Display, Eq, PartialEq,
)]
pub enum Style {
    /// Badge of an active case.
    #[display("bg-emerald-100 text-emerald-700")]
    Active,

    /// Badge of a resolved case.
    #[display("bg-slate-100 text-slate-600")]
    Resolved,

    /// Badge of a pending case.
    #[display("bg-amber-100 text-amber-700")]
    Pending,

    /// Badge of a case under review.
    #[display("bg-purple-100 text-purple-700")]
    Review,

    /// Badge of a scheduled case.
    #[display("bg-blue-100 text-blue-700")]
    Scheduled,

    /// Badge of an urgent case.
    #[display("bg-red-100 text-red-700")]
    Urgent,

    /// Badge of a case with an unrecognized or absent status.
    #[default]
    #[display("bg-slate-100 text-slate-700")]
    Unknown,
}

impl Style {
    /// Returns the [`Style`] token for the provided free-form `status`
    /// string, if any.
    ///
    /// Never fails: unrecognized and absent input yield [`Style::Unknown`].
    #[must_use]
    pub fn of(status: Option<&str>) -> Self {
        Status::classify(status).map_or_else(Self::default, Status::style)
    }
}

/// Badge style token of the dark portal theme.
///
/// Same grouping and defaulting as [`Style`], visually distinct class lists.
///
/// [`Display`]s as the CSS class list of the badge.
///
/// [`Display`]: std::fmt::Display
#[derive(
    Clone, Copy, Debug, Default, derive_more::Display, Eq, PartialEq,
)]
pub enum DarkStyle {
    /// Badge of an active case.
    #[display("dark:bg-emerald-900/30 dark:text-emerald-400")]
    Active,

    /// Badge of a resolved case.
    #[display("dark:bg-slate-700/50 dark:text-slate-400")]
    Resolved,

    /// Badge of a pending case.
    #[display("dark:bg-amber-900/30 dark:text-amber-400")]
    Pending,

    /// Badge of a case under review.
    #[display("dark:bg-purple-900/30 dark:text-purple-400")]
    Review,

    /// Badge of a scheduled case.
    #[display("dark:bg-blue-900/30 dark:text-blue-400")]
    Scheduled,

    /// Badge of an urgent case.
    #[display("dark:bg-red-900/30 dark:text-red-400")]
    Urgent,

    /// Badge of a case with an unrecognized or absent status.
    #[default]
    #[display("dark:bg-slate-700/50 dark:text-slate-400")]
    Unknown,
}

impl DarkStyle {
    /// Returns the [`DarkStyle`] token for the provided free-form `status`
    /// string, if any.
    ///
    /// Never fails: unrecognized and absent input yield
    /// [`DarkStyle::Unknown`].
    #[must_use]
    pub fn of(status: Option<&str>) -> Self {
        Status::classify(status).map_or_else(Self::default, Status::dark_style)
    }
}

#[cfg(test)]
mod spec {
    use super::{DarkStyle, Status, Style};

    #[test]
    fn classifies_synonyms_to_canonical_form() {
        for (input, expected) in [
            ("active", Status::Active),
            ("open", Status::Active),
            ("resolved", Status::Resolved),
            ("closed", Status::Resolved),
            ("pending", Status::Pending),
            ("in progress", Status::Pending),
            ("review", Status::Review),
            ("in review", Status::Review),
            ("scheduled", Status::Scheduled),
            ("urgent", Status::Urgent),
            ("critical", Status::Urgent),
        ] {
            assert_eq!(Status::classify(Some(input)), Some(expected));
        }
    }

    #[test]
    fn classifies_case_insensitively() {
        assert_eq!(Status::classify(Some("Active")), Some(Status::Active));
        assert_eq!(Status::classify(Some("ACTIVE")), Some(Status::Active));
        assert_eq!(Status::classify(Some("Open")), Some(Status::Active));
        assert_eq!(Status::classify(Some("CLOSED")), Some(Status::Resolved));
        assert_eq!(
            Status::classify(Some("In Progress")),
            Some(Status::Pending),
        );
    }

    #[test]
    fn tolerates_unknown_and_absent_input() {
        assert_eq!(Status::classify(None), None);
        assert_eq!(Status::classify(Some("")), None);
        assert_eq!(Status::classify(Some("archived")), None);

        assert_eq!(Style::of(None), Style::Unknown);
        assert_eq!(Style::of(Some("archived")), Style::Unknown);
        assert_eq!(DarkStyle::of(None), DarkStyle::Unknown);
        assert_eq!(DarkStyle::of(Some("archived")), DarkStyle::Unknown);
    }

    #[test]
    fn synonyms_share_one_style_token() {
        assert_eq!(Style::of(Some("open")), Style::of(Some("active")));
        assert_eq!(Style::of(Some("closed")), Style::of(Some("resolved")));
        assert_eq!(
            DarkStyle::of(Some("critical")),
            DarkStyle::of(Some("urgent")),
        );
    }

    #[test]
    fn renders_badge_classes() {
        assert_eq!(
            Style::of(Some("Active")).to_string(),
            "bg-emerald-100 text-emerald-700",
        );
        assert_eq!(
            Style::of(Some("resolved")).to_string(),
            "bg-slate-100 text-slate-600",
        );
        assert_eq!(Style::of(None).to_string(), "bg-slate-100 text-slate-700");
        assert_eq!(
            DarkStyle::of(Some("open")).to_string(),
            "dark:bg-emerald-900/30 dark:text-emerald-400",
        );
        assert_eq!(
            DarkStyle::of(None).to_string(),
            "dark:bg-slate-700/50 dark:text-slate-400",
        );
    }
}
