//! Section checks for the pull-request description template.
//!
//! Each check is a pure function over one [`Section`] returning either the
//! accepted content or a [`CheckFailure`]. Aggregation and exit status live in
//! [`crate::report`].

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::description::Section;

/// Minimum trimmed length (exclusive) for a change entry to count as meaningful
pub const DEFAULT_MIN_CHANGE_LENGTH: usize = 10;

/// First checklist entry of the unedited QA template
pub const DEFAULT_QA_PLACEHOLDER: &str =
    "- Once the changes in this PR are merged and deployed, success criteria is:";

const PLACEHOLDER_PATTERN: &str = r"<[^>]+>";
const ISSUE_REF_PATTERN: &str = r"#\d+";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"))
}

fn issue_ref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISSUE_REF_PATTERN).expect("issue pattern is valid"))
}

/// Tunable thresholds for the checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub min_change_length: usize,
    pub qa_placeholder: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_change_length: DEFAULT_MIN_CHANGE_LENGTH,
            qa_placeholder: DEFAULT_QA_PLACEHOLDER.to_string(),
        }
    }
}

/// Why a section was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FailureKind {
    MissingSection,
    NoConcreteChanges,
    ChangesNotMeaningful,
    MissingIssueList,
    MissingResolvedIssues,
    MissingChecklist,
    EmptyChecklist,
    InvalidCriteriaFormat,
    PlaceholderCriteria,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::MissingSection => "MissingSection",
            FailureKind::NoConcreteChanges => "NoConcreteChanges",
            FailureKind::ChangesNotMeaningful => "ChangesNotMeaningful",
            FailureKind::MissingIssueList => "MissingIssueList",
            FailureKind::MissingResolvedIssues => "MissingResolvedIssues",
            FailureKind::MissingChecklist => "MissingChecklist",
            FailureKind::EmptyChecklist => "EmptyChecklist",
            FailureKind::InvalidCriteriaFormat => "InvalidCriteriaFormat",
            FailureKind::PlaceholderCriteria => "PlaceholderCriteria",
        };
        write!(f, "{}", name)
    }
}

/// A rejected section: the failure kind plus the message shown to the PR author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl CheckFailure {
    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn missing_section() -> Self {
        Self::new(
            FailureKind::MissingSection,
            "Section is missing or has no content",
        )
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CheckFailure {}

/// Content accepted by a passing check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accepted {
    /// Meaningful change entries, in document order
    Changes(Vec<String>),
    /// Issue references such as `#42`, duplicates retained
    Issues(Vec<String>),
    /// The issues list explicitly says N/A
    NotApplicable,
    /// The QA success criteria entry
    Criteria(String),
}

impl fmt::Display for Accepted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accepted::Changes(items) => write!(f, "{}", items.join("; ")),
            Accepted::Issues(refs) => write!(f, "{}", refs.join(", ")),
            Accepted::NotApplicable => write!(f, "N/A"),
            Accepted::Criteria(text) => write!(f, "{}", text),
        }
    }
}

pub type CheckResult = Result<Accepted, CheckFailure>;

/// Check the "Description of changes" section.
///
/// Every list item across all list blocks is considered. Empty items and
/// items still carrying `<...>` template placeholders are dropped; at least one
/// of the remaining items must be longer than `rules.min_change_length`.
pub fn validate_description_of_changes(section: &Section, rules: &Rules) -> CheckResult {
    if section.bodies.is_none() {
        return Err(CheckFailure::missing_section());
    }

    let concrete: Vec<&str> = section
        .list_items()
        .map(|item| item.text())
        .filter(|text| !text.is_empty() && !placeholder_regex().is_match(text))
        .collect();

    if concrete.is_empty() {
        return Err(CheckFailure::new(
            FailureKind::NoConcreteChanges,
            "No concrete changes listed (only empty entries or <placeholders>)",
        ));
    }

    let meaningful: Vec<String> = concrete
        .into_iter()
        .filter(|text| text.chars().count() > rules.min_change_length)
        .map(str::to_string)
        .collect();

    if meaningful.is_empty() {
        return Err(CheckFailure::new(
            FailureKind::ChangesNotMeaningful,
            format!(
                "Listed changes are too short to be meaningful (need more than {} characters)",
                rules.min_change_length
            ),
        ));
    }

    Ok(Accepted::Changes(meaningful))
}

/// Check the "GitHub issues resolved by this PR" section.
///
/// Only the first list block is read. It must reference at least one issue
/// (`#123`) or state `N/A`.
pub fn validate_resolved_issues(section: &Section) -> CheckResult {
    if section.bodies.is_none() {
        return Err(CheckFailure::missing_section());
    }

    let raw = match section.first_list() {
        Some(block) if !block.raw.trim().is_empty() => block.raw.as_str(),
        _ => {
            return Err(CheckFailure::new(
                FailureKind::MissingIssueList,
                "No list of resolved issues found",
            ))
        }
    };

    let refs: Vec<String> = issue_ref_regex()
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect();

    if !refs.is_empty() {
        return Ok(Accepted::Issues(refs));
    }

    if raw.to_lowercase().contains("n/a") {
        return Ok(Accepted::NotApplicable);
    }

    Err(CheckFailure::new(
        FailureKind::MissingResolvedIssues,
        format!("No issue references (#123) or N/A found in: {}", raw.trim()),
    ))
}

/// Check the "Quality Assurance" section.
///
/// The first item of the first list block is the success criteria entry. It
/// must have text and must not be the unedited template line.
pub fn validate_qa(section: &Section, rules: &Rules) -> CheckResult {
    if section.bodies.is_none() {
        return Err(CheckFailure::missing_section());
    }

    let Some(list) = section.first_list() else {
        return Err(CheckFailure::new(
            FailureKind::MissingChecklist,
            "No QA checklist found",
        ));
    };

    let Some(first) = list.items().first() else {
        return Err(CheckFailure::new(
            FailureKind::EmptyChecklist,
            "QA checklist has no entries",
        ));
    };

    // A missing or blank entry ends the check here; there is nothing to compare.
    let criteria = first.text();
    if criteria.is_empty() {
        return Err(CheckFailure::new(
            FailureKind::InvalidCriteriaFormat,
            "Success criteria entry has no text",
        ));
    }

    if criteria == rules.qa_placeholder.trim() {
        return Err(CheckFailure::new(
            FailureKind::PlaceholderCriteria,
            "Success criteria still contains the template placeholder",
        ));
    }

    Ok(Accepted::Criteria(criteria.to_string()))
}
