//! Aggregation of section results into a single report.
//!
//! The report owns the three section outcomes in template order and derives
//! the process exit status from them.

use serde::Serialize;

use crate::checks::{self, CheckResult, FailureKind, Rules};
use crate::description::{ParsedDescription, DESCRIPTION_KEY, ISSUES_KEY, QA_KEY};
use crate::ui;

/// Exit status when every section passed
pub const EXIT_PASSED: i32 = 0;
/// Exit status when at least one section failed
pub const EXIT_FAILED: i32 = 1;
/// Exit status for unreadable or malformed input
pub const EXIT_INPUT_ERROR: i32 = 2;

/// The template sections, in the order they are checked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    DescriptionOfChanges,
    ResolvedIssues,
    QualityAssurance,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [
        SectionId::DescriptionOfChanges,
        SectionId::ResolvedIssues,
        SectionId::QualityAssurance,
    ];

    /// Key used in the JSON payload
    pub fn key(self) -> &'static str {
        match self {
            SectionId::DescriptionOfChanges => DESCRIPTION_KEY,
            SectionId::ResolvedIssues => ISSUES_KEY,
            SectionId::QualityAssurance => QA_KEY,
        }
    }

    /// Human-readable section title
    pub fn display_name(self) -> &'static str {
        match self {
            SectionId::DescriptionOfChanges => "Description of changes",
            SectionId::ResolvedIssues => "GitHub issues resolved by this PR",
            SectionId::QualityAssurance => "Quality Assurance",
        }
    }

    fn check(self, description: &ParsedDescription, rules: &Rules) -> CheckResult {
        match self {
            SectionId::DescriptionOfChanges => checks::validate_description_of_changes(
                &description.description_of_changes,
                rules,
            ),
            SectionId::ResolvedIssues => {
                checks::validate_resolved_issues(&description.resolved_issues)
            }
            SectionId::QualityAssurance => {
                checks::validate_qa(&description.quality_assurance, rules)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionOutcome {
    pub section: SectionId,
    pub result: CheckResult,
}

impl SectionOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Accepted content on pass, failure message on fail
    pub fn detail(&self) -> String {
        match &self.result {
            Ok(accepted) => accepted.to_string(),
            Err(failure) => failure.message.clone(),
        }
    }

    /// One output line: glyph, section name, detail
    pub fn line(&self) -> String {
        format!(
            "{} {}: {}",
            ui::outcome_glyph(self.passed()),
            self.section.display_name(),
            self.detail()
        )
    }
}

/// Outcome of validating all three sections of one description
#[derive(Debug, Clone)]
pub struct Report {
    pub outcomes: Vec<SectionOutcome>,
}

impl Report {
    /// Run every section check; sections are independent of each other.
    pub fn build(description: &ParsedDescription, rules: &Rules) -> Self {
        let outcomes = SectionId::ALL
            .iter()
            .map(|&section| SectionOutcome {
                section,
                result: section.check(description, rules),
            })
            .collect();
        Self { outcomes }
    }

    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(SectionOutcome::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_PASSED
        } else {
            EXIT_FAILED
        }
    }

    /// Text rendering, one line per section
    pub fn render_text(&self) -> String {
        self.outcomes
            .iter()
            .map(SectionOutcome::line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// JSON rendering for machine consumers
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport::from(self))
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    section: &'a str,
    name: &'a str,
    passed: bool,
    kind: Option<FailureKind>,
    message: String,
}

impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            passed: report.passed(),
            sections: report
                .outcomes
                .iter()
                .map(|o| JsonSection {
                    section: o.section.key(),
                    name: o.section.display_name(),
                    passed: o.passed(),
                    kind: o.result.as_ref().err().map(|f| f.kind),
                    message: o.detail(),
                })
                .collect(),
        }
    }
}
