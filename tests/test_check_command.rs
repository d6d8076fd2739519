//! End-to-end tests for `prlint check`

use serde_json::json;

mod support;
use support::fixtures::{encode, list_section, valid_payload};
use support::harness::{result_lines, TestHarness};

// ============================================================================
// PASSING PAYLOADS
// ============================================================================

#[test]
fn test_check_all_sections_pass() {
    let harness = TestHarness::new();
    let output = harness.check(&encode(&valid_payload()));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        result_lines(&output),
        vec![
            "✓ Description of changes: Fixed the login bug",
            "✓ GitHub issues resolved by this PR: #42, #108",
            "✓ Quality Assurance: - Login succeeds for SSO users",
        ]
    );
}

#[test]
fn test_check_not_applicable_issues() {
    let harness = TestHarness::new();
    let mut payload = valid_payload();
    payload["GitHub_issues_resolved_by_this_PR"] = list_section(&["No related issue, N/A"]);

    let output = harness.check(&encode(&payload));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        result_lines(&output)[1],
        "✓ GitHub issues resolved by this PR: N/A"
    );
}

// ============================================================================
// FAILING PAYLOADS
// ============================================================================

#[test]
fn test_check_missing_qa_bodies() {
    let harness = TestHarness::new();
    let mut payload = valid_payload();
    payload["Quality_Assurance"] = json!({});

    let output = harness.check(&encode(&payload));
    let lines = result_lines(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("✓ Description of changes"));
    assert!(lines[1].starts_with("✓ GitHub issues resolved by this PR"));
    assert!(lines[2].starts_with("✗ Quality Assurance"));
    assert_eq!(lines.iter().filter(|l| l.starts_with('✗')).count(), 1);
}

#[test]
fn test_check_sections_fail_independently() {
    let harness = TestHarness::new();
    let payload = json!({
        "Description_of_changes": list_section(&["Fixd"]),
        "GitHub_issues_resolved_by_this_PR": list_section(&["See the issue tracker"]),
        "Quality_Assurance": list_section(&["- Verified on staging"]),
    });

    let output = harness.check(&encode(&payload));
    let lines = result_lines(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(lines[0].starts_with("✗ Description of changes"));
    assert!(lines[1].contains("See the issue tracker"));
    assert!(lines[1].starts_with("✗"));
    assert!(lines[2].starts_with("✓ Quality Assurance"));
}

#[test]
fn test_check_json_format() {
    let harness = TestHarness::new();
    let mut payload = valid_payload();
    payload["Quality_Assurance"] = json!({"bodies": [{"type": "list", "raw": "", "items": []}]});

    let output = harness.run(
        &["check", "--format", "json"],
        &[("PR_DESCRIPTION", encode(&payload).as_str())],
    );
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["sections"][2]["section"], "Quality_Assurance");
    assert_eq!(report["sections"][2]["kind"], "EmptyChecklist");
}

// ============================================================================
// INPUT SOURCES AND CONFIG
// ============================================================================

#[test]
fn test_check_reads_payload_file() {
    let harness = TestHarness::new();
    let path = harness.write_file("payload.b64", &format!("{}\n", encode(&valid_payload())));

    let output = harness.run(&["check", "--file", path.to_str().unwrap()], &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_check_custom_env_var() {
    let harness = TestHarness::new();
    let output = harness.run(
        &["check", "--env", "BODY_B64"],
        &[("BODY_B64", encode(&valid_payload()).as_str())],
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_check_uses_project_config() {
    let harness = TestHarness::new();
    harness.write_config("---\ninput_env: BODY_B64\nmin_change_length: 3\n---\n");

    let mut payload = valid_payload();
    payload["Description_of_changes"] = list_section(&["Fixd"]);

    let output = harness.run(&["check"], &[("BODY_B64", encode(&payload).as_str())]);
    assert_eq!(output.status.code(), Some(0));
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn test_check_missing_variable() {
    let harness = TestHarness::new();
    let output = harness.run(&["check"], &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(result_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PR_DESCRIPTION"));
}

#[test]
fn test_check_invalid_base64() {
    let harness = TestHarness::new();
    let output = harness.check("%%% not base64 %%%");

    assert_eq!(output.status.code(), Some(2));
    assert!(result_lines(&output).is_empty());
}

#[test]
fn test_check_invalid_json() {
    let harness = TestHarness::new();
    let output = harness.check(&encode(&json!("just a string")));

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Malformed description payload"));
}
