use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use prlint::checks::DEFAULT_QA_PLACEHOLDER;
use serde_json::{json, Value};

/// A list block built from item texts.
#[allow(dead_code)]
pub fn list_block(items: &[&str]) -> Value {
    json!({
        "type": "list",
        "raw": items.join("\n"),
        "items": items
            .iter()
            .map(|raw| json!({"checked": false, "raw": raw}))
            .collect::<Vec<_>>(),
    })
}

/// A section with a single list block.
#[allow(dead_code)]
pub fn list_section(items: &[&str]) -> Value {
    json!({ "bodies": [list_block(items)] })
}

/// A payload where every section passes.
#[allow(dead_code)]
pub fn valid_payload() -> Value {
    json!({
        "Description_of_changes": list_section(&["<describe change here>", "Fixed the login bug"]),
        "GitHub_issues_resolved_by_this_PR": list_section(&["Fixes #42 and #108"]),
        "Quality_Assurance": list_section(&["- Login succeeds for SSO users"]),
    })
}

/// The PR template with nothing filled in.
#[allow(dead_code)]
pub fn unedited_template() -> String {
    format!(
        "## Description of changes\n\n- <describe change here>\n\n\
         ## GitHub issues resolved by this PR\n\n- <link the issue here>\n\n\
         ## Quality Assurance\n\n{}\n- [ ] Tests added\n",
        DEFAULT_QA_PLACEHOLDER
    )
}

/// The PR template filled in by an author.
#[allow(dead_code)]
pub fn filled_template() -> String {
    "## Description of changes\n\n\
     - Fixed the login bug for SSO users\n\
     - Added a retry around token refresh\n\n\
     ## GitHub issues resolved by this PR\n\n- Fixes #42\n\n\
     ## Quality Assurance\n\n\
     - Logged in with an SSO account on staging\n\
     - [x] Tests added\n"
        .to_string()
}

#[allow(dead_code)]
pub fn encode(payload: &Value) -> String {
    BASE64.encode(payload.to_string())
}
