use std::process::Command;

/// Prefer an explicit environment value (set by the release pipeline),
/// fall back to running a command, then to "unknown".
fn build_value(env_key: &str, program: &str, args: &[&str]) -> String {
    println!("cargo:rerun-if-env-changed={}", env_key);

    std::env::var(env_key).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn main() {
    let git_sha = build_value("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    println!("cargo:rustc-env=GIT_SHA={}", git_sha);

    let build_date = build_value("BUILD_DATE", "date", &["+%Y-%m-%d"]);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
