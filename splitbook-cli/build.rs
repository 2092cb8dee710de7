//! Embeds the short commit hash shown by `splitbook --version`.

use std::process::Command;

fn git_short_sha() -> Option<String> {
    let root = std::env::var("CARGO_MANIFEST_DIR").ok()?;
    let out = Command::new("git")
        .args(["-C", &root, "rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!sha.is_empty()).then_some(sha)
}

fn main() {
    let sha = git_short_sha().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SPLITBOOK_BUILD_SHA={sha}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
