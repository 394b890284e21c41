// Build script to inject version information from git tags
//
// Falls back to CARGO_PKG_VERSION when git is unavailable or the source
// tree is not a checkout.

use std::process::Command;

fn main() {
    let version = get_git_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=AUTOCMT_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

fn get_git_version() -> Option<String> {
    // Something like "v0.1.0", "v0.1.0-5-gabc123" or "abc123-dirty"
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let base_version = env!("CARGO_PKG_VERSION");

    if let Some(tagged) = described.strip_prefix('v') {
        // Keep just the tag part of "0.1.0-5-gabc123-dirty"
        Some(tagged.split('-').next().unwrap_or(tagged).to_string())
    } else if let Some(commit) = described.strip_suffix("-dirty") {
        Some(format!("{}-{}-dirty", base_version, commit))
    } else {
        Some(format!("{}-{}", base_version, described))
    }
}
