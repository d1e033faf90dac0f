use std::process::Command;

/// `git describe` of the working tree, e.g. `a1b2c3d` or `a1b2c3d-dirty`.
fn describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let described = String::from_utf8(out.stdout).ok()?;
    Some(described.trim().to_owned()).filter(|s| !s.is_empty())
}

fn main() {
    let revision = describe().unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=RPOLY_BUILD_SHA={revision}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/index");
}
