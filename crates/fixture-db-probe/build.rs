//! Build script for fixture-db-probe
//!
//! Captures the toolchain version the fixture was built with and bakes
//! it in for the `/version` route.

use std::env;
use std::process::Command;

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| String::from("rustc"));

    // `rustc --version` prints e.g. "rustc 1.80.1 (3f5fd8dd4 2024-08-06)";
    // strip the leading tool name so the route reports the bare version.
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|raw| raw.trim().trim_start_matches("rustc ").to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| String::from("unknown"));

    println!("cargo:rustc-env=RUSTC_VERSION={}", version);

    // Trigger recompilation if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
