//! Version information baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// The crate version as published in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version banner printed by `skyflap --version`.
pub fn version_line() -> String {
    format!("skyflap {} ({} {})", VERSION, BUILD_DATE, BUILD_COMMIT)
}
