//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line printed by `--version`.
#[must_use]
pub fn full_version() -> String {
    format!("apcalc {}", version())
}

/// Target description, e.g. `linux/x86_64`.
#[must_use]
pub fn build_target() -> String {
    format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
}
