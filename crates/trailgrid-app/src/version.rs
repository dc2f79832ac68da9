//! Version string shown by `trailgrid --version`.

use std::sync::LazyLock;

static VERSION: LazyLock<String> = LazyLock::new(build_version);

/// Returns a combined version string: `pkg_version (git_hash)`.
///
/// If git metadata is unavailable, the hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}

/// Returns [`build_version`] computed once for the process.
#[must_use]
pub fn version() -> &'static str {
    VERSION.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_package_version() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version().ends_with(')'));
    }
}
