//! Platform detection.

/// Check if running in a CI environment.
///
/// Used to pick the plain, non-interactive UI in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// CI detection against a custom env var lookup.
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|key| env_fn(key).is_ok())
}

/// Name of the executables directory inside a virtual environment.
pub fn env_bin_dir_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "Scripts"
    } else {
        "bin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn detects_github_actions() {
        let found = is_ci_with_env(|key| {
            if key == "GITHUB_ACTIONS" {
                Ok("true".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        });
        assert!(found);
    }

    #[test]
    fn no_ci_vars_means_not_ci() {
        assert!(!is_ci_with_env(|_| Err(VarError::NotPresent)));
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }

    #[test]
    #[cfg(unix)]
    fn bin_dir_is_bin_on_unix() {
        assert_eq!(env_bin_dir_name(), "bin");
    }
}
