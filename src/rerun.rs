//! Rerun toggle for distribution test tasks.
//!
//! Under an IDE the developer expects a test click to actually run the
//! tests, so rerun defaults on when the IDE host is detected and off
//! otherwise. The resolved value feeds the host engine's up-to-date check
//! inverted: a forced rerun disables the caching short-circuit.

/// Environment value set by the IDE host when builds launch from the IDE.
pub const IDE_HOST_VAR: &str = "IDEA_ACTIVE";

/// The default rerun setting for the current environment.
#[must_use]
pub fn default_rerun() -> bool {
    default_rerun_with(|name| std::env::var_os(name).is_some())
}

/// The default rerun setting using the supplied environment probe.
#[must_use]
pub fn default_rerun_with<F>(ide_active: F) -> bool
where
    F: Fn(&str) -> bool,
{
    ide_active(IDE_HOST_VAR)
}

/// Resolve the rerun setting from the mutually exclusive option pair.
///
/// `--rerun` forces re-execution, `--no-rerun` forces the inverse, and
/// `default` applies when neither flag is given.
#[must_use]
pub fn resolve_rerun(rerun: bool, no_rerun: bool, default: bool) -> bool {
    if rerun {
        true
    } else if no_rerun {
        false
    } else {
        default
    }
}

/// The value handed to the host engine's up-to-date check.
#[must_use]
pub fn up_to_date_when(rerun: bool) -> bool {
    !rerun
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::explicit_rerun(true, false, false, true)]
    #[case::explicit_no_rerun(false, true, true, false)]
    #[case::default_applies(false, false, true, true)]
    #[case::default_off(false, false, false, false)]
    fn resolve_prefers_explicit_flags(
        #[case] rerun: bool,
        #[case] no_rerun: bool,
        #[case] default: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(resolve_rerun(rerun, no_rerun, default), expected);
    }

    #[test]
    fn ide_host_enables_rerun_by_default() {
        temp_env::with_var(IDE_HOST_VAR, Some("true"), || {
            assert!(default_rerun());
        });
    }

    #[test]
    fn plain_environment_disables_rerun_by_default() {
        temp_env::with_var_unset(IDE_HOST_VAR, || {
            assert!(!default_rerun());
        });
    }

    #[test]
    fn forced_rerun_defeats_the_up_to_date_check() {
        assert!(!up_to_date_when(true));
        assert!(up_to_date_when(false));
    }
}
