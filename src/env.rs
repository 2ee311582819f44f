//! Execution-environment probes.
//!
//! The resolver never reads the process environment directly; it goes through
//! the [`Environment`] trait so tests (and embedders) can substitute a fake.
//! Every probe is a pure, side-effect-free read that can be repeated safely.

use std::io::IsTerminal;

/// Source of environment facts the resolver probes.
pub trait Environment {
    /// Whether the process is attached to an interactive terminal session.
    fn is_interactive(&self) -> bool;

    /// Build-time OS family fact (true when compiled for Windows).
    fn os_family_is_windows(&self) -> bool;

    /// Read an environment variable, `None` if absent or not unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn is_interactive(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    fn os_family_is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_var_reads_process_env() {
        let env = SystemEnvironment;
        // PATH is set in any sane test environment
        assert!(env.var("PATH").is_some());
        assert!(env.var("TERMADAPT_DEFINITELY_UNSET_VAR").is_none());
    }

    #[test]
    fn test_os_family_matches_build_target() {
        let env = SystemEnvironment;
        assert_eq!(env.os_family_is_windows(), cfg!(windows));
    }
}
