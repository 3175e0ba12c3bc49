//! Terminal detection utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdout};

use crate::config::OutputConfig;

/// Variables set by common CI systems
const CI_VARS: &[&str] = &[
    "CI",
    "CONTINUOUS_INTEGRATION",
    "JENKINS_URL",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "TRAVIS",
    "CIRCLECI",
    "BUILDKITE",
    "DRONE",
    "TEAMCITY_VERSION",
    "TF_BUILD", // Azure DevOps
];

/// Whether status lines should carry ANSI colours
pub fn should_colorize(output: &OutputConfig) -> bool {
    if !output.color_enabled {
        return false;
    }

    // https://no-color.org
    if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }

    supports_ansi()
}

/// Check if both output streams are terminals that understand ANSI codes
pub fn supports_ansi() -> bool {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        return false;
    }

    // CI logs may be attached to a TTY but rarely render escapes
    if is_ci_environment() {
        return false;
    }

    term_supports_ansi(&env::var("TERM").unwrap_or_default())
}

fn term_supports_ansi(term: &str) -> bool {
    !(term.is_empty() || term == "dumb")
}

fn is_ci_environment() -> bool {
    CI_VARS.iter().any(|var| env::var_os(var).is_some())
}
