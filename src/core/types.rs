use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::constants::hostname_policies;

/// What the domain filter does when a URL that passed validation has no
/// extractable hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostnamePolicy {
    /// Drop the URL and log a warning
    #[default]
    Skip,
    /// Stop processing and return an error
    Abort,
}

/// Error returned when a hostname policy name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicyError(pub String);

impl fmt::Display for UnknownPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown hostname policy '{}'. Expected one of: {}.",
            self.0,
            hostname_policies::ALL.join(", ")
        )
    }
}

impl std::error::Error for UnknownPolicyError {}

impl FromStr for HostnamePolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            hostname_policies::SKIP => Ok(Self::Skip),
            hostname_policies::ABORT => Ok(Self::Abort),
            other => Err(UnknownPolicyError(other.to_string())),
        }
    }
}

impl fmt::Display for HostnamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str(hostname_policies::SKIP),
            Self::Abort => f.write_str(hostname_policies::ABORT),
        }
    }
}

/// Options controlling the domain filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub hostname_policy: HostnamePolicy,
    /// Remove the leaked `target=&quot;_blank&quot;` suffix from kept URLs
    pub strip_target_suffix: bool,
}

/// Result of running the domain filter over a URL collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// URLs that passed, in input order
    pub kept: Vec<String>,
    /// Entries that did not parse as absolute URLs
    pub invalid: usize,
    /// Entries whose hostname is not allow-listed
    pub disallowed: usize,
    /// Entries dropped because no hostname could be extracted
    pub hostless: usize,
}

impl FilterOutcome {
    /// Total number of entries the filter dropped
    pub fn dropped(&self) -> usize {
        self.invalid + self.disallowed + self.hostless
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub urls_extracted: usize,
    pub unique_urls: usize,
    pub urls_kept: usize,
    /// None when nothing was written
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_policy_from_str() {
        assert_eq!("skip".parse::<HostnamePolicy>(), Ok(HostnamePolicy::Skip));
        assert_eq!("abort".parse::<HostnamePolicy>(), Ok(HostnamePolicy::Abort));
    }

    #[test]
    fn test_hostname_policy_from_str_is_case_sensitive() {
        let err = "Abort".parse::<HostnamePolicy>().unwrap_err();
        assert_eq!(err, UnknownPolicyError("Abort".to_string()));
        assert!(err.to_string().contains("Expected one of: skip, abort"));
    }

    #[test]
    fn test_hostname_policy_display_round_trips() {
        for policy in [HostnamePolicy::Skip, HostnamePolicy::Abort] {
            assert_eq!(policy.to_string().parse::<HostnamePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_filter_options_default() {
        let options = FilterOptions::default();
        assert_eq!(options.hostname_policy, HostnamePolicy::Skip);
        assert!(!options.strip_target_suffix);
    }

    #[test]
    fn test_filter_outcome_dropped() {
        let outcome = FilterOutcome {
            kept: vec!["https://documentcloud.org/".to_string()],
            invalid: 1,
            disallowed: 2,
            hostless: 3,
        };
        assert_eq!(outcome.dropped(), 6);
    }
}
