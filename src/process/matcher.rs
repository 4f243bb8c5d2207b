// file: src/process/matcher.rs
// version: 1.0.0
// guid: 84c1f5e2-0d79-4a3b-9e68-b3d50a17c482

//! Platform-dependent process-name comparison

/// Process-name equality rule.
///
/// Linux process names are conventionally case-sensitive; every other
/// platform family compares case-insensitively. The asymmetry follows the
/// OS conventions for process-name casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatcher {
    CaseSensitive,
    CaseInsensitive,
}

impl NameMatcher {
    /// Select the rule for the platform the binary is running on.
    pub fn for_current_platform() -> Self {
        if cfg!(target_os = "linux") {
            Self::CaseSensitive
        } else {
            Self::CaseInsensitive
        }
    }

    /// Compare a candidate process name against the target.
    pub fn matches(self, candidate: &str, target: &str) -> bool {
        match self {
            Self::CaseSensitive => candidate == target,
            Self::CaseInsensitive => candidate.eq_ignore_ascii_case(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive_requires_exact_case() {
        let matcher = NameMatcher::CaseSensitive;
        assert!(matcher.matches("nginx", "nginx"));
        assert!(!matcher.matches("Nginx", "nginx"));
        assert!(!matcher.matches("nginx", "nginx-worker"));
    }

    #[test]
    fn test_case_insensitive_folds_case() {
        let matcher = NameMatcher::CaseInsensitive;
        assert!(matcher.matches("nginx", "nginx"));
        assert!(matcher.matches("Nginx", "nginx"));
        assert!(matcher.matches("NGINX", "nginx"));
        assert!(!matcher.matches("nginx", "nginx-worker"));
    }

    #[test]
    fn test_platform_default_follows_host_convention() {
        // Act
        let matcher = NameMatcher::for_current_platform();

        // Assert
        if cfg!(target_os = "linux") {
            assert_eq!(matcher, NameMatcher::CaseSensitive);
        } else {
            assert_eq!(matcher, NameMatcher::CaseInsensitive);
        }
    }
}
