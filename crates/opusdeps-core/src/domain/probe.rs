//! Dependency presence probes and consent answers.

/// Result of asking the system package metadata whether a backend exists.
///
/// Computed on demand; never cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyProbe {
    pub present: bool,
    pub backend: String,
}

impl DependencyProbe {
    pub fn present(backend: impl Into<String>) -> Self {
        Self {
            present: true,
            backend: backend.into(),
        }
    }

    pub fn missing(backend: impl Into<String>) -> Self {
        Self {
            present: false,
            backend: backend.into(),
        }
    }
}

/// Answers accepted as consent; compared after trimming and lowercasing.
pub const AFFIRMATIVE_ANSWERS: [&str; 2] = ["y", "yes"];

/// Interpret one line typed by the operator. Anything but `y`/`yes` is a no.
pub fn parse_consent(line: &str) -> bool {
    let answer = line.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consent_accepts_yes_variants() {
        assert!(parse_consent("y\n"));
        assert!(parse_consent("  YES \r\n"));
        assert!(parse_consent("Yes"));
    }

    #[test]
    fn test_parse_consent_rejects_everything_else() {
        assert!(!parse_consent(""));
        assert!(!parse_consent("\n"));
        assert!(!parse_consent("n"));
        assert!(!parse_consent("yep"));
        assert!(!parse_consent("y es"));
    }
}
