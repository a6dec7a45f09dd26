//! Operator consent and status output ports.

/// Obtains a yes/no decision from the operator.
///
/// Never fails: anything other than an explicit yes, including an unusable
/// terminal, is a no.
#[cfg_attr(test, mockall::automock)]
pub trait ConsentPrompter: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// Human-readable progress lines shown while bootstrapping.
pub trait StatusReporter: Send + Sync {
    fn info(&self, message: &str);

    fn success(&self, message: &str);

    fn warn(&self, message: &str);
}

/// Status reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStatus;

impl StatusReporter for NoopStatus {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
