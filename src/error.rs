use std::borrow::Cow;
use std::error;
use std::fmt;

/// Message used when unwrapping an absent option without a custom message.
pub(crate) const UNWRAP_MESSAGE: &str = "Tried to unwrap value of none Option";

/// Error raised when a value is demanded from an absent option.
#[derive(Clone, PartialEq, Eq)]
pub struct UnwrapError {
    message: Cow<'static, str>,
}

impl UnwrapError {
    #[inline]
    pub(crate) fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            message: message.into(),
        }
    }

    /// The message describing the failed unwrap.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for UnwrapError {
    #[inline]
    fn default() -> Self {
        Self::new(UNWRAP_MESSAGE)
    }
}

impl fmt::Display for UnwrapError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl fmt::Debug for UnwrapError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnwrapError").field(&self.message).finish()
    }
}

impl error::Error for UnwrapError {}

#[cfg(test)]
mod tests {
    use super::{UnwrapError, UNWRAP_MESSAGE};

    #[test]
    fn test_display() {
        assert_eq!(UnwrapError::default().to_string(), UNWRAP_MESSAGE);
        assert_eq!(UnwrapError::new(String::from("boom")).message(), "boom");
    }

    #[test]
    fn test_anyhow_context() {
        let error = anyhow::Error::from(UnwrapError::new("missing")).context("probing");
        let causes = error.chain().map(|e| e.to_string()).collect::<Vec<_>>();
        assert_eq!(causes, ["probing", "missing"]);
    }
}
