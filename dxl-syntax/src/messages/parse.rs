use crate::errors::Severity;
use crate::syntax::Kind;

/// A message reported by the parser. It gets its location once the tree is
/// built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    pub fn expected(expected: Kind, got: Kind) -> Self {
        Self::error(format!("Expected= {expected}. Got= {got}"))
    }

    pub fn expected_expression(got: Kind) -> Self {
        Self::error(format!("Expected expression start. Got= {got}"))
    }

    pub fn ignored_qualifier(qualifier: &str) -> Self {
        Self::warning(format!("ignored qualifier `{qualifier}`"))
    }

    fn error(text: String) -> Self {
        Self { severity: Severity::Error, text }
    }

    fn warning(text: String) -> Self {
        Self { severity: Severity::Warning, text }
    }
}
