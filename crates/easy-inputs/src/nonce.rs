//! Security token hook.
//!
//! The host application owns nonce generation. Forms only ask for a token by
//! scope and splice whatever comes back into the markup verbatim.

/// Issues a security token for a named scope.
pub trait TokenIssuer {
    /// Returns the markup to embed for `scope`, typically a hidden input.
    fn issue_token(&self, scope: &str) -> String;
}

/// Issuer that emits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokens;

impl TokenIssuer for NoTokens {
    fn issue_token(&self, _scope: &str) -> String {
        String::new()
    }
}

impl<F> TokenIssuer for F
where
    F: Fn(&str) -> String,
{
    fn issue_token(&self, scope: &str) -> String {
        self(scope)
    }
}
