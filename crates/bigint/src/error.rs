//! Error type for fallible big integer operations.

/// Big integer operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("malformed decimal string")]
    ParseError,
    #[error("division by zero")]
    DivisionByZero,
}
