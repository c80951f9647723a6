/// The error type for rejected caller input.
///
/// Every variant is a fail-fast boundary check: the buffer is left exactly as
/// it was before the rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunLengthError {
    /// An argument violated the operation's precondition.
    InvalidArgument(&'static str),
}

impl core::fmt::Display for RunLengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for RunLengthError {}
