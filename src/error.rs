use thiserror::Error;

/// Error produced by [`Optional::unwrap`](crate::Optional::unwrap) on a blank.
///
/// Use [`unwrap_or`](crate::Optional::unwrap_or) or
/// [`unwrap_or_else`](crate::Optional::unwrap_or_else) where a fallback exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("blank has no value")]
pub struct EmptyAccess;
