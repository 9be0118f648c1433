/// Crate-wide result type.
///
/// Domain failures are raised as [`AuditError`](crate::shared::error::AuditError)
/// and carried through `anyhow::Error` so callers can add context with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
