//! Error types for the derivation passes.

/// Alias for `Result<T, WorldGenError>`.
pub type WorldGenResult<T> = Result<T, WorldGenError>;

/// Errors raised by the derivation passes.
#[derive(Debug, thiserror::Error)]
pub enum WorldGenError {
    /// Board assembly was invoked a second time on the same location.
    ///
    /// Re-running assembly would re-append every already-posted quest to
    /// the location's flat quest list, so the second call is rejected
    /// before touching anything.
    #[error("quest boards already assembled for \"{0}\"")]
    AlreadyAssembled(String),
}
