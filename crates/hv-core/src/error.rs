//! Error types shared across the Hearthvale crates.

/// Alias for `Result<T, HvError>`.
pub type HvResult<T> = Result<T, HvError>;

/// Errors raised when looking up world content.
///
/// The derivation transforms themselves are total; these errors exist for
/// consumers that address content by name.
#[derive(Debug, thiserror::Error)]
pub enum HvError {
    /// No location with the given name exists in the world.
    #[error("location not found: \"{0}\"")]
    LocationNotFound(String),

    /// No board with the given name exists on the location.
    #[error("board not found: \"{0}\"")]
    BoardNotFound(String),

    /// No quest with the given title is posted at the location.
    #[error("quest not found: \"{0}\"")]
    QuestNotFound(String),
}
