use thiserror::Error;

/// Errors surfaced by [`crate::EngineHandle`]
///
/// The game core itself never fails; these only describe the channel to it.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine is not running")]
    Stopped,
    #[error("engine intent buffer is full")]
    Busy,
    #[error("engine task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
