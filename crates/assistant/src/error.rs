//! Assistant error types.

use thiserror::Error;

/// Errors that can occur while processing a chat message.
///
/// Reply building is pure catalog filtering, so the only failure mode is a
/// handler panicking mid-reply. Callers are expected to degrade to a canned
/// apology rather than surfacing this to the shopper.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A reply handler panicked while building the response.
    #[error("reply handler failed for message")]
    HandlerFailed,
}
