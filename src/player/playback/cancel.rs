//! Cooperative cancellation of playback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::PvError;

/// Shared flag that stops playback at the next sleep increment.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that is cancelled by Ctrl-C (SIGINT).
    ///
    /// The handler can only be installed once per process.
    pub fn install_ctrlc() -> Result<Self, PvError> {
        let token = Self::new();
        let handler_token = token.clone();
        ctrlc::set_handler(move || handler_token.cancel())?;
        Ok(token)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
