//! Cooperative cancellation threaded through persistence calls.

use crate::StoreError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A caller-supplied cancellation signal.
///
/// Clones share the same flag. Backends check it at the top of every call;
/// the pure computation crates never look at it (they have no suspension
/// points).
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Bail out with [`StoreError::Cancelled`] if the token is set.
    pub fn check(&self) -> Result<(), StoreError> {
        if self.is_cancelled() {
            Err(StoreError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(token.check().is_ok());

        clone.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(StoreError::Cancelled)));
    }
}
