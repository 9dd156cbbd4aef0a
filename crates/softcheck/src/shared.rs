//! Thread-safe handle around one accumulator

use std::sync::Arc;

use parking_lot::Mutex;

use crate::accumulator::SoftAssertions;
use crate::config::SoftAssertConfig;
use crate::error::AssertionError;

/// Cloneable handle sharing one [`SoftAssertions`] between threads.
///
/// Each `with` call holds the lock for the whole closure, so a batch of checks
/// lands in the pending list contiguously.
#[derive(Debug, Clone, Default)]
pub struct SharedSoftAssertions {
    inner: Arc<Mutex<SoftAssertions>>,
}

impl SharedSoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SoftAssertConfig) -> Self {
        SoftAssertions::with_config(config).into()
    }

    /// Run checks against the locked accumulator
    pub fn with<R>(&self, f: impl FnOnce(&mut SoftAssertions) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending_count()
    }

    pub fn assert_all(&self) -> Result<(), AssertionError> {
        self.inner.lock().assert_all()
    }
}

impl From<SoftAssertions> for SharedSoftAssertions {
    fn from(sa: SoftAssertions) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sa)),
        }
    }
}
