//! Recording injector for tests and dry runs.
//!
//! # Why a recording injector?
//!
//! The real injector (`SendInput`) presses keys on the machine running the
//! code.  That cannot be observed from a test, and it types into whatever
//! window happens to have focus.
//!
//! [`RecordingInjector`] replaces the OS call with in-memory recording.
//! Each submitted batch is pushed into a `Mutex<Vec<...>>` so that callers
//! can inspect exactly what would have been injected and in what order.
//! The `winput plan` command uses it to print a batch without typing it.
//!
//! # Usage in tests
//!
//! ```
//! use std::sync::Arc;
//! use winput::infrastructure::injection::mock::RecordingInjector;
//! use winput::InputSession;
//! use winput_core::{HotKey, UsQwertyLayout};
//!
//! let injector = Arc::new(RecordingInjector::new());
//! let session = InputSession::new(Arc::new(UsQwertyLayout), injector.clone());
//!
//! assert!(session.hot_key(HotKey::Copy));
//! assert_eq!(injector.events().len(), 4);
//! ```
//!
//! # Simulating OS failures
//!
//! Set `accept_limit` to make the injector accept only a prefix of each
//! batch (a partial injection), or `should_fail` to make every call fail.

use std::sync::Mutex;

use winput_core::PrimitiveEvent;

use crate::application::injection::{InjectionError, InputInjector};

/// An injector that records batches without touching the OS.
#[derive(Debug, Default)]
pub struct RecordingInjector {
    /// Every batch passed to `send`, in call order.
    pub batches: Mutex<Vec<Vec<PrimitiveEvent>>>,
    /// When set, at most this many events per batch are reported accepted.
    pub accept_limit: Option<u32>,
    /// When `true`, every call returns `InjectionError::Platform`.
    pub should_fail: bool,
}

impl RecordingInjector {
    /// Creates an injector that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an injector that accepts at most `limit` events per batch.
    pub fn accepting(limit: u32) -> Self {
        Self {
            accept_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Creates an injector whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// All recorded events, batches concatenated.
    pub fn events(&self) -> Vec<PrimitiveEvent> {
        self.lock_batches().iter().flatten().copied().collect()
    }

    /// Number of `send` calls recorded.
    pub fn batch_count(&self) -> usize {
        self.lock_batches().len()
    }

    fn lock_batches(&self) -> std::sync::MutexGuard<'_, Vec<Vec<PrimitiveEvent>>> {
        self.batches.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl InputInjector for RecordingInjector {
    fn send(&self, events: &[PrimitiveEvent]) -> Result<u32, InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        self.lock_batches().push(events.to_vec());

        let total = events.len() as u32;
        Ok(self.accept_limit.map_or(total, |limit| total.min(limit)))
    }
}
