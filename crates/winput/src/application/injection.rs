//! The injector seam: submitting a complete event batch to the OS.
//!
//! An [`InputInjector`] hands an ordered batch to the system input stream
//! in one call and reports how many events were accepted.  [`press`] turns
//! that count into a verdict: the batch succeeded only if every event was
//! accepted.  Partially delivered batches are not rolled back because the
//! OS offers no way to take injected input back.

use thiserror::Error;
use tracing::{debug, warn};
use winput_core::PrimitiveEvent;

/// Error type for batch injection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    /// The action produced no events, so nothing was submitted.
    #[error("no events to inject")]
    EmptyBatch,

    /// The OS accepted fewer events than were submitted.
    #[error("OS accepted {accepted} of {submitted} events")]
    Partial { submitted: usize, accepted: usize },

    /// The injection call could not be made at all.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Outcome of a fully accepted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionReport {
    pub submitted: usize,
    pub accepted: usize,
}

/// Submits event batches to the system input stream.
///
/// Implementations must deliver a batch atomically with respect to other
/// injectors and must be safe to call from any thread.
#[cfg_attr(test, mockall::automock)]
pub trait InputInjector: Send + Sync {
    /// Submits `events` as one batch and returns how many the OS accepted.
    ///
    /// Never called with an empty slice.
    fn send(&self, events: &[PrimitiveEvent]) -> Result<u32, InjectionError>;
}

/// Submits `events` through `injector` exactly once.
///
/// # Errors
///
/// - [`InjectionError::EmptyBatch`] if `events` is empty; the injector is
///   not called.
/// - [`InjectionError::Partial`] if the accepted count differs from the
///   batch length.
/// - Any error returned by the injector itself.
pub fn press<I: InputInjector + ?Sized>(
    injector: &I,
    events: &[PrimitiveEvent],
) -> Result<InjectionReport, InjectionError> {
    if events.is_empty() {
        return Err(InjectionError::EmptyBatch);
    }

    let submitted = events.len();
    let accepted = injector.send(events)? as usize;
    debug!("injected batch: {accepted}/{submitted} events accepted");

    if accepted != submitted {
        warn!("partial injection: {accepted} of {submitted} events accepted");
        return Err(InjectionError::Partial {
            submitted,
            accepted,
        });
    }

    Ok(InjectionReport {
        submitted,
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use winput_core::{hotkey_events, HotKey};

    #[test]
    fn test_press_empty_batch_fails_without_calling_injector() {
        // Arrange – no expectations: any call would panic
        let injector = MockInputInjector::new();

        // Act
        let result = press(&injector, &[]);

        // Assert
        assert_eq!(result, Err(InjectionError::EmptyBatch));
    }

    #[test]
    fn test_press_succeeds_when_all_events_accepted() {
        // Arrange
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .withf(|events| events.len() == 4)
            .times(1)
            .returning(|events| Ok(events.len() as u32));

        // Act
        let report = press(&injector, &hotkey_events(HotKey::Copy)).unwrap();

        // Assert
        assert_eq!(report, InjectionReport { submitted: 4, accepted: 4 });
    }

    #[test]
    fn test_press_partial_acceptance_is_failure() {
        let mut injector = MockInputInjector::new();
        injector.expect_send().times(1).returning(|_| Ok(1));

        let result = press(&injector, &hotkey_events(HotKey::Paste));

        assert_eq!(
            result,
            Err(InjectionError::Partial { submitted: 4, accepted: 1 })
        );
    }

    #[test]
    fn test_press_zero_accepted_is_failure() {
        let mut injector = MockInputInjector::new();
        injector.expect_send().times(1).returning(|_| Ok(0));

        let result = press(&injector, &hotkey_events(HotKey::Enter));

        assert!(matches!(result, Err(InjectionError::Partial { accepted: 0, .. })));
    }

    #[test]
    fn test_press_propagates_platform_error_without_retry() {
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .times(1)
            .returning(|_| Err(InjectionError::Platform("desktop locked".into())));

        let result = press(&injector, &hotkey_events(HotKey::Tab));

        assert_eq!(result, Err(InjectionError::Platform("desktop locked".into())));
    }
}
