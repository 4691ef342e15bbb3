//! InputSession: the public typing and hotkey operations.
//!
//! A session pairs one keyboard layout (captured when the session is
//! created) with one injector.  Each call sequences a full batch and
//! submits it once; nothing is queued or retried, and no state carries over
//! between calls.
//!
//! The boolean operations ([`InputSession::type_text`],
//! [`InputSession::hot_key`], [`InputSession::tap`]) report only success or
//! failure.  Their `try_` counterparts return the [`InjectionError`] detail.

use std::sync::Arc;

use tracing::{debug, warn};
use winput_core::{
    hotkey_events, tap_events, text_events, HotKey, KeyCode, KeyboardLayout, ModifierKind,
    PrimitiveEvent, UnicodeRelease,
};

use super::injection::{press, InjectionError, InjectionReport, InputInjector};

/// Per-session behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Release policy for characters typed as Unicode events.
    pub unicode_release: UnicodeRelease,
}

/// A long-lived handle for synthesizing keyboard input.
pub struct InputSession {
    layout: Arc<dyn KeyboardLayout>,
    injector: Arc<dyn InputInjector>,
    options: SessionOptions,
}

impl InputSession {
    /// Creates a session with default options.
    pub fn new(layout: Arc<dyn KeyboardLayout>, injector: Arc<dyn InputInjector>) -> Self {
        Self::with_options(layout, injector, SessionOptions::default())
    }

    pub fn with_options(
        layout: Arc<dyn KeyboardLayout>,
        injector: Arc<dyn InputInjector>,
        options: SessionOptions,
    ) -> Self {
        Self {
            layout,
            injector,
            options,
        }
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Builds the batch [`InputSession::type_text`] would submit for `text`.
    pub fn text_batch(&self, text: &str) -> Vec<PrimitiveEvent> {
        text_events(self.layout.as_ref(), text, self.options.unicode_release)
    }

    /// Types `text` as a single batch.
    ///
    /// # Errors
    ///
    /// [`InjectionError::EmptyBatch`] for empty text, or whatever [`press`]
    /// reports for the batch.
    pub fn try_type_text(&self, text: &str) -> Result<InjectionReport, InjectionError> {
        let events = self.text_batch(text);
        debug!("typing {} chars as {} events", text.chars().count(), events.len());
        press(self.injector.as_ref(), &events)
    }

    /// Types `text`, returning `true` only if the whole batch was accepted.
    pub fn type_text(&self, text: &str) -> bool {
        verdict("type", self.try_type_text(text))
    }

    /// Sends the fixed key combination for `hotkey`.
    ///
    /// # Errors
    ///
    /// Whatever [`press`] reports for the batch.
    pub fn try_hot_key(&self, hotkey: HotKey) -> Result<InjectionReport, InjectionError> {
        let events = hotkey_events(hotkey);
        debug!("sending hotkey {hotkey} as {} events", events.len());
        press(self.injector.as_ref(), &events)
    }

    /// Sends `hotkey`, returning `true` only if the whole batch was accepted.
    pub fn hot_key(&self, hotkey: HotKey) -> bool {
        verdict("hotkey", self.try_hot_key(hotkey))
    }

    /// Presses and releases an arbitrary key held with `modifier`.
    ///
    /// # Errors
    ///
    /// Whatever [`press`] reports for the batch.
    pub fn try_tap(
        &self,
        key: KeyCode,
        modifier: ModifierKind,
    ) -> Result<InjectionReport, InjectionError> {
        press(self.injector.as_ref(), &tap_events(key, modifier))
    }

    pub fn tap(&self, key: KeyCode, modifier: ModifierKind) -> bool {
        verdict("tap", self.try_tap(key, modifier))
    }
}

fn verdict(action: &str, result: Result<InjectionReport, InjectionError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            warn!("{action} failed: {e}");
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::injection::MockInputInjector;
    use winput_core::{KeyPhase, UsQwertyLayout};

    fn session_with(injector: MockInputInjector) -> InputSession {
        InputSession::new(Arc::new(UsQwertyLayout), Arc::new(injector))
    }

    fn accept_all() -> MockInputInjector {
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .returning(|events| Ok(events.len() as u32));
        injector
    }

    #[test]
    fn test_type_empty_string_returns_false() {
        // Arrange – the injector must never be reached
        let session = session_with(MockInputInjector::new());

        // Act / Assert
        assert!(!session.type_text(""));
        assert_eq!(session.try_type_text(""), Err(InjectionError::EmptyBatch));
    }

    #[test]
    fn test_type_text_submits_one_batch_for_whole_string() {
        // Arrange
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .withf(|events| events.len() == 6)
            .times(1)
            .returning(|events| Ok(events.len() as u32));
        let session = session_with(injector);

        // Act / Assert
        assert!(session.type_text("Ab"));
    }

    #[test]
    fn test_type_text_fails_on_partial_acceptance() {
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .times(1)
            .returning(|events| Ok(events.len() as u32 - 1));
        let session = session_with(injector);

        assert!(!session.type_text("hello"));
    }

    #[test]
    fn test_hot_key_copy_sends_four_events() {
        let session = session_with(accept_all());

        let report = session.try_hot_key(HotKey::Copy).unwrap();

        assert_eq!(report.submitted, 4);
        assert!(session.hot_key(HotKey::Copy));
    }

    #[test]
    fn test_hot_key_reports_platform_failure_as_false() {
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .returning(|_| Err(InjectionError::Platform("blocked".into())));
        let session = session_with(injector);

        assert!(!session.hot_key(HotKey::Undo));
    }

    #[test]
    fn test_text_batch_honours_unicode_release_option() {
        let session = InputSession::with_options(
            Arc::new(UsQwertyLayout),
            Arc::new(MockInputInjector::new()),
            SessionOptions {
                unicode_release: UnicodeRelease::Emit,
            },
        );

        let events = session.text_batch("é");

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].phase(), KeyPhase::Up);
    }

    #[test]
    fn test_tap_sends_modifier_bracketed_press() {
        let mut injector = MockInputInjector::new();
        injector
            .expect_send()
            .withf(|events| {
                events.len() == 4
                    && events[0].key_code() == 0x11
                    && events[1].key_code() == 0x46
                    && events[3].key_code() == 0x11
            })
            .times(1)
            .returning(|events| Ok(events.len() as u32));
        let session = session_with(injector);

        assert!(session.tap(KeyCode::Virtual(0x46), ModifierKind::Control));
    }
}
