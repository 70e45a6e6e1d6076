//! Held-key tracking for terminal environments.
//!
//! Many terminals only report key presses (plus auto-repeat). Horizontal
//! movement is held-key input, so a release is synthesized once the key has
//! been quiet for a while. As soon as the terminal delivers a real release
//! event, the synthetic releases are switched off.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{game_key, handle_key_event, GameKey};
use crate::types::InputEvent;

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    fn press(self) -> InputEvent {
        match self {
            HorizontalDirection::Left => InputEvent::MoveLeftPress,
            HorizontalDirection::Right => InputEvent::MoveRightPress,
        }
    }

    fn release(self) -> InputEvent {
        match self {
            HorizontalDirection::Left => InputEvent::MoveLeftRelease,
            HorizontalDirection::Right => InputEvent::MoveRightRelease,
        }
    }
}

// Must outlast the usual initial auto-repeat delay, otherwise a held key
// stutters between its first press and the first repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 500;

/// Turns raw key events into press/release pairs for the simulation.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: Option<HorizontalDirection>,
    quiet_ms: u32,
    key_release_timeout_ms: u32,
    release_events_seen: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: None,
            quiet_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<HorizontalDirection> {
        self.held
    }

    /// Whether the terminal has been seen to report key releases.
    pub fn reports_releases(&self) -> bool {
        self.release_events_seen
    }

    /// Translate one key event.
    ///
    /// Pressing the opposite direction releases the held one first, so the
    /// player never ends up with both intents set by a terminal that cannot
    /// report releases.
    pub fn handle_key(&mut self, key: KeyEvent) -> ArrayVec<InputEvent, 4> {
        let mut events = ArrayVec::<InputEvent, 4>::new();

        let direction = match game_key(key.code) {
            Some(GameKey::Left) => Some(HorizontalDirection::Left),
            Some(GameKey::Right) => Some(HorizontalDirection::Right),
            _ => None,
        };

        let Some(direction) = direction else {
            // Non-movement keys do not extend the auto-release timeout.
            if let Some(event) = handle_key_event(key) {
                events.push(event);
            }
            return events;
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.quiet_ms = 0;
                if self.held != Some(direction) {
                    if let Some(previous) = self.held {
                        events.push(previous.release());
                    }
                    self.held = Some(direction);
                    events.push(direction.press());
                }
            }
            KeyEventKind::Release => {
                self.release_events_seen = true;
                if self.held == Some(direction) {
                    self.held = None;
                    events.push(direction.release());
                }
            }
        }
        events
    }

    /// Advance the quiet timer and synthesize a release when it expires.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InputEvent, 2> {
        let mut events = ArrayVec::<InputEvent, 2>::new();
        if self.release_events_seen {
            return events;
        }
        let Some(direction) = self.held else {
            return events;
        };

        self.quiet_ms = self.quiet_ms.saturating_add(elapsed_ms);
        if self.quiet_ms > self.key_release_timeout_ms {
            self.held = None;
            self.quiet_ms = 0;
            events.push(direction.release());
        }
        events
    }

    /// Forget any held key without emitting events.
    pub fn reset(&mut self) {
        self.held = None;
        self.quiet_ms = 0;
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_emits_once_while_held() {
        let mut t = KeyTracker::new();
        let first = t.handle_key(KeyEvent::from(KeyCode::Right));
        assert_eq!(first.as_slice(), &[InputEvent::MoveRightPress]);

        let repeat = t.handle_key(KeyEvent::from(KeyCode::Right));
        assert!(repeat.is_empty());
        assert_eq!(t.held(), Some(HorizontalDirection::Right));
    }

    #[test]
    fn test_opposite_press_releases_held_direction() {
        let mut t = KeyTracker::new();
        t.handle_key(KeyEvent::from(KeyCode::Right));
        let events = t.handle_key(KeyEvent::from(KeyCode::Left));
        assert_eq!(
            events.as_slice(),
            &[InputEvent::MoveRightRelease, InputEvent::MoveLeftPress]
        );
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut t = KeyTracker::new().with_key_release_timeout_ms(100);
        t.handle_key(KeyEvent::from(KeyCode::Left));

        assert!(t.update(64).is_empty());
        let events = t.update(64);
        assert_eq!(events.as_slice(), &[InputEvent::MoveLeftRelease]);
        assert_eq!(t.held(), None);
        assert!(t.update(500).is_empty());
    }

    #[test]
    fn test_repeats_keep_key_held() {
        let mut t = KeyTracker::new().with_key_release_timeout_ms(100);
        t.handle_key(KeyEvent::from(KeyCode::Left));
        for _ in 0..10 {
            assert!(t.update(60).is_empty());
            t.handle_key(KeyEvent::from(KeyCode::Left));
        }
        assert_eq!(t.held(), Some(HorizontalDirection::Left));
    }

    #[test]
    fn test_non_movement_key_does_not_extend_auto_release_timeout() {
        let mut t = KeyTracker::new().with_key_release_timeout_ms(100);
        t.handle_key(KeyEvent::from(KeyCode::Right));
        t.update(80);

        let jump = t.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert_eq!(jump.as_slice(), &[InputEvent::Jump]);
        assert_eq!(t.update(40).as_slice(), &[InputEvent::MoveRightRelease]);
    }

    #[test]
    fn test_real_release_events_disable_auto_release() {
        let mut t = KeyTracker::new().with_key_release_timeout_ms(100);
        t.handle_key(KeyEvent::from(KeyCode::Right));
        assert_eq!(
            t.handle_key(release(KeyCode::Right)).as_slice(),
            &[InputEvent::MoveRightRelease]
        );
        assert!(t.reports_releases());

        t.handle_key(KeyEvent::from(KeyCode::Right));
        assert!(t.update(10_000).is_empty());
        assert_eq!(t.held(), Some(HorizontalDirection::Right));
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(KeyTracker::default().key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut t = KeyTracker::new();
        t.handle_key(KeyEvent::from(KeyCode::Left));
        t.reset();
        assert_eq!(t.held(), None);
        assert!(t.update(10_000).is_empty());
    }
}
