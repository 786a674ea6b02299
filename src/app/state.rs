use crate::app::action::Action;
use crate::config::AppConfig;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long the button stays highlighted after an increment.
pub const PRESS_FLASH: Duration = Duration::from_millis(120);

/// Everything the counter screen knows. Lives exactly as long as the app;
/// a fresh launch builds a fresh state, so the count always starts at 0.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    count: u64,
    /// Terminal area the next frame will be laid out in. Mouse clicks are
    /// hit-tested against the button inside this area.
    pub viewport: Rect,
    pub pressed_at: Option<Instant>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            count: 0,
            viewport: Rect::default(),
            pressed_at: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add one to the counter. Saturates at `u64::MAX`.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        self.pressed_at = Some(Instant::now());
        self.dirty = true;
        tracing::debug!(count = self.count, "counter incremented");
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Drop the pressed highlight once it has been visible for
    /// `PRESS_FLASH`. Returns true if the highlight was cleared.
    pub fn expire_press(&mut self, now: Instant) -> bool {
        match self.pressed_at {
            Some(at) if now.duration_since(at) >= PRESS_FLASH => {
                self.pressed_at = None;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }

    pub fn button_label(&self) -> String {
        format!("count is {}", self.count)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Increment => self.increment(),
            Action::Quit => {
                tracing::info!(count = self.count, "quit requested");
                self.should_quit = true;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_count(&mut self, count: u64) {
        self.count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_zero() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.count(), 0);
        assert_eq!(state.button_label(), "count is 0");
        assert!(state.dirty);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_increment_is_strictly_plus_one() {
        let mut state = AppState::new(AppConfig::default());
        for expected in 1..=25 {
            let before = state.count();
            state.increment();
            assert_eq!(state.count(), before + 1);
            assert_eq!(state.count(), expected);
        }
    }

    #[test]
    fn test_fresh_state_resets_count() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..7 {
            state.increment();
        }
        assert_eq!(state.count(), 7);
        let state = AppState::new(state.config.clone());
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_increment_saturates() {
        let mut state = AppState::new(AppConfig::default());
        state.set_count(u64::MAX);
        state.increment();
        assert_eq!(state.count(), u64::MAX);
    }

    #[test]
    fn test_press_highlight_expires() {
        let mut state = AppState::new(AppConfig::default());
        state.increment();
        let pressed_at = state.pressed_at.unwrap();
        assert!(state.is_pressed());

        assert!(!state.expire_press(pressed_at));
        assert!(state.is_pressed());

        assert!(state.expire_press(pressed_at + PRESS_FLASH));
        assert!(!state.is_pressed());
        assert!(!state.expire_press(pressed_at + PRESS_FLASH * 2));
    }

    #[test]
    fn test_apply_quit() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Action::Quit);
        assert!(state.should_quit);
        assert_eq!(state.count(), 0);
    }
}
