mod counter;
pub mod layout;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Layout for the current state and viewport. Shared by rendering and
/// mouse hit-testing so both agree on where the button is.
pub fn layout_for(state: &AppState, area: Rect) -> layout::AppLayout {
    layout::compute_layout(area, &state.button_label(), state.config.ui.show_hints)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout_for(state, frame.area());

    counter::render_title(frame, app_layout.title);
    counter::render_button(frame, app_layout.button, state);
    if state.config.ui.show_hints {
        counter::render_hints(frame, app_layout.hints, state.config.ui.mouse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(state.viewport.width, state.viewport.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn new_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(60, 20);
        state
    }

    #[test]
    fn test_initial_render_shows_title_and_zero() {
        let screen = draw(&new_state());
        assert!(screen.contains(counter::TITLE));
        assert!(screen.contains("count is 0"));
        assert!(screen.contains("q to quit"));
    }

    #[test]
    fn test_render_tracks_count() {
        let mut state = new_state();
        state.increment();
        assert!(draw(&state).contains("count is 1"));
        for _ in 0..9 {
            state.increment();
        }
        assert!(draw(&state).contains("count is 10"));
    }

    #[test]
    fn test_render_is_pure() {
        let state = new_state();
        let first = draw(&state);
        let second = draw(&state);
        assert_eq!(first, second);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_label_sits_inside_button() {
        let state = new_state();
        let screen = draw(&state);
        let button = layout_for(&state, state.viewport).button;
        let row: &str = screen.lines().nth((button.y + 1) as usize).unwrap();
        assert!(row.contains("count is 0"));
    }

    #[test]
    fn test_hints_hidden_when_disabled() {
        let mut state = new_state();
        state.config.ui.show_hints = false;
        let screen = draw(&state);
        assert!(!screen.contains("q to quit"));
        assert!(screen.contains("count is 0"));
    }
}
