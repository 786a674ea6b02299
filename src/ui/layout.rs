use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Border plus one column of padding on each side of the button label.
const BUTTON_CHROME: u16 = 4;
const BUTTON_MIN_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub title: Rect,
    pub button: Rect,
    pub hints: Rect,
}

/// Width of the button needed to fit `label` without clipping.
pub fn button_width(label: &str) -> u16 {
    let len = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    len.saturating_add(BUTTON_CHROME).max(BUTTON_MIN_WIDTH)
}

/// Lay out the screen: title and button stacked in the middle of `area`,
/// hint line pinned to the bottom row. `hints` is zero-sized when disabled.
pub fn compute_layout(area: Rect, button_label: &str, show_hints: bool) -> AppLayout {
    let [body, hints] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(if show_hints { 1 } else { 0 }),
    ])
    .areas(area);

    // Centered column: title | gap | button
    let [title, button_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(body);

    let [button] = Layout::horizontal([Constraint::Length(button_width(button_label))])
        .flex(Flex::Center)
        .areas(button_row);

    AppLayout {
        title,
        button,
        hints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = compute_layout(area, "count is 0", true);
        assert_eq!(layout.button.width, BUTTON_MIN_WIDTH);
        assert_eq!(layout.button.height, BUTTON_HEIGHT);
        assert_eq!(layout.button.x, (80 - BUTTON_MIN_WIDTH) / 2);
        assert!(layout.title.y < layout.button.y);
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn test_button_grows_with_label() {
        let label = "count is 123456789012345";
        assert_eq!(button_width(label), label.len() as u16 + BUTTON_CHROME);
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), "count is 0", false);
        assert_eq!(layout.hints.height, 0);
    }
}
