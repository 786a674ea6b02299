use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const TITLE: &str = "GLab Counter";

pub fn render_title(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(TITLE)
        .style(Theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

pub fn render_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.is_pressed() {
        Theme::button_pressed()
    } else {
        Theme::button()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::button_border())
        .style(style);

    let paragraph = Paragraph::new(state.button_label())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_hints(frame: &mut Frame, area: Rect, mouse: bool) {
    let text = if mouse {
        "click or Enter/Space to count · q to quit"
    } else {
        "Enter/Space to count · q to quit"
    };
    let paragraph = Paragraph::new(text)
        .style(Theme::hint())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
