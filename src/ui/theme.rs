use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const SKY: Color = Color::Rgb(2, 132, 199);
    pub const SKY_LIGHT: Color = Color::Rgb(56, 189, 248);

    pub fn title() -> Style {
        Style::default().fg(Self::SKY).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).bg(Self::SKY)
    }

    pub fn button_pressed() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::SKY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_border() -> Style {
        Style::default().fg(Self::SKY_LIGHT).bg(Self::SKY)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
