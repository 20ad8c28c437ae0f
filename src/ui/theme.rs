use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Style,
    pub hint: Style,
    pub label: Style,
    pub label_focused: Style,
    pub value: Style,
    pub error: Style,
    pub button: Style,
    pub button_focused: Style,
    pub summary: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            heading: Style::new().color(Color::Cyan).bold(),
            hint: Style::new().color(Color::DarkGrey),
            label: Style::new(),
            label_focused: Style::new().bold(),
            value: Style::new().underline(),
            error: Style::new().color(Color::Red).bold(),
            button: Style::new().color(Color::DarkGrey),
            button_focused: Style::new().color(Color::White).background(Color::Blue).bold(),
            summary: Style::new().color(Color::Green),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
