use console::{Color, Style};
use once_cell::sync::Lazy;

/// Named styles for terminal output.
pub struct Theme {
    pub category: Style,
    pub index: Style,
    pub filename: Style,
    pub detail: Style,
    pub tag: Style,
    pub title: Style,
    pub field: Style,
    pub footer: Style,
    pub prompt: Style,
}

pub static QUIRE_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    category: Style::new().bold().cyan(),
    index: Style::new().yellow(),
    filename: Style::new(),
    detail: Style::new().color256(246),
    tag: Style::new().fg(Color::Magenta),
    title: Style::new().bold(),
    field: Style::new().green(),
    footer: Style::new().dim().italic(),
    prompt: Style::new().bold().blue(),
});
