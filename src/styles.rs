//! Output themes. Dark mode is purely cosmetic: it swaps which of these two
//! themes the printers use and touches nothing else.

use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub banner: Style,
    pub index: Style,
    pub title: Style,
    pub body: Style,
    pub time: Style,
}

pub static LIGHT_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    banner: Style::new().bold(),
    index: Style::new().yellow(),
    title: Style::new().bold(),
    body: Style::new(),
    time: Style::new().dim().italic(),
});

pub static DARK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    banner: Style::new().bold().cyan(),
    index: Style::new().cyan(),
    title: Style::new().bold().white(),
    body: Style::new().dim(),
    time: Style::new().color256(102).italic(),
});

pub fn theme(dark: bool) -> &'static Theme {
    if dark {
        &DARK_THEME
    } else {
        &LIGHT_THEME
    }
}
