//! Styles for the shelf CLI.
//!
//! Templates refer to styles by semantic name (`title`, `time`, ...) through the
//! `style` filter; the actual colors live only here.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that does not exist.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADING: &str = "heading";
    pub const COUNT: &str = "count";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const TITLE_READ: &str = "title_read";
    pub const BYLINE: &str = "byline";
    pub const TIME: &str = "time";
    pub const HINT: &str = "hint";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Style `text`; with `use_color` off the text is returned unstyled.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::COUNT, Style::new().dim())
        .add(names::ID, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::TITLE_READ, Style::new().green())
        .add(names::BYLINE, Style::new().color256(246))
        .add(names::TIME, Style::new().color256(246).italic())
        .add(names::HINT, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
