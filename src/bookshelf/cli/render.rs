//! # Rendering Module
//!
//! Terminal output for the shelf. A [`ShelfView`] from the library is turned
//! into template data here (widths, truncation, "added ... ago") and rendered
//! through minijinja with the `style` filter backed by [`SHELF_THEME`].
//!
//! Every `render_*` function has an `_internal` twin taking an explicit color
//! override so tests can check plain output regardless of the terminal.

use super::styles::{names, Theme, SHELF_THEME};
use super::templates::{CONFIG_TEMPLATE, MESSAGES_TEMPLATE, SHELF_TEMPLATE};
use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::config::ShelfConfig;
use bookshelf::id::created_at;
use bookshelf::model::BookId;
use bookshelf::render::{BookAction, BookCard, ShelfView};
use chrono::Utc;
use colored::Colorize;
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 16;

#[derive(Serialize)]
struct BookLineData {
    id: String,
    indent: String,
    title: String,
    padding: String,
    added: String,
    byline: String,
}

#[derive(Serialize)]
struct SectionData {
    heading: &'static str,
    count: String,
    title_style: &'static str,
    books: Vec<BookLineData>,
    empty: &'static str,
    hint: Option<String>,
}

#[derive(Serialize)]
struct ShelfData {
    sections: Vec<SectionData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Renders `template` with `data`, styling through `theme`.
fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let theme = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });

    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

fn resolve_color(color: Option<bool>) -> bool {
    color.unwrap_or_else(|| Term::stdout().features().colors_supported())
}

/// Renders both shelves.
pub fn render_shelf(view: &ShelfView, color: Option<bool>) -> String {
    render_shelf_internal(view, resolve_color(color))
}

fn render_shelf_internal(view: &ShelfView, use_color: bool) -> String {
    let data = ShelfData {
        sections: vec![
            section(
                "To read",
                names::TITLE,
                &view.incomplete,
                "Nothing on this shelf.",
            ),
            section("Read", names::TITLE_READ, &view.complete, "No finished books yet."),
        ],
    };

    render_template(SHELF_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn section(
    heading: &'static str,
    title_style: &'static str,
    cards: &[BookCard],
    empty: &'static str,
) -> SectionData {
    let hint = cards.first().map(|card| {
        format!(
            "{}: {}   {}: {}",
            card.toggle.label().to_lowercase(),
            action_command(&card.toggle),
            card.remove.label().to_lowercase(),
            action_command(&card.remove)
        )
    });

    SectionData {
        heading,
        count: format!("({})", cards.len()),
        title_style,
        books: cards.iter().map(book_line).collect(),
        empty,
        hint,
    }
}

fn book_line(card: &BookCard) -> BookLineData {
    let id = card.id.to_string();
    let id_width = id.width();
    let fixed_width = 2 + id_width + 2 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let title = truncate_to_width(&card.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()));

    // Byline sits under the title: two-space margin, id-wide indent, two spaces
    let byline_width = LINE_WIDTH.saturating_sub(4 + id_width);
    let byline = truncate_to_width(&format!("{}, {}", card.author, card.year), byline_width);

    BookLineData {
        indent: " ".repeat(id_width),
        id,
        title,
        padding,
        added: format_added(card.id),
        byline,
    }
}

/// The CLI invocation that performs `action`, with a placeholder id.
fn action_command(action: &BookAction) -> String {
    let verb = match action {
        BookAction::MarkComplete(_) => "complete",
        BookAction::MarkIncomplete(_) => "undo",
        BookAction::Remove(_) => "remove",
    };
    format!("shelf {} <id>", verb)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_added(id: BookId) -> String {
    let Some(created) = created_at(id) else {
        return " ".repeat(TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(created);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

/// Renders configuration as `key = value` lines.
pub fn render_config(config: &ShelfConfig, color: Option<bool>) -> String {
    render_config_internal(config, resolve_color(color))
}

fn render_config_internal(config: &ShelfConfig, use_color: bool) -> String {
    let entries = ShelfConfig::KEYS
        .iter()
        .map(|key| ConfigEntry {
            key,
            value: config.get(key).unwrap_or_default(),
        })
        .collect();

    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], color: Option<bool>) -> String {
    render_messages_internal(messages, resolve_color(color))
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|_| plain_messages(messages, use_color))
}

/// Template-free rendering of messages, used if the messages template fails.
fn plain_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|m| {
            if !use_color {
                return format!("{}\n", m.content);
            }
            let styled = match m.level {
                MessageLevel::Info => m.content.dimmed(),
                MessageLevel::Success => m.content.green(),
                MessageLevel::Warning => m.content.yellow(),
                MessageLevel::Error => m.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage], color: Option<bool>) {
    let output = render_messages(messages, color);
    if !output.is_empty() {
        print!("{}", output);
    }
}
