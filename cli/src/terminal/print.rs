use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use idiom_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "idiom::print";

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

/// Colors a value for display, falling back to `default_color` for plain text.
///
/// Numbers and booleans carry their own palette entry so callers can pass
/// them straight to [`aligned_line`].
pub trait Painted {
    fn painted(self, default_color: Color) -> ColoredString;
}

impl Painted for &str {
    fn painted(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl Painted for String {
    fn painted(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl Painted for ColoredString {
    fn painted(self, _default_color: Color) -> ColoredString {
        self
    }
}

impl Painted for bool {
    fn painted(self, _default_color: Color) -> ColoredString {
        let color = if self { colors::TRUE } else { colors::FALSE };
        self.to_string().color(color)
    }
}

macro_rules! painted_number {
    ($($ty:ty),*) => {
        $(impl Painted for $ty {
            fn painted(self, _default_color: Color) -> ColoredString {
                self.to_string().color(colors::NUMBER)
            }
        })*
    };
}

painted_number!(i32, i64, usize, f64);

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ IDIOM v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let pad: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;
    let sep: ColoredString = "═".repeat(pad).bright_black();

    print(&format!("{sep}{}{sep}", title.bright_green().bold()));
}

/// Section rule, e.g. `──────⟦ STREAM API ⟧──────`. Hidden when quiet.
pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()));
    let left: String = "─".repeat(dash_count / 2);
    let right: String = "─".repeat(dash_count - dash_count / 2);

    print(&format!(
        "{}{}{}",
        left.bright_black(),
        title.bright_green(),
        right.bright_black()
    ));
}

/// Sets the column keys are padded to by [`aligned_line`].
pub fn set_key_width<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let width = keys.into_iter().map(str::len).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
}

/// `> key.....: value`. Keys longer than the current width widen the column.
pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + Painted,
{
    let width: usize = GLOBAL_KEY_WIDTH.get().max(key.len());
    GLOBAL_KEY_WIDTH.set(width);

    let dots: String = ".".repeat(width + 1 - key.len());
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.painted(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status<T: Display>(msg: T) {
    let line: String = msg.to_string();
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        line.color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] name`, with an optional dimmed note after the name.
pub fn tree_head(idx: usize, name: &str, note: Option<&str>) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let mut output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    if let Some(note) = note {
        output.push_str(&format!(" {}", note.color(colors::ACCENT).dimmed()));
    }
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(key_width + 1 - key.len());
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn end_of_program(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
