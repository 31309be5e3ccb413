//! Styled terminal lines.
//!
//! Everything goes through `tracing` under [`PRINT_TARGET`] so printed lines
//! and the build spinner share one writer.

use colored::*;
use invmap_common::inventory::Zone;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, format::{self, Detail}};

pub const WIDTH: usize = 64;

/// Target of already-styled terminal lines. The formatter prints them verbatim.
pub const PRINT_TARGET: &str = "invmap::print";

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("")
    };
    ($($arg:tt)*) => {
        $crate::terminal::print::print(&format!($($arg)*))
    };
}

pub fn print(line: &str) {
    info!(target: PRINT_TARGET, "{line}");
}

pub fn banner(no_banner: bool, quiet: u8) {
    if no_banner || quiet > 0 {
        return;
    }

    let title = format!("[ invmap v{} ]", env!("CARGO_PKG_VERSION"));
    let fill = "=".repeat(WIDTH.saturating_sub(title.width() + 1));
    mprint!("{} {}", title.bright_green().bold(), fill.color(colors::SEPARATOR));
}

/// An INI-style `[title]` line padded with dashes.
pub fn section(title: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let head = format!("[{}]", title.to_lowercase());
    let fill = "-".repeat(WIDTH.saturating_sub(head.width() + 1));
    mprint!("{} {}", head.color(colors::PRIMARY).bold(), fill.color(colors::SEPARATOR));
}

pub fn rule() {
    mprint!("{}", "=".repeat(WIDTH).color(colors::SEPARATOR));
}

pub fn key_width<'a>(keys: impl IntoIterator<Item = &'a str>) -> usize {
    keys.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// `> key...: value`, with `key` padded to `width`.
pub fn field(key: &str, width: usize, value: &ColoredString) {
    mprint!(
        "{} {}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        leader(key, width),
        value
    );
}

/// A [`field`] keyed by zone, aligned across every zone label.
pub fn zone_line(zone: Zone, value: &ColoredString) {
    let width = key_width(Zone::ALL.iter().map(|zone| zone.label()));
    field(&format::zone_key(zone), width, value);
}

/// `[idx] name` followed by one branch per detail.
pub fn host_tree(idx: usize, name: &str, details: &[Detail]) {
    mprint!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );

    let width = key_width(details.iter().map(|(key, _)| key.as_str()));
    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i + 1 == details.len() { "└─" } else { "├─" };
        mprint!(
            " {} {}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            leader(key, width),
            value
        );
    }
}

/// A stanza exactly as it sits in a release file, colored.
pub fn stanza(hostname: &str, address: &str) {
    mprint!(
        "{}{}{}",
        "[".color(colors::SEPARATOR),
        hostname.color(colors::PRIMARY),
        "]".color(colors::SEPARATOR)
    );
    mprint!("{}", address.color(colors::IPV4_ADDR));
}

pub fn centered(msg: &str) {
    let pad = " ".repeat(WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    mprint!("{pad}{msg}");
}

pub fn nothing_found(what: &str) {
    centered(&format!("no {what} found").red().bold().to_string());
}

fn leader(key: &str, width: usize) -> ColoredString {
    let dots = ".".repeat(width.saturating_sub(key.width()) + 1);
    format!("{dots}:").color(colors::SEPARATOR)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
