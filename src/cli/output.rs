//! Terminal rendering for envseal's actions.
//!
//! Every status line starts with a [`Mark`]. Failures go to stderr, the
//! rest to stdout. Colors are dropped when `NO_COLOR` is set.

use console::Style;
use std::fmt::Display;
use std::io::{self, Write as IoWrite};

use crate::error::Result;

const RULE_WIDTH: usize = 50;

/// Leading glyph of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Ok,
    Fail,
    Warn,
    Hint,
    Note,
}

impl Mark {
    fn glyph(self) -> &'static str {
        match self {
            Mark::Ok => "✓",
            Mark::Fail => "✗",
            Mark::Warn => "⚠",
            Mark::Hint => "→",
            Mark::Note => "·",
        }
    }

    fn style(self) -> Style {
        match self {
            Mark::Ok => Style::new().green(),
            Mark::Fail => Style::new().red(),
            Mark::Warn => Style::new().yellow(),
            Mark::Hint => Style::new().cyan(),
            Mark::Note => Style::new().dim(),
        }
    }
}

fn plain() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn paint(style: &Style, text: impl Display) -> String {
    if plain() {
        text.to_string()
    } else {
        style.apply_to(text).to_string()
    }
}

/// `<glyph> <msg>`; hints and notes are colored whole.
fn marked(mark: Mark, msg: &str) -> String {
    let style = mark.style();
    let body = match mark {
        Mark::Hint | Mark::Note => paint(&style, msg),
        _ => msg.to_string(),
    };
    format!("{} {}", paint(&style, mark.glyph()), body)
}

/// Print one status line.
pub fn say(mark: Mark, msg: &str) {
    let line = marked(mark, msg);
    if mark == Mark::Fail {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn success(msg: &str) {
    say(Mark::Ok, msg);
}

pub fn error(msg: &str) {
    say(Mark::Fail, msg);
}

pub fn warn(msg: &str) {
    say(Mark::Warn, msg);
}

pub fn hint(msg: &str) {
    say(Mark::Hint, msg);
}

pub fn header(title: &str) {
    println!("{}", paint(&Style::new().bold(), title));
}

/// Print an indented `label  value` pair.
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        paint(&Style::new().dim(), label),
        paint(&Style::new().bold(), value)
    );
}

pub fn list_item(item: &str) {
    println!("  • {}", item);
}

pub fn rule() {
    println!("{}", paint(&Style::new().dim(), "─".repeat(RULE_WIDTH)));
}

pub fn blank() {
    println!();
}

pub fn dimmed(msg: &str) {
    println!("{}", paint(&Style::new().dim(), msg));
}

/// Blank line, bold title, rule.
pub fn section(title: &str) {
    blank();
    header(title);
    rule();
}

pub fn path(p: impl Display) -> String {
    paint(&Style::new().cyan(), p)
}

pub fn key(k: &str) -> String {
    paint(&Style::new().cyan(), k)
}

pub fn cmd(c: &str) -> String {
    paint(&Style::new().green(), c)
}

/// Mask a secret for display, keeping only its length.
pub fn masked(len: usize) -> String {
    format!("{} ({} chars)", "*".repeat(20), len)
}

/// One block of a validation report: a marked title and its keys.
///
/// Nothing is printed for an empty block.
pub fn findings<I>(mark: Mark, title: &str, items: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return;
    }
    blank();
    say(mark, title);
    for item in items {
        list_item(&item.to_string());
    }
}

/// Render the outcome of writing one remote secret.
///
/// `done` prefixes the name on success (`set secret: NAME`); `verb` names
/// the failed action (`failed to set NAME: reason`).
pub fn push_outcome(done: &str, verb: &str, name: &str, result: &Result<()>) {
    match result {
        Ok(()) => success(&format!("{} {}", done, key(name))),
        Err(e) => error(&format!("failed to {} {}: {}", verb, key(name), e)),
    }
}

/// Run `f` behind a `label... ok|failed` progress line.
pub fn step<T>(label: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    print!("{}... ", paint(&Style::new().dim(), label));
    let _ = io::stdout().flush();

    let result = f();
    let (text, style) = match &result {
        Ok(_) => ("ok", Style::new().green()),
        Err(_) => ("failed", Style::new().red()),
    };
    println!("{}", paint(&style, text));
    result
}
