use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, Debug)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub emoji: bool,
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        // Colors only when stdout is a TTY and --no-color was not given.
        let color = !COLOR_DISABLED.load(Ordering::Relaxed) && atty::is(atty::Stream::Stdout);
        Self { emoji: true, color }
    }
}

/// Turn colored output off for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

pub fn info(msg: impl AsRef<str>) {
    print_line(Level::Info, msg.as_ref(), Style::default());
}

pub fn success(msg: impl AsRef<str>) {
    print_line(Level::Success, msg.as_ref(), Style::default());
}

pub fn warning(msg: impl AsRef<str>) {
    print_line(Level::Warning, msg.as_ref(), Style::default());
}

pub fn error(msg: impl AsRef<str>) {
    print_line(Level::Error, msg.as_ref(), Style::default());
}

pub fn print_line(level: Level, msg: &str, style: Style) {
    println!("{}", render_line(level, msg, style));
}

fn render_line(level: Level, msg: &str, style: Style) -> String {
    let emoji = match level {
        Level::Info => "ℹ️ ",
        Level::Success => "✅ ",
        Level::Warning => "⚠️ ",
        Level::Error => "❌ ",
    };

    let prefix = if style.emoji { emoji } else { "" };
    let line = format!("{}{}", prefix, msg);

    if !style.color {
        return line;
    }
    match level {
        Level::Info => line,
        Level::Success => line.green().to_string(),
        Level::Warning => line.yellow().to_string(),
        Level::Error => line.red().to_string(),
    }
}

/// Print the final learner list, or a notice when there is none.
pub fn print_learners(move_name: &str, learners: &[String]) {
    if learners.is_empty() {
        println!("\nNo Pokémon found that can learn {move_name}");
    } else {
        println!("\nPokémon that can learn {move_name}:");
        println!("{}", learners.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_has_no_escape_codes() {
        let style = Style {
            emoji: false,
            color: false,
        };
        assert_eq!(render_line(Level::Error, "boom", style), "boom");
    }

    #[test]
    fn colored_error_wraps_line() {
        let style = Style {
            emoji: true,
            color: true,
        };
        let out = render_line(Level::Error, "boom", style);
        assert!(out.contains("❌ boom"));
        assert!(out.starts_with('\u{1b}'));
    }
}
