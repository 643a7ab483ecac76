//! Formatting utilities for terminal output

use crate::core::Symbol;
use colored::{ColoredString, Colorize};

/// A symbol letter painted in its own colour
#[must_use]
pub fn paint_symbol(symbol: Symbol) -> ColoredString {
    let letter = symbol.as_char().to_string();
    match symbol {
        Symbol::RED => letter.red(),
        Symbol::GREEN => letter.green(),
        Symbol::BLUE => letter.blue(),
        Symbol::YELLOW => letter.yellow(),
        Symbol::ORANGE => letter.truecolor(255, 165, 0),
        Symbol::PURPLE => letter.magenta(),
        Symbol::CYAN => letter.cyan(),
        _ => letter.white(),
    }
    .bold()
}

/// Space separated, coloured letters, e.g. `R G B Y`
#[must_use]
pub fn paint_code(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|&symbol| paint_symbol(symbol).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_code_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(
            paint_code(&[Symbol::RED, Symbol::GREEN, Symbol::WHITE]),
            "R G W"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
