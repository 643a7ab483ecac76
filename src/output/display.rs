//! Display functions for games and command results

use super::formatters::{create_progress_bar, paint_code, paint_symbol};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Feedback;
use crate::game::{ColorView, GameSnapshot, GameStatus};
use colored::Colorize;
use std::fmt::Write;

/// Palette legend such as `R = Red, G = Green, ...` with coloured letters
#[must_use]
pub fn format_palette(palette: &[ColorView]) -> String {
    palette
        .iter()
        .map(|color| format!("{} = {}", paint_symbol(color.code), color.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Guess history as a table, one row per guess
#[must_use]
pub fn format_history(snapshot: &GameSnapshot) -> String {
    let width = snapshot.length * 2 + 2;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3} | {:<14} | {:<width$} | {:>5} | {:>6}",
        "No", "Player", "Guess", "Exact", "Colour"
    );
    let _ = writeln!(
        out,
        "{}-+-{}-+-{}-+-{}-+-{}",
        "-".repeat(3),
        "-".repeat(14),
        "-".repeat(width),
        "-".repeat(5),
        "-".repeat(6)
    );
    for row in &snapshot.history {
        let symbols: Vec<_> = row.guess.iter().map(|color| color.code).collect();
        let pegs = Feedback::new(row.exact, row.color_only).pegs(snapshot.length);
        // Pad by hand: colour escapes would throw off the format width
        let padding = width.saturating_sub(symbols.len() * 2 - 1);
        let _ = writeln!(
            out,
            "{:>3} | {:<14} | {}{} | {:>5} | {:>6}  {}",
            row.index,
            row.player,
            paint_code(&symbols),
            " ".repeat(padding),
            row.exact,
            row.color_only,
            pegs.bright_black()
        );
    }
    out
}

/// One line per player with their remaining attempts
#[must_use]
pub fn format_players(snapshot: &GameSnapshot) -> String {
    snapshot
        .players
        .iter()
        .map(|player| {
            let marker = if player.is_active { "▶" } else { " " };
            format!(
                "{marker} {}: {}/{} attempts left",
                player.name, player.remaining, player.total
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final status line plus every revealed secret
#[must_use]
pub fn format_outcome(snapshot: &GameSnapshot) -> String {
    let mut out = match snapshot.status {
        GameStatus::Won => format!("🎉 {}", snapshot.message).green().bold().to_string(),
        GameStatus::Lost => format!("❌ {}", snapshot.message).red().bold().to_string(),
        GameStatus::Ongoing => snapshot.message.clone(),
    };
    for secret in &snapshot.secrets {
        let _ = write!(
            out,
            "\n   {}'s code: {} ({})",
            secret.owner,
            paint_code(&secret.code),
            secret.text
        );
    }
    out
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", paint_code(result.secret.symbols()));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            paint_code(step.guess.symbols()),
            step.feedback.pegs(result.secret.len())
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Feedback:   {}", step.feedback);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
#[allow(clippy::cast_precision_loss)]
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (guess_count, &count) in counts {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let failed = result.total_games - result.solved;
    if failed > 0 {
        println!("   {}", format!("unsolved: {failed}").red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameMode, create_game};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn palette_legend_lists_every_colour() {
        plain();
        let game = create_game(&GameConfig::default()).unwrap();
        let legend = format_palette(&game.snapshot().palette);
        assert!(legend.starts_with("R = Red, G = Green"));
        assert!(legend.ends_with("P = Purple"));
    }

    #[test]
    fn history_table_has_one_row_per_guess() {
        plain();
        let mut config = GameConfig::new(GameMode::PvpOneByOne);
        config.players = vec!["Ada".into(), "Bob".into()];
        config.max_attempts = 5;
        let mut game = create_game(&config).unwrap();
        game.make_guess("RGBY", None).unwrap();
        if !game.is_over() {
            game.make_guess("OPRG", None).unwrap();
        }

        let table = format_history(&game.snapshot());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2 + game.history().len());
        assert!(lines[0].contains("Colour"));
        assert!(lines[2].contains("Ada"));
        assert!(lines[2].contains("R G B Y"));
    }

    #[test]
    fn players_mark_the_active_seat() {
        plain();
        let mut config = GameConfig::new(GameMode::PvpOneByOne);
        config.players = vec!["Ada".into(), "Bob".into()];
        let game = create_game(&config).unwrap();
        let players = format_players(&game.snapshot());
        assert_eq!(
            players,
            "▶ Ada: 10/10 attempts left\n  Bob: 10/10 attempts left"
        );
    }

    #[test]
    fn outcome_reveals_secrets() {
        plain();
        let config = GameConfig {
            max_attempts: 1,
            ..GameConfig::default()
        };
        let mut game = create_game(&config).unwrap();
        game.make_guess("RGBY", None).unwrap();
        let outcome = format_outcome(&game.snapshot());
        assert!(outcome.contains("AI's code"));
    }
}
