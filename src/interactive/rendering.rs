//! TUI rendering with ratatui
//!
//! Everything is drawn from the app's [`GameSnapshot`](crate::game::GameSnapshot).

use super::app::{App, MessageStyle};
use crate::core::{Feedback, Symbol};
use crate::game::{GameSnapshot, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &app.snapshot, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_history(f, &app.snapshot, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Terminal colour for a peg
const fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::RED => Color::Red,
        Symbol::GREEN => Color::Green,
        Symbol::BLUE => Color::Blue,
        Symbol::YELLOW => Color::Yellow,
        Symbol::ORANGE => Color::Rgb(255, 165, 0),
        Symbol::PURPLE => Color::Magenta,
        Symbol::CYAN => Color::Cyan,
        _ => Color::White,
    }
}

fn symbol_span(symbol: Symbol) -> Span<'static> {
    Span::styled(
        format!("{symbol} "),
        Style::default()
            .fg(symbol_color(symbol))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_header(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let header = Paragraph::new(format!("🎯 MASTERMIND - {}", snapshot.mode_label))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let items: Vec<ListItem> = snapshot
        .history
        .iter()
        .map(|row| {
            let mut spans = vec![Span::raw(format!("{:>2}. {:<10} ", row.index, row.player))];
            spans.extend(row.guess.iter().map(|color| symbol_span(color.code)));
            spans.push(Span::styled(
                format!(
                    " {}",
                    Feedback::new(row.exact, row.color_only).pegs(snapshot.length)
                ),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                format!("  {} exact, {} colour", row.exact, row.color_only),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block(" Guesses "));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Palette
            Constraint::Min(4),    // Players
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_palette(f, &app.snapshot, chunks[0]);
    render_players(f, &app.snapshot, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_palette(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let mut spans = Vec::new();
    for color in &snapshot.palette {
        spans.push(symbol_span(color.code));
        spans.push(Span::styled(
            format!("{}  ", color.name),
            Style::default().fg(Color::Gray),
        ));
    }
    let rule = if snapshot.allow_repeats {
        "Colours may repeat"
    } else {
        "Each colour at most once"
    };
    let paragraph = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(rule, Style::default().fg(Color::DarkGray))),
    ])
    .block(block(" Colours "))
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_players(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let mut lines: Vec<Line> = snapshot
        .players
        .iter()
        .map(|player| {
            let style = if player.is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if player.is_active { "▶ " } else { "  " };
            Line::from(Span::styled(
                format!(
                    "{marker}{}: {}/{} attempts left",
                    player.name, player.remaining, player.total
                ),
                style,
            ))
        })
        .collect();

    if let Some(candidates) = snapshot.ai_candidates {
        lines.push(Line::from(Span::styled(
            format!("  AI candidates: {candidates}"),
            Style::default().fg(Color::Cyan),
        )));
    }
    for secret in &snapshot.secrets {
        let mut spans = vec![Span::raw(format!("  {}'s code: ", secret.owner))];
        spans.extend(secret.code.iter().map(|&symbol| symbol_span(symbol)));
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).block(block(" Players ")), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(Span::styled(
                message.text.clone(),
                Style::default().fg(color),
            ))
        })
        .collect();
    f.render_widget(List::new(items).block(block(" Messages ")), area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.snapshot;
    let (title, content) = match (&snapshot.active_player, snapshot.status) {
        (Some(player), GameStatus::Ongoing) => (
            format!(" {player}'s guess "),
            format!("{}▏", app.input_buffer),
        ),
        _ => (
            " Game over ".to_string(),
            "n: new game   q: quit".to_string(),
        ),
    };
    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow))
        .block(block(&title));
    f.render_widget(paragraph, area);
}

#[allow(clippy::cast_precision_loss)]
fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.snapshot;
    let used = snapshot
        .players
        .iter()
        .map(|player| player.total - player.remaining)
        .sum::<usize>();
    let budget = snapshot.players.iter().map(|player| player.total).sum::<usize>();
    let ratio = if budget == 0 {
        0.0
    } else {
        (used as f64 / budget as f64).clamp(0.0, 1.0)
    };

    let gauge = Gauge::default()
        .block(block(" Attempts used "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{used}/{budget}   games {} won {}   n: new  q: quit",
            app.stats.total_games, app.stats.games_won
        ));
    f.render_widget(gauge, area);
}
