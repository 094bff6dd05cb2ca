//! Stateless rendering for the menu and the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen, result_label, score_label};
use morpion_core::{Cell, GameMode, Mark, Outcome, Position, SessionView};
use strum::IntoEnumIterator;

const WIN_COLOR: Color = Color::Rgb(141, 235, 152);
const DRAW_COLOR: Color = Color::Rgb(163, 163, 163);

/// Renders whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Menu(selected) => draw_menu(frame, selected),
        Screen::Game => draw_game(frame, app),
    }
}

fn draw_menu(frame: &mut Frame, selected: GameMode) {
    let area = center_rect(frame.area(), 40, 10);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Options
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Morpion")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let options: Vec<Line> = GameMode::iter()
        .zip('1'..)
        .map(|(mode, key)| {
            let text = format!("{key}  {}", mode.label());
            if mode == selected {
                Line::from(Span::styled(
                    format!("> {text}"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {text}"))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(options).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Up/Down + Enter or 1/2 to choose, q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let view = app.session().view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Scores
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "Morpion - {} - round {}",
        view.mode.label(),
        view.round
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &view, app.cursor());
    draw_scores(frame, chunks[2], &view);

    let status_style = match result_label(view.mode, &view.outcome) {
        Some(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(app.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("Arrows + Enter or keypad 1-9 to play, r new round, Esc menu, q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, view: &SessionView) {
    let label = |mark: Mark| {
        let style = if view.outcome == Outcome::InProgress && view.to_move == mark {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Span::styled(score_label(view.mode, mark, &view.scores), style)
    };

    let line = Line::from(vec![label(Mark::X), Span::raw("    "), label(Mark::O)]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], view, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, pos: Position) {
    let (symbol, mut style) = match view.board.get(pos) {
        Cell::Empty => (
            pos.keypad_digit().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = view.winning_line.is_some_and(|line| line.contains(pos));
    if on_winning_line {
        style = style.bg(WIN_COLOR).fg(Color::Black);
    } else if view.outcome == Outcome::Draw {
        style = style.bg(DRAW_COLOR).fg(Color::Black);
    } else if pos == cursor && view.outcome == Outcome::InProgress {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![
        Line::from(Span::styled(" ".repeat(12), style)),
        Line::from(Span::styled(format!("{symbol:^12}"), style)),
        Line::from(Span::styled(" ".repeat(12), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
