use crate::game::{win, Board, Cell, GameOutcome, GameState, Player, HEIGHT, WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::status::StatusNotifier;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    status: &StatusNotifier,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, status, chunks[0]);
    render_board(frame, game_state, selected_column, status.last_placed(), chunks[1]);
    render_message(frame, status.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, status: &StatusNotifier, area: Rect) {
    let current_player = game_state.current_player();
    let names = status.ui();

    let text = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => format!("Game Over  |  {} wins", names.player_name(player)),
        Some(GameOutcome::Tie) => "Game Over  |  Tie".to_string(),
        None => format!("Current Player: {}", names.player_name(current_player)),
    };

    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// Cells to emphasise: the winning line once the game is won
fn highlighted_cells(game_state: &GameState) -> Vec<(usize, usize)> {
    match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => win::winning_line(game_state.board(), player)
            .map(|line| line.to_vec())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn cell_span(board: &Board, row: usize, col: usize, emphasised: bool, last: bool) -> Span<'static> {
    let (symbol, color) = match board.get(row, col) {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Player1 => (" ● ", player_color(Player::One)),
        Cell::Player2 => (" ● ", player_color(Player::Two)),
    };
    let symbol = if last && !emphasised { "(●)" } else { symbol };

    let mut style = Style::default().fg(color);
    if emphasised {
        style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol, style)
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    last_placed: Option<(usize, usize)>,
    area: Rect,
) {
    let board = game_state.board();
    let highlighted = highlighted_cells(game_state);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..WIDTH {
        let label = format!(" {} ", col + 1);
        if col == selected_column && !game_state.is_terminal() {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..HEIGHT {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..WIDTH {
            row_spans.push(cell_span(
                board,
                row,
                col,
                highlighted.contains(&(row, col)),
                last_placed == Some((row, col)),
            ));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter/1-7: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
