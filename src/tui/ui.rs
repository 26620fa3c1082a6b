//! UI rendering using ratatui.

use super::app::{App, Focus, Popup};
use super::geometry::BoardGeometry;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strictly_sos::{Board, GameMode, Letter, Player, Position, Square};
use strum::IntoEnumIterator;

/// Terminal colour for a player.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Blue => Color::Blue,
        Player::Red => Color::Red,
    }
}

/// Draws the whole screen and returns where the board landed.
pub fn draw(frame: &mut Frame, app: &App) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Mode and size
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Letter and turn
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);
    draw_settings(frame, chunks[1], app);
    let geometry = draw_board(frame, chunks[2], app);
    draw_turn(frame, chunks[3], app);
    draw_help(frame, chunks[4], app.focus());

    if let Some(popup) = app.popup() {
        draw_popup(frame, popup);
    }

    geometry
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let n = app.game().size();
    let title = Line::from(vec![
        Span::styled(
            "SOS",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} game, {}x{}", app.game().mode(), n, n),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let paragraph = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn radio<T: PartialEq + std::fmt::Display>(
    options: impl Iterator<Item = T>,
    selected: &T,
) -> Vec<Span<'static>> {
    options
        .flat_map(|option| {
            let marker = if option == *selected { "(•) " } else { "( ) " };
            let style = if option == *selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [
                Span::styled(format!("{}{}", marker, option), style),
                Span::raw("  "),
            ]
        })
        .collect()
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let settings = app.settings();
    let mut spans = vec![Span::raw("Game Mode: ")];
    spans.extend(radio(GameMode::iter(), settings.mode()));

    let size_style = if *app.focus() == Focus::SizeInput {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let cursor = if *app.focus() == Focus::SizeInput { "_" } else { "" };
    spans.push(Span::raw("  Board Size: "));
    spans.push(Span::styled(
        format!("[{:<4}]", format!("{}{}", settings.size_input(), cursor)),
        size_style,
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New Game"));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> BoardGeometry {
    let board = app.game().board();
    let geometry = BoardGeometry::layout(area, board.size().get());

    for row in 0..geometry.size {
        for col in 0..geometry.size {
            let pos = Position::new(row, col);
            if let Some(rect) = geometry.cell_rect(pos) {
                draw_cell(frame, rect, board, pos, &geometry, app);
            }
        }
    }

    geometry
}

fn draw_cell(
    frame: &mut Frame,
    rect: Rect,
    board: &Board,
    pos: Position,
    geometry: &BoardGeometry,
    app: &App,
) {
    let square = board.get(pos).unwrap_or_default();
    let (symbol, mut style) = match square {
        Square::Empty => (" ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(placement) => (
            placement.letter.to_string(),
            Style::default()
                .fg(player_color(placement.player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let selected = pos == *app.cursor() && *app.focus() == Focus::Board;
    if selected {
        style = style.bg(Color::White);
        if square == Square::Empty {
            style = style.fg(Color::Black);
        }
    }

    let mut paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    if geometry.is_framed() {
        let border = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        paragraph = paragraph.block(Block::default().borders(Borders::ALL).border_style(border));
    }
    frame.render_widget(paragraph, rect);
}

fn draw_turn(frame: &mut Frame, area: Rect, app: &App) {
    let turn = app.game().current_turn();
    let mut spans = vec![Span::raw("Current Letter: ")];
    spans.extend(radio(Letter::iter(), app.settings().letter()));
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        app.current_player_label(),
        Style::default()
            .fg(player_color(turn))
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, focus: &Focus) {
    let text = match focus {
        Focus::Board => {
            "Arrows: Move | Enter/Click: Place | S/O/L: Letter | M: Mode | Tab: Size | N: New | Q: Quit"
        }
        Focus::SizeInput => "Type a size | Enter: New Game | Tab/Esc: Back to board",
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn draw_popup(frame: &mut Frame, popup: &Popup) {
    let area = center_rect(frame.area(), 50, 7);
    let body = Paragraph::new(vec![
        Line::from(popup.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(popup.title)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
