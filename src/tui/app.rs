//! Application state and input handling for the terminal UI.

use super::geometry::BoardGeometry;
use super::input::move_cursor;
use crate::config::GameConfig;
use crate::settings::NewGameSettings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use strictly_sos::{Letter, Move, Position, SosGame};
use tracing::{debug, info, instrument, warn};

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Typed characters edit the board size field.
    SizeInput,
}

/// A modal message box; any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Box title.
    pub title: &'static str,
    /// Message body.
    pub message: String,
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds one [`SosGame`] at a time and replaces it whole on New Game.
#[derive(Debug, Getters)]
pub struct App {
    game: SosGame,
    settings: NewGameSettings,
    cursor: Position,
    focus: Focus,
    popup: Option<Popup>,
    last_move: Option<Move>,
    #[getter(skip)]
    geometry: Option<BoardGeometry>,
}

impl App {
    /// Creates the app with a first game built from the configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: SosGame::new(*config.board_size(), *config.mode()),
            settings: NewGameSettings::new(*config.board_size(), *config.mode(), *config.letter()),
            cursor: Position::new(0, 0),
            focus: Focus::Board,
            popup: None,
            last_move: None,
            geometry: None,
        }
    }

    /// The turn banner, e.g. `Current Player: BLUE`.
    pub fn current_player_label(&self) -> String {
        format!(
            "Current Player: {}",
            self.game.current_turn().label().to_uppercase()
        )
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = Some(geometry);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        if self.popup.take().is_some() {
            debug!("Dismissed popup");
            return AppAction::Continue;
        }

        match self.focus {
            Focus::SizeInput => self.handle_size_key(key.code),
            Focus::Board => return self.handle_board_key(key.code),
        }
        AppAction::Continue
    }

    fn handle_size_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.settings.push_size_char(c),
            KeyCode::Backspace => self.settings.pop_size_char(),
            KeyCode::Enter => self.new_game(),
            KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Board,
            _ => {}
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Quit requested");
                return AppAction::Quit;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char('s') | KeyCode::Char('S') => self.settings.set_letter(Letter::S),
            KeyCode::Char('o') | KeyCode::Char('O') => self.settings.set_letter(Letter::O),
            KeyCode::Char('l') | KeyCode::Char('L') => self.settings.toggle_letter(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.settings.toggle_mode(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.new_game(),
            KeyCode::Tab => self.focus = Focus::SizeInput,
            other => self.cursor = move_cursor(self.cursor, other, self.game.size().get()),
        }
        AppAction::Continue
    }

    /// Handles a mouse event: a left click on a cell writes the selected letter there.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.popup.take().is_some() {
            return;
        }
        let Some(pos) = self
            .geometry
            .and_then(|g| g.cell_at(event.column, event.row))
        else {
            return;
        };
        self.focus = Focus::Board;
        self.cursor = pos;
        self.place(pos);
    }

    /// Writes the selected letter at `pos`; a rejected move opens an error box.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        let letter = *self.settings.letter();
        match self.game.make_move(pos.row, pos.col, letter) {
            Ok(action) => {
                debug!(%action, "Move applied to UI state");
                self.last_move = Some(action);
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.popup = Some(Popup {
                    title: "Error",
                    message: e.to_string(),
                });
            }
        }
    }

    /// Starts a new game from the pending settings.
    ///
    /// An invalid size opens an "Invalid Input" box and keeps the current game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        match self.settings.start_game() {
            Ok(game) => {
                info!(size = %game.size(), mode = %game.mode(), "New game");
                self.game = game;
                self.cursor = Position::new(0, 0);
                self.focus = Focus::Board;
                self.last_move = None;
            }
            Err(e) => {
                self.popup = Some(Popup {
                    title: "Invalid Input",
                    message: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use strictly_sos::{GameMode, Player, Square};

    fn app() -> App {
        App::new(&GameConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn letter_at(app: &App, row: usize, col: usize) -> Option<Letter> {
        app.game()
            .board()
            .get(Position::new(row, col))
            .and_then(Square::letter)
    }

    #[test]
    fn test_initial_label() {
        assert_eq!(app().current_player_label(), "Current Player: BLUE");
    }

    #[test]
    fn test_enter_places_selected_letter() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(letter_at(&app, 0, 0), Some(Letter::S));
        assert_eq!(app.current_player_label(), "Current Player: RED");

        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(letter_at(&app, 1, 1), Some(Letter::O));
        assert_eq!(app.game().current_turn(), Player::Blue);
    }

    #[test]
    fn test_occupied_cell_opens_error_and_keeps_state() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let popup = app.popup().clone().unwrap();
        assert_eq!(popup.title, "Error");
        assert_eq!(popup.message, "Cell is already occupied.");
        assert_eq!(app.game().current_turn(), Player::Red);

        // Any key closes the box without acting on it.
        press(&mut app, KeyCode::Char('q'));
        assert!(app.popup().is_none());
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_size_field_and_new_game() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::SizeInput);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(*app.focus(), Focus::Board);
        assert_eq!(app.game().size().get(), 6);
        assert_eq!(app.game().mode(), GameMode::General);
        assert!(app.game().history().is_empty());
        assert_eq!(app.game().current_turn(), Player::Blue);
    }

    #[test]
    fn test_invalid_size_keeps_current_game() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);

        let popup = app.popup().clone().unwrap();
        assert_eq!(popup.title, "Invalid Input");
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().size().get(), 3);
    }

    #[test]
    fn test_letter_key_toggles_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(*app.settings().letter(), Letter::O);
        press(&mut app, KeyCode::Enter);
        assert_eq!(letter_at(&app, 0, 0), Some(Letter::O));
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(*app.settings().letter(), Letter::S);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
    }

    #[test]
    fn test_mouse_click_places_on_cell() {
        let mut app = app();
        let geometry = BoardGeometry::layout(Rect::new(0, 0, 25, 15), 3);
        app.set_geometry(geometry);
        let rect = geometry.cell_rect(Position::new(2, 1)).unwrap();

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(letter_at(&app, 2, 1), Some(Letter::S));
        assert_eq!(*app.cursor(), Position::new(2, 1));
    }

    #[test]
    fn test_mouse_click_off_board_is_ignored() {
        let mut app = app();
        app.set_geometry(BoardGeometry::layout(Rect::new(0, 0, 25, 15), 3));
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.game().history().is_empty());
    }
}
