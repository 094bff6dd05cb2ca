//! Key bindings for the game screen.

use crossterm::event::KeyCode;
use morpion_core::Position;

/// What a key press on the game screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Move the cursor (arrow keys).
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell picked on the numeric keypad layout.
    Play(Position),
    /// Clear the board and start the next round.
    NewRound,
    /// Return to the mode menu.
    Menu,
    /// Leave the application.
    Quit,
    /// Unbound key.
    Ignore,
}

/// Maps a key to a game-screen intent.
pub fn game_intent(key: KeyCode) -> GameIntent {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => GameIntent::Cursor(key),
        KeyCode::Enter | KeyCode::Char(' ') => GameIntent::PlayCursor,
        KeyCode::Char(c) => match c.to_digit(10).and_then(Position::from_keypad) {
            Some(pos) => GameIntent::Play(pos),
            None => match c {
                'r' | 'R' => GameIntent::NewRound,
                'b' | 'B' => GameIntent::Menu,
                'q' | 'Q' => GameIntent::Quit,
                _ => GameIntent::Ignore,
            },
        },
        KeyCode::Esc | KeyCode::Backspace => GameIntent::Menu,
        _ => GameIntent::Ignore,
    }
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_keypad_digits_play_cells() {
        assert_eq!(game_intent(KeyCode::Char('7')), GameIntent::Play(Position::TopLeft));
        assert_eq!(game_intent(KeyCode::Char('2')), GameIntent::Play(Position::BottomCenter));
        assert_eq!(game_intent(KeyCode::Char('0')), GameIntent::Ignore);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(game_intent(KeyCode::Char('r')), GameIntent::NewRound);
        assert_eq!(game_intent(KeyCode::Esc), GameIntent::Menu);
        assert_eq!(game_intent(KeyCode::Char('q')), GameIntent::Quit);
        assert_eq!(game_intent(KeyCode::Enter), GameIntent::PlayCursor);
        assert_eq!(game_intent(KeyCode::Left), GameIntent::Cursor(KeyCode::Left));
    }
}
