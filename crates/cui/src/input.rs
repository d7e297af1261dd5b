use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveUp,
    MoveDown,
    Die(usize),
    Activate,
    Confirm,
    EndTurn,
    NewBattle,
    Continue,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Enter | KeyCode::Char('p') => InputAction::Activate,
        KeyCode::Char('c') => InputAction::Confirm,
        KeyCode::Char('e') => InputAction::EndTurn,
        KeyCode::Char('n') => InputAction::NewBattle,
        KeyCode::Char('g') => InputAction::Continue,
        KeyCode::Char(ch @ '1'..='5') => {
            InputAction::Die(ch as usize - '1' as usize)
        }
        _ => InputAction::None,
    }
}
