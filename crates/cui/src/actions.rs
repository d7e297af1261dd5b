use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::MoveUp => app.move_cursor(false),
        InputAction::MoveDown => app.move_cursor(true),
        InputAction::Die(index) => app.click_die(index),
        InputAction::Activate => app.activate_primary(),
        InputAction::Confirm => app.confirm_selection(),
        InputAction::EndTurn => app.end_turn(),
        InputAction::NewBattle => app.new_battle(),
        InputAction::Continue => app.continue_run(),
    }
}
