//! Applies navigation commands to the deck cursor.

use deck::Navigator;

use crate::controller::events::NavCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved { from: usize, to: usize },
    Unchanged,
    CloseRequested,
}

pub fn apply_command(nav: &mut Navigator, cmd: NavCommand) -> NavOutcome {
    let from = nav.current();
    let to = match cmd {
        NavCommand::Next => nav.advance(),
        NavCommand::Previous => nav.retreat(),
        NavCommand::First => nav.jump_to(0),
        NavCommand::Last => nav.jump_to(nav.last_index()),
        NavCommand::Close => return NavOutcome::CloseRequested,
    };

    tracing::debug!(command = cmd.name(), from, to, "navigated");
    if from == to {
        NavOutcome::Unchanged
    } else {
        NavOutcome::Moved { from, to }
    }
}
