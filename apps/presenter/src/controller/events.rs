//! Navigation commands raised by buttons and keyboard shortcuts.

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    Close,
}

impl NavCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::First => "first",
            Self::Last => "last",
            Self::Close => "close",
        }
    }
}

pub fn command_for_key(key: egui::Key) -> Option<NavCommand> {
    match key {
        egui::Key::ArrowRight | egui::Key::Space | egui::Key::PageDown => Some(NavCommand::Next),
        egui::Key::ArrowLeft | egui::Key::PageUp => Some(NavCommand::Previous),
        egui::Key::Home => Some(NavCommand::First),
        egui::Key::End => Some(NavCommand::Last),
        egui::Key::Escape => Some(NavCommand::Close),
        _ => None,
    }
}

pub fn commands_from_input(input: &egui::InputState) -> Vec<NavCommand> {
    commands_from_events(&input.events)
}

/// Commands for every unmodified shortcut press, in event order.
pub fn commands_from_events(events: &[egui::Event]) -> Vec<NavCommand> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if modifiers.is_none() => command_for_key(*key),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_next_and_previous() {
        assert_eq!(command_for_key(egui::Key::ArrowRight), Some(NavCommand::Next));
        assert_eq!(command_for_key(egui::Key::ArrowLeft), Some(NavCommand::Previous));
        assert_eq!(command_for_key(egui::Key::Space), Some(NavCommand::Next));
    }

    #[test]
    fn home_end_and_escape_are_bound() {
        assert_eq!(command_for_key(egui::Key::Home), Some(NavCommand::First));
        assert_eq!(command_for_key(egui::Key::End), Some(NavCommand::Last));
        assert_eq!(command_for_key(egui::Key::Escape), Some(NavCommand::Close));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for_key(egui::Key::A), None);
        assert_eq!(command_for_key(egui::Key::Enter), None);
    }

    #[test]
    fn collects_pressed_keys_without_modifiers() {
        let key = |key, pressed, modifiers| egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers,
        };
        let events = [
            key(egui::Key::ArrowRight, true, egui::Modifiers::NONE),
            key(egui::Key::ArrowRight, false, egui::Modifiers::NONE),
            key(egui::Key::ArrowLeft, true, egui::Modifiers::CTRL),
            key(egui::Key::End, true, egui::Modifiers::NONE),
            egui::Event::Text("x".to_string()),
        ];

        assert_eq!(
            commands_from_events(&events),
            vec![NavCommand::Next, NavCommand::Last]
        );
    }
}
