use dial_engine::coords::Vec2;
use dial_engine::time::TimeSource;

/// Keys a dial reacts to. Everything else arrives as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    /// The `r` key, either case.
    R,
    Other,
}

impl Key {
    /// Maps a key name (`" "`, `"Enter"`, `"esc"`, `"r"`, ...) to a [`Key`].
    /// Names are matched case-insensitively.
    pub fn from_name(name: &str) -> Self {
        if name == " " {
            return Key::Space;
        }
        match name.to_ascii_lowercase().as_str() {
            "space" | "spacebar" => Key::Space,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            "r" => Key::R,
            _ => Key::Other,
        }
    }
}

/// Input events routed to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Key pressed while the widget has focus.
    KeyPress { key: Key },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Resources available while routing an event.
pub struct EventCtx<'a> {
    /// The host's time source, read when an event causes a transition.
    pub time: &'a dyn TimeSource,
}

impl<'a> EventCtx<'a> {
    pub fn new(time: &'a dyn TimeSource) -> Self {
        Self { time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("R"), Key::R);
        assert_eq!(Key::from_name("space"), Key::Space);
        assert_eq!(Key::from_name("ESCAPE"), Key::Escape);
        assert_eq!(Key::from_name("Tab"), Key::Other);
    }
}
