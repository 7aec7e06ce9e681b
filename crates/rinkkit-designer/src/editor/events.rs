//! Host input events delivered to [`super::RinkEditor`].

/// Pointer event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the surface.
    Leave,
}

/// Pointer event in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
        }
    }

    pub fn down(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Down, client_x, client_y)
    }

    pub fn moved(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Move, client_x, client_y)
    }

    pub fn up(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Up, client_x, client_y)
    }

    pub fn leave(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Leave, client_x, client_y)
    }
}

/// Key press with the modifier state the editor cares about.
///
/// `key` follows DOM `KeyboardEvent.key` naming: `"Delete"`, `"Escape"`,
/// `"z"` and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus is inside a text field (e.g. a marker label editor).
    pub in_text_input: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
            in_text_input: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn in_text_input(mut self) -> Self {
        self.in_text_input = true;
        self
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }

    /// The key as a single character, if it is one.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}
