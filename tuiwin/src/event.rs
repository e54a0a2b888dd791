use crossterm::event::{
    Event as CrosstermEvent, KeyEventKind, MouseButton as CtButton, MouseEvent, MouseEventKind,
};

/// Input events as delivered to widgets.
///
/// Mouse positions are `(line, col)`; they are screen-relative as produced by
/// [`EventTranslator`] and can be made window-relative with
/// [`Event::relative_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    /// A mouse button went down.
    Press {
        button: MouseButton,
        line: i32,
        col: i32,
    },
    /// The first motion after a press; reported at the press position.
    DragStart {
        button: MouseButton,
        line: i32,
        col: i32,
    },
    /// Motion with a button held.
    Drag {
        button: MouseButton,
        line: i32,
        col: i32,
    },
    /// The button of an ongoing drag was released.
    DragStop { line: i32, col: i32 },
    Release {
        button: MouseButton,
        line: i32,
        col: i32,
    },
    Wheel {
        direction: WheelDirection,
        line: i32,
        col: i32,
        modifiers: Modifiers,
    },
    Move { line: i32, col: i32 },
    Resize { lines: i32, cols: i32 },
}

impl Event {
    /// Pointer position, for mouse events.
    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            Self::Press { line, col, .. }
            | Self::DragStart { line, col, .. }
            | Self::Drag { line, col, .. }
            | Self::DragStop { line, col }
            | Self::Release { line, col, .. }
            | Self::Wheel { line, col, .. }
            | Self::Move { line, col } => Some((line, col)),
            Self::Key { .. } | Self::Resize { .. } => None,
        }
    }

    /// Shift mouse positions so `(top, left)` becomes the origin.
    pub fn relative_to(self, top: i32, left: i32) -> Self {
        match self {
            Self::Press { button, line, col } => Self::Press {
                button,
                line: line - top,
                col: col - left,
            },
            Self::DragStart { button, line, col } => Self::DragStart {
                button,
                line: line - top,
                col: col - left,
            },
            Self::Drag { button, line, col } => Self::Drag {
                button,
                line: line - top,
                col: col - left,
            },
            Self::DragStop { line, col } => Self::DragStop {
                line: line - top,
                col: col - left,
            },
            Self::Release { button, line, col } => Self::Release {
                button,
                line: line - top,
                col: col - left,
            },
            Self::Wheel {
                direction,
                line,
                col,
                modifiers,
            } => Self::Wheel {
                direction,
                line: line - top,
                col: col - left,
                modifiers,
            },
            Self::Move { line, col } => Self::Move {
                line: line - top,
                col: col - left,
            },
            other @ (Self::Key { .. } | Self::Resize { .. }) => other,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const fn new() -> Self {
        Self::NONE
    }

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub const fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Turns raw crossterm events into [`Event`]s.
///
/// Crossterm reports plain down/drag/up; this adds the drag-start and
/// drag-stop transitions, which needs a little state.
#[derive(Debug, Default)]
pub struct EventTranslator {
    pressed: Option<(MouseButton, i32, i32)>,
    dragging: bool,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &CrosstermEvent) -> Vec<Event> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                match Key::try_from(key.code) {
                    Ok(code) => vec![Event::Key {
                        key: code,
                        modifiers: key.modifiers.into(),
                    }],
                    Err(()) => Vec::new(),
                }
            }
            CrosstermEvent::Mouse(mouse) => self.translate_mouse(mouse),
            CrosstermEvent::Resize(cols, lines) => vec![Event::Resize {
                lines: i32::from(*lines),
                cols: i32::from(*cols),
            }],
            _ => Vec::new(),
        }
    }

    fn translate_mouse(&mut self, mouse: &MouseEvent) -> Vec<Event> {
        let line = i32::from(mouse.row);
        let col = i32::from(mouse.column);

        match mouse.kind {
            MouseEventKind::Down(button) => {
                let button = MouseButton::from(button);
                self.pressed = Some((button, line, col));
                self.dragging = false;
                vec![Event::Press { button, line, col }]
            }
            MouseEventKind::Drag(button) => {
                let button = MouseButton::from(button);
                let mut events = Vec::with_capacity(2);
                if !self.dragging {
                    let (start_line, start_col) = match self.pressed {
                        Some((_, l, c)) => (l, c),
                        None => (line, col),
                    };
                    events.push(Event::DragStart {
                        button,
                        line: start_line,
                        col: start_col,
                    });
                    self.dragging = true;
                }
                events.push(Event::Drag { button, line, col });
                events
            }
            MouseEventKind::Up(button) => {
                let button = MouseButton::from(button);
                let mut events = Vec::with_capacity(2);
                if self.dragging {
                    events.push(Event::DragStop { line, col });
                }
                self.dragging = false;
                self.pressed = None;
                events.push(Event::Release { button, line, col });
                events
            }
            MouseEventKind::ScrollUp => vec![Event::Wheel {
                direction: WheelDirection::Up,
                line,
                col,
                modifiers: mouse.modifiers.into(),
            }],
            MouseEventKind::ScrollDown => vec![Event::Wheel {
                direction: WheelDirection::Down,
                line,
                col,
                modifiers: mouse.modifiers.into(),
            }],
            MouseEventKind::Moved => vec![Event::Move { line, col }],
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => Vec::new(),
        }
    }
}

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => return Err(()),
        };
        Ok(key)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtButton> for MouseButton {
    fn from(btn: CtButton) -> Self {
        match btn {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}
