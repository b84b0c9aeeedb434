//! Keyboard input handling.
//!
//! Key events are represented as [`KeyMsg`] values whose display form
//! ("up", "ctrl+c", "q") is what key bindings match against.

use std::fmt;

/// Keyboard key event message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Creates a key message from a special key type.
    #[must_use]
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Creates a key message from a plain character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// The keys this widget can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character input.
    Runes,
    /// Enter.
    Enter,
    /// Tab.
    Tab,
    /// Space.
    Space,
    /// Backspace.
    Backspace,
    /// Escape.
    Esc,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Delete.
    Delete,
    /// Ctrl+C.
    CtrlC,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "",
            Self::Enter => "enter",
            Self::Tab => "tab",
            Self::Space => "space",
            Self::Backspace => "backspace",
            Self::Esc => "esc",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::Delete => "delete",
            Self::CtrlC => "ctrl+c",
        };
        f.write_str(name)
    }
}

/// Translates a crossterm key event into a [`KeyMsg`].
///
/// Keys the widget has no use for (function keys, unmapped control chords)
/// translate to `None` and are dropped by the event loop.
#[must_use]
pub fn from_crossterm(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> Option<KeyMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let key_type = match code {
        KeyCode::Char(c) if ctrl => {
            if c.to_ascii_lowercase() == 'c' {
                KeyType::CtrlC
            } else {
                return None;
            }
        }
        KeyCode::Char(' ') => KeyType::Space,
        KeyCode::Char(c) => {
            return Some(KeyMsg {
                key_type: KeyType::Runes,
                runes: vec![c],
                alt,
            });
        }
        KeyCode::Enter => KeyType::Enter,
        KeyCode::Tab => KeyType::Tab,
        KeyCode::Backspace => KeyType::Backspace,
        KeyCode::Esc => KeyType::Esc,
        KeyCode::Up => KeyType::Up,
        KeyCode::Down => KeyType::Down,
        KeyCode::Left => KeyType::Left,
        KeyCode::Right => KeyType::Right,
        KeyCode::Home => KeyType::Home,
        KeyCode::End => KeyType::End,
        KeyCode::Delete => KeyType::Delete,
        _ => return None,
    };

    Some(KeyMsg {
        key_type,
        runes: Vec::new(),
        alt,
    })
}
