use std::fmt;
use std::str::FromStr;

use crate::error::CosmicError;
use crate::session::ReadingSession;
use crate::store::KvStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Char(char),
}

impl FromStr for Key {
    type Err = CosmicError;

    /// Accepts DOM key names (`ArrowLeft`, `ArrowRight`, `Escape`) or a
    /// single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            "Escape" | "Esc" => Ok(Key::Escape),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(CosmicError::Format(format!("unknown key {s:?}"))),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Escape => f.write_str("Escape"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Focus is inside a text input; the reader ignores the key.
    pub in_text_input: bool,
}

impl KeyEvent {
    pub fn reader(key: Key) -> Self {
        Self {
            key,
            in_text_input: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    PrevPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ExitZen,
}

pub fn action_for(key: Key) -> Option<KeyAction> {
    match key {
        Key::ArrowLeft => Some(KeyAction::PrevPage),
        Key::ArrowRight => Some(KeyAction::NextPage),
        Key::Char('+') | Key::Char('=') => Some(KeyAction::ZoomIn),
        Key::Char('-') => Some(KeyAction::ZoomOut),
        Key::Char('0') => Some(KeyAction::ResetZoom),
        Key::Escape => Some(KeyAction::ExitZen),
        Key::Char(_) => None,
    }
}

impl<S: KvStore> ReadingSession<S> {
    /// Applies the reader's key bindings. Returns the action taken, if any.
    /// Escape only ever leaves zen mode.
    pub fn handle_key(&mut self, ev: KeyEvent) -> Option<KeyAction> {
        if ev.in_text_input {
            return None;
        }
        let action = action_for(ev.key)?;
        match action {
            KeyAction::PrevPage => {
                self.prev_page();
            }
            KeyAction::NextPage => {
                self.next_page();
            }
            KeyAction::ZoomIn => {
                self.zoom_in();
            }
            KeyAction::ZoomOut => {
                self.zoom_out();
            }
            KeyAction::ResetZoom => {
                self.reset_zoom();
            }
            KeyAction::ExitZen => {
                if !self.is_zen() {
                    return None;
                }
                self.toggle_zen_mode();
            }
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Document;
    use crate::policy::SessionPolicy;
    use crate::session::LastReadStore;
    use crate::store::MemoryStore;

    fn session(store: &MemoryStore) -> ReadingSession<&MemoryStore> {
        ReadingSession::open(
            store,
            LastReadStore::default(),
            SessionPolicy::default(),
            Document::new("Python", "intro.pdf"),
        )
    }

    #[test]
    fn parses_tokens() {
        assert_eq!("ArrowLeft".parse::<Key>().unwrap(), Key::ArrowLeft);
        assert_eq!("Esc".parse::<Key>().unwrap(), Key::Escape);
        assert_eq!("+".parse::<Key>().unwrap(), Key::Char('+'));
        assert!("PageDown".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn arrows_navigate() {
        let store = MemoryStore::default();
        let mut s = session(&store);
        s.on_document_loaded(3);
        s.handle_key(KeyEvent::reader(Key::ArrowRight));
        s.handle_key(KeyEvent::reader(Key::ArrowRight));
        s.handle_key(KeyEvent::reader(Key::ArrowRight));
        assert_eq!(s.current_page(), 3);
        s.handle_key(KeyEvent::reader(Key::ArrowLeft));
        assert_eq!(s.current_page(), 2);
    }

    #[test]
    fn keys_ignored_in_text_input() {
        let store = MemoryStore::default();
        let mut s = session(&store);
        let ev = KeyEvent {
            key: Key::ArrowRight,
            in_text_input: true,
        };
        assert_eq!(s.handle_key(ev), None);
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn zoom_keys() {
        let store = MemoryStore::default();
        let mut s = session(&store);
        for _ in 0..10 {
            s.handle_key(KeyEvent::reader(Key::Char('=')));
        }
        assert_eq!(s.scale(), 2.5);
        s.handle_key(KeyEvent::reader(Key::Char('0')));
        assert_eq!(s.scale(), 1.0);
        for _ in 0..10 {
            s.handle_key(KeyEvent::reader(Key::Char('-')));
        }
        assert_eq!(s.scale(), 0.5);
        assert_eq!(s.handle_key(KeyEvent::reader(Key::Char('x'))), None);
    }

    #[test]
    fn escape_only_exits_zen() {
        let store = MemoryStore::default();
        let mut s = session(&store);
        assert_eq!(s.handle_key(KeyEvent::reader(Key::Escape)), None);
        assert!(!s.is_zen());
        s.toggle_zen_mode();
        assert_eq!(s.handle_key(KeyEvent::reader(Key::Escape)), Some(KeyAction::ExitZen));
        assert!(!s.is_zen());
    }
}
