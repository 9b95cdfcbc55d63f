use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Delete,
  Insert(char),
  Quit,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
      }) => match code {
        KeyCode::Esc => Some(Self::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
        KeyCode::Char(_) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Self::Insert(c)),
        KeyCode::Backspace => Some(Self::Delete),
        _ => None,
      },
      _ => None,
    }
  }
}
