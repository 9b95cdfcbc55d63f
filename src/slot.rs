use super::*;

/// One code point of the passage and what the user has done with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Slot {
  pub(crate) character: char,
  pub(crate) correct: bool,
  pub(crate) cursor: bool,
  pub(crate) typed: bool,
}

impl Slot {
  pub(crate) fn new(character: char) -> Self {
    Self {
      character,
      correct: false,
      cursor: false,
      typed: false,
    }
  }

  /// Records `input` against this slot, returning whether it matched.
  pub(crate) fn enter(&mut self, input: char) -> bool {
    self.typed = true;
    self.correct = input == self.character;
    self.correct
  }

  pub(crate) fn clear(&mut self) {
    self.typed = false;
    self.correct = false;
  }

  pub(crate) fn is_error(&self) -> bool {
    self.typed && !self.correct
  }
}

impl Display for Slot {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.character)
  }
}
