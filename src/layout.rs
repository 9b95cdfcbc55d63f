use super::*;

const MARGIN: u16 = 4;
const TOP: u16 = 2;

/// Wraps the passage into rows between fixed left and right margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Layout {
  columns: usize,
}

impl Layout {
  pub(crate) fn new(width: u16) -> Self {
    Self {
      columns: usize::from(width.saturating_sub(MARGIN * 2)).max(1),
    }
  }

  pub(crate) fn position(&self, index: usize) -> (u16, u16) {
    let column = u16::try_from(index % self.columns).unwrap_or(u16::MAX);
    let row = u16::try_from(index / self.columns).unwrap_or(u16::MAX);

    (MARGIN.saturating_add(column), TOP.saturating_add(row))
  }

  /// Row of the last slot, or the first text row for an empty passage.
  pub(crate) fn last_row(&self, len: usize) -> u16 {
    self.position(len.saturating_sub(1)).1
  }
}
