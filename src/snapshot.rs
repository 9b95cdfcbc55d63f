use super::*;

/// Read-only view of a session handed to the renderer once per frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Snapshot<'a> {
  pub(crate) cursor: usize,
  pub(crate) metrics: Metrics,
  pub(crate) slots: &'a [Slot],
  pub(crate) started: bool,
  pub(crate) terminal: bool,
  pub(crate) time_limit: Duration,
}
