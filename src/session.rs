use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
  Idle,
  Running { start: Instant },
  Finished { elapsed: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Status {
  Idle,
  Running,
  Terminal,
}

/// A single timed run over one passage.
///
/// Every operation is total: input that is not legal in the current status
/// is ignored. Time expiry is observed lazily, whenever an operation is given
/// a `now` at or beyond the time limit.
#[derive(Clone, Debug)]
pub(crate) struct Session {
  completed: bool,
  cursor: usize,
  errors: usize,
  phase: Phase,
  slots: Vec<Slot>,
  time_limit: Duration,
  typed: usize,
}

impl Session {
  pub(crate) fn new(passage: &str, time_limit: Duration) -> Self {
    let mut slots = passage.chars().map(Slot::new).collect::<Vec<Slot>>();

    if let Some(first) = slots.first_mut() {
      first.cursor = true;
    }

    Self {
      completed: false,
      cursor: 0,
      errors: 0,
      phase: Phase::Idle,
      slots,
      time_limit,
      typed: 0,
    }
  }

  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  pub(crate) fn slots(&self) -> &[Slot] {
    &self.slots
  }

  /// Whether the final metrics have already been handed out by `complete`.
  pub(crate) fn completed(&self) -> bool {
    self.completed
  }

  pub(crate) fn started(&self) -> bool {
    self.phase != Phase::Idle
  }

  pub(crate) fn elapsed(&self, now: Instant) -> Duration {
    match self.phase {
      Phase::Idle => Duration::ZERO,
      Phase::Running { start } => now.saturating_duration_since(start),
      Phase::Finished { elapsed } => elapsed,
    }
  }

  pub(crate) fn status(&self, now: Instant) -> Status {
    if self.cursor >= self.slots.len() {
      return Status::Terminal;
    }

    match self.phase {
      Phase::Idle => Status::Idle,
      Phase::Running { start } if now.saturating_duration_since(start) < self.time_limit => {
        Status::Running
      }
      Phase::Running { .. } | Phase::Finished { .. } => Status::Terminal,
    }
  }

  pub(crate) fn is_terminal(&self, now: Instant) -> bool {
    self.status(now) == Status::Terminal
  }

  pub(crate) fn metrics(&self, now: Instant) -> Metrics {
    Metrics::compute(
      self.typed,
      self.errors,
      self.started().then(|| self.elapsed(now)),
      self.time_limit,
    )
  }

  pub(crate) fn snapshot(&self, now: Instant) -> Snapshot<'_> {
    Snapshot {
      cursor: self.cursor,
      metrics: self.metrics(now),
      slots: &self.slots,
      started: self.started(),
      terminal: self.is_terminal(now),
      time_limit: self.time_limit,
    }
  }

  /// Types `input` at the cursor. Control characters are dropped without
  /// starting the clock.
  pub(crate) fn insert(&mut self, input: char, now: Instant) -> Status {
    self.settle(now);

    if self.is_terminal(now) || input.is_control() {
      return self.status(now);
    }

    if self.phase == Phase::Idle {
      self.phase = Phase::Running { start: now };
    }

    let slot = &mut self.slots[self.cursor];

    slot.cursor = false;
    self.typed += 1;

    if !slot.enter(input) {
      self.errors += 1;
    }

    self.cursor += 1;

    if let Some(next) = self.slots.get_mut(self.cursor) {
      next.cursor = true;
    }

    self.settle(now);

    self.status(now)
  }

  /// Steps back one slot, undoing whatever was typed there.
  pub(crate) fn delete(&mut self, now: Instant) -> Status {
    self.settle(now);

    if self.is_terminal(now) || self.cursor == 0 {
      return self.status(now);
    }

    self.slots[self.cursor].cursor = false;
    self.cursor -= 1;

    let slot = &mut self.slots[self.cursor];

    slot.cursor = true;

    if slot.typed {
      if slot.is_error() {
        self.errors -= 1;
      }

      self.typed -= 1;
      slot.clear();
    }

    self.status(now)
  }

  /// Yields the final metrics the first time the session is observed in its
  /// terminal status, and never again.
  pub(crate) fn complete(&mut self, now: Instant) -> Option<Metrics> {
    self.settle(now);

    if self.completed || !self.is_terminal(now) {
      return None;
    }

    self.completed = true;

    Some(self.metrics(now))
  }

  fn settle(&mut self, now: Instant) {
    if let Phase::Running { start } = self.phase {
      let elapsed = now.saturating_duration_since(start);

      if self.cursor >= self.slots.len() || elapsed >= self.time_limit {
        self.phase = Phase::Finished { elapsed };
      }
    }
  }
}
