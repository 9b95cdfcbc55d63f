use super::*;

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Control {
  Continue,
  Quit,
}

/// Drives a single session from terminal input, restarting it on request and
/// recording each finished run exactly once.
#[derive(Debug)]
pub(crate) struct App {
  corpus: Corpus,
  last: Option<Metrics>,
  results: ResultLog,
  session: Session,
  time_limit: Duration,
}

impl App {
  pub(crate) fn new(corpus: Corpus, time_limit: Duration, results: ResultLog) -> Result<Self> {
    let passage = corpus.choose(&mut rand::thread_rng())?;

    info!(?corpus, time_limit = time_limit.as_secs(), "starting session");

    Ok(Self {
      corpus,
      last: None,
      results,
      session: Session::new(passage, time_limit),
      time_limit,
    })
  }

  fn display(&self, now: Instant) -> Result {
    let mut out = stdout().lock();
    display::render(&mut out, &self.session.snapshot(now), terminal::size()?)?;
    out.flush()?;
    Ok(())
  }

  fn handle_action(&mut self, action: Action, now: Instant) -> Result<Control> {
    // A run that expired since the last tick is recorded and shown before any
    // key can restart it.
    let shown = self.session.completed();

    self.observe(now);

    match action {
      Action::Quit => return Ok(Control::Quit),
      Action::Insert(c) if self.session.is_terminal(now) => {
        if shown && c.eq_ignore_ascii_case(&'r') {
          self.request_restart(now)?;
        }
      }
      Action::Insert(c) => {
        self.session.insert(c, now);
      }
      Action::Delete => {
        self.session.delete(now);
      }
    }

    self.observe(now);

    Ok(Control::Continue)
  }

  /// Records the run the first time it is seen to be over.
  fn observe(&mut self, now: Instant) {
    if let Some(metrics) = self.session.complete(now) {
      info!(
        wpm = metrics.wpm,
        accuracy = metrics.accuracy,
        characters = self.session.cursor(),
        "session complete"
      );

      if let Err(error) = self.results.append(&metrics) {
        error!(
          path = %self.results.path().display(),
          "failed to record result: {error:#}"
        );
      }

      self.last = Some(metrics);
    }
  }

  fn request_restart(&mut self, now: Instant) -> Result<bool> {
    if !self.session.is_terminal(now) || !self.session.completed() {
      debug!("ignoring restart request for unrecorded session");
      return Ok(false);
    }

    self.restart()?;

    Ok(true)
  }

  fn restart(&mut self) -> Result {
    let passage = self.corpus.choose(&mut rand::thread_rng())?;

    self.session = Session::new(passage, self.time_limit);

    debug!(
      corpus = ?self.corpus,
      length = self.session.slots().len(),
      "restarted session"
    );

    Ok(())
  }

  pub(crate) fn run(&mut self) -> Result {
    terminal::enable_raw_mode()?;

    let result = execute!(stdout(), EnterAlternateScreen)
      .map_err(anyhow::Error::from)
      .and_then(|()| self.event_loop());

    restore(
      execute!(stdout(), Show, LeaveAlternateScreen),
      terminal::disable_raw_mode,
    )?;

    if let Some(metrics) = self.last {
      println!("{metrics}");
    }

    result
  }

  fn event_loop(&mut self) -> Result {
    loop {
      let now = Instant::now();

      self.observe(now);

      self.display(now)?;

      if event::poll(TICK)? {
        if let Some(action) = Action::from_event(event::read()?) {
          if self.handle_action(action, Instant::now())? == Control::Quit {
            return Ok(());
          }
        }
      }
    }
  }
}

/// Leaves raw mode even when leaving the alternate screen failed.
fn restore(leave: io::Result<()>, disable_raw_mode: impl FnOnce() -> io::Result<()>) -> Result {
  let disabled = disable_raw_mode();

  leave.context("failed to leave alternate screen")?;
  disabled.context("failed to disable raw mode")?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use {super::*, std::fs, tempfile::TempDir};

  const MINUTE: Duration = Duration::from_secs(60);

  fn app(dir: &TempDir, passage: &str) -> App {
    App {
      corpus: Corpus::Prose,
      last: None,
      results: ResultLog::new(dir.path().join("results.csv")),
      session: Session::new(passage, MINUTE),
      time_limit: MINUTE,
    }
  }

  fn rows(dir: &TempDir) -> Vec<String> {
    fs::read_to_string(dir.path().join("results.csv"))
      .map(|contents| contents.lines().map(str::to_owned).collect())
      .unwrap_or_default()
  }

  fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
      assert_eq!(app.handle_action(Action::Insert(c), now).unwrap(), Control::Continue);
    }
  }

  #[test]
  fn quit() {
    let dir = TempDir::new().unwrap();

    let mut app = app(&dir, "cat");

    assert_eq!(app.handle_action(Action::Quit, Instant::now()).unwrap(), Control::Quit);
  }

  #[test]
  fn completion_is_recorded_once() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "cat", start);

    for seconds in 1..5 {
      app.observe(start + Duration::from_secs(seconds));
    }

    assert_eq!(rows(&dir), vec!["WPM,Accuracy", "0,100.0"]);
    assert_eq!(app.last.map(|metrics| metrics.accuracy), Some(100.0));
  }

  #[test]
  fn expiry_is_recorded_on_tick() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "c", start);

    app.observe(start + Duration::from_secs(30));
    assert!(rows(&dir).is_empty());

    app.observe(start + Duration::from_secs(61));
    app.observe(start + Duration::from_secs(62));

    assert_eq!(rows(&dir), vec!["WPM,Accuracy", "0,100.0"]);
  }

  #[test]
  fn input_after_expiry_is_ignored() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "c", start);
    type_text(&mut app, "a", start + Duration::from_secs(61));
    app.handle_action(Action::Delete, start + Duration::from_secs(62)).unwrap();

    assert_eq!(app.session.cursor(), 1);
    assert_eq!(rows(&dir).len(), 2);
  }

  #[test]
  fn restart_only_when_terminal() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "c", start);

    assert!(!app.request_restart(start).unwrap());
    assert_eq!(app.session.cursor(), 1);

    type_text(&mut app, "at", start);

    assert!(app.request_restart(start).unwrap());
    assert_eq!(app.session.cursor(), 0);
    assert!(!app.session.started());
    assert!(app.session.slots().iter().all(|slot| !slot.typed));
  }

  #[test]
  fn r_is_input_while_running() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "rat");

    type_text(&mut app, "r", start);

    assert_eq!(app.session.cursor(), 1);
    assert!(app.session.slots()[0].correct);
  }

  #[test]
  fn r_restarts_when_terminal() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "cat", start);
    type_text(&mut app, "R", start);

    assert_eq!(app.session.cursor(), 0);
    assert!(!app.session.is_terminal(start));

    type_text(&mut app, "x", start);
    assert_eq!(app.session.cursor(), 1);
  }

  #[test]
  fn other_keys_are_ignored_when_terminal() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "cat", start);
    type_text(&mut app, "x", start);
    app.handle_action(Action::Delete, start).unwrap();

    assert_eq!(app.session.cursor(), 3);
    assert!(app.session.is_terminal(start));
  }

  #[test]
  fn each_run_is_recorded() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "cat", start);
    assert!(app.request_restart(start).unwrap());

    app.session = Session::new("ox", MINUTE);

    type_text(&mut app, "oy", start);

    assert_eq!(rows(&dir), vec!["WPM,Accuracy", "0,100.0", "0,50.0"]);
  }

  #[test]
  fn expiry_between_ticks_is_recorded_before_restart() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = app(&dir, "cat");

    type_text(&mut app, "c", start);

    app.observe(start + Duration::from_millis(59_950));
    assert!(rows(&dir).is_empty());

    type_text(&mut app, "r", start + Duration::from_millis(60_020));

    assert_eq!(rows(&dir), vec!["WPM,Accuracy", "0,100.0"]);
    assert!(app.last.is_some());
    assert_eq!(app.session.cursor(), 1);
    assert!(app.session.is_terminal(start + Duration::from_millis(60_020)));

    type_text(&mut app, "r", start + Duration::from_millis(60_500));

    assert_eq!(app.session.cursor(), 0);
    assert!(!app.session.started());
    assert_eq!(rows(&dir).len(), 2);
  }

  #[test]
  fn restore_disables_raw_mode_after_failed_leave() {
    let mut disabled = false;

    let result = restore(Err(io::Error::other("leave")), || {
      disabled = true;
      Ok(())
    });

    assert!(result.is_err());
    assert!(disabled);
  }

  #[test]
  fn restore_reports_raw_mode_failure() {
    assert!(restore(Ok(()), || Err(io::Error::other("raw"))).is_err());
    assert!(restore(Ok(()), || Ok(())).is_ok());
  }

  #[test]
  fn persistence_failure_is_not_fatal() {
    let dir = TempDir::new().unwrap();

    let start = Instant::now();

    let mut app = App {
      results: ResultLog::new(dir.path()),
      ..app(&dir, "cat")
    };

    type_text(&mut app, "cat", start);

    assert!(app.session.is_terminal(start));
    assert!(app.last.is_some());
  }
}
