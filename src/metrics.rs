use super::*;

const CHARACTERS_PER_WORD: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Metrics {
  pub(crate) accuracy: f64,
  /// Seconds elapsed, clamped to the time limit.
  pub(crate) elapsed: f64,
  pub(crate) wpm: f64,
}

impl Metrics {
  pub(crate) fn compute(
    typed: usize,
    errors: usize,
    elapsed: Option<Duration>,
    time_limit: Duration,
  ) -> Self {
    let correct = typed.saturating_sub(errors);

    Self {
      accuracy: accuracy(correct, typed),
      elapsed: effective_elapsed(elapsed.unwrap_or_default(), time_limit).as_secs_f64(),
      wpm: elapsed.map_or(0.0, |elapsed| words_per_minute(correct, elapsed, time_limit)),
    }
  }
}

impl Display for Metrics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {:.0} | Accuracy: {:.1}% | Elapsed Time: {:.1}s",
      self.wpm, self.accuracy, self.elapsed
    )
  }
}

pub(crate) fn effective_elapsed(elapsed: Duration, time_limit: Duration) -> Duration {
  elapsed.min(time_limit)
}

/// Correct characters per five-character word, per minute. Once `elapsed`
/// passes `time_limit` the limit becomes the divisor, so the figure stops
/// decaying after the run is over.
pub(crate) fn words_per_minute(correct: usize, elapsed: Duration, time_limit: Duration) -> f64 {
  let minutes = if elapsed > time_limit {
    time_limit.as_secs_f64() / 60.0
  } else {
    elapsed.as_secs_f64() / 60.0
  };

  if minutes == 0.0 {
    return 0.0;
  }

  (correct as f64 / CHARACTERS_PER_WORD) / minutes
}

pub(crate) fn accuracy(correct: usize, typed: usize) -> f64 {
  if typed == 0 {
    return 0.0;
  }

  (correct as f64 / typed as f64) * 100.0
}
