use super::*;

const HEADER: [&str; 2] = ["WPM", "Accuracy"];

/// Append-only CSV log with one row per finished run.
#[derive(Clone, Debug)]
pub(crate) struct ResultLog {
  path: PathBuf,
}

impl ResultLog {
  pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub(crate) fn path(&self) -> &Path {
    &self.path
  }

  pub(crate) fn append(&self, metrics: &Metrics) -> Result {
    let needs_header = !self.path.exists();

    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.path)
      .with_context(|| format!("failed to open {}", self.path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    if needs_header {
      writer.write_record(HEADER)?;
    }

    writer.write_record([
      format!("{:.0}", metrics.wpm),
      format!("{:.1}", metrics.accuracy),
    ])?;

    writer
      .flush()
      .with_context(|| format!("failed to write {}", self.path.display()))?;

    Ok(())
  }
}
