use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Measure your typing speed against a timed passage")]
pub(crate) struct Arguments {
  #[clap(long, short, value_enum, default_value_t)]
  corpus: Corpus,
  #[clap(long, default_value = "typespeed.log")]
  log_file: PathBuf,
  #[clap(long, default_value = "results.csv")]
  results: PathBuf,
  #[clap(
    long,
    short,
    default_value = "60",
    value_parser = clap::value_parser!(u64).range(1..),
    help = "Time limit in seconds"
  )]
  time: u64,
  #[clap(long, short, action = ArgAction::Count)]
  verbose: u8,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    logging::init(self.verbose, &self.log_file)?;

    App::new(
      self.corpus,
      Duration::from_secs(self.time),
      ResultLog::new(self.results),
    )?
    .run()
  }
}
