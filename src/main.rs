use {
  self::{
    action::Action,
    app::App,
    arguments::Arguments,
    corpus::Corpus,
    layout::Layout,
    metrics::Metrics,
    results::ResultLog,
    session::Session,
    slot::Slot,
    snapshot::Snapshot,
  },
  anyhow::{Context, anyhow},
  clap::{ArgAction, Parser, ValueEnum},
  crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
  },
  rand::{Rng, seq::SliceRandom},
  std::{
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    io::{self, Write, stdout},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  tracing::{debug, error, info},
};

mod action;
mod app;
mod arguments;
mod corpus;
mod display;
mod layout;
mod logging;
mod metrics;
mod results;
mod session;
mod slot;
mod snapshot;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
