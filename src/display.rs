use super::*;

const INSTRUCTIONS: &str = "Start typing to begin the test.";
const CONTROLS: &str = "-- press ESC to exit --";
const COMPLETE: &str = "Test Complete!";
const RESTART: &str = "Press ESC to exit or R to restart.";
const SEPARATOR: &str = " | ";

fn width_of(text: &str) -> u16 {
  u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

fn centered(
  out: &mut impl Write,
  text: &str,
  row: u16,
  width: u16,
  color: Color,
  bold: bool,
) -> Result {
  queue!(
    out,
    MoveTo(width.saturating_sub(width_of(text)) / 2, row),
    SetForegroundColor(color),
  )?;

  if bold {
    queue!(out, SetAttribute(Attribute::Bold))?;
  }

  queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;

  Ok(())
}

fn statistics(out: &mut impl Write, snapshot: &Snapshot, width: u16) -> Result {
  let segments = [
    (
      format!(
        "{:.1}s / {}s",
        snapshot.metrics.elapsed,
        snapshot.time_limit.as_secs()
      ),
      Color::Blue,
    ),
    (format!("{:.0} WPM", snapshot.metrics.wpm), Color::Yellow),
    (format!("{:.1}% acc", snapshot.metrics.accuracy), Color::Green),
  ];

  let total = segments
    .iter()
    .map(|(text, _)| width_of(text))
    .fold(width_of(SEPARATOR) * 2, u16::saturating_add);

  queue!(out, MoveTo(width.saturating_sub(total) / 2, 0))?;

  for (i, (text, color)) in segments.iter().enumerate() {
    if i > 0 {
      queue!(out, Print(SEPARATOR))?;
    }

    queue!(
      out,
      SetForegroundColor(*color),
      SetAttribute(Attribute::Bold),
      Print(text),
      SetAttribute(Attribute::Reset),
      ResetColor,
    )?;
  }

  Ok(())
}

fn passage(out: &mut impl Write, snapshot: &Snapshot, layout: Layout) -> Result {
  for (i, slot) in snapshot.slots.iter().enumerate() {
    let colors = if slot.cursor {
      Colors::new(Color::Black, Color::White)
    } else if slot.is_error() {
      Colors::new(Color::Red, Color::Reset)
    } else if slot.typed {
      Colors::new(Color::Green, Color::Reset)
    } else {
      Colors::new(Color::DarkGrey, Color::Reset)
    };

    let (x, y) = layout.position(i);

    queue!(out, MoveTo(x, y), SetColors(colors), Print(slot))?;
  }

  queue!(out, ResetColor)?;

  Ok(())
}

/// Draws one full frame, leaving the terminal cursor on the cursor slot.
pub(crate) fn render(out: &mut impl Write, snapshot: &Snapshot, (width, height): (u16, u16)) -> Result {
  let layout = Layout::new(width);

  let last_row = layout.last_row(snapshot.slots.len());

  queue!(out, Hide, Clear(ClearType::All))?;

  statistics(out, snapshot, width)?;

  passage(out, snapshot, layout)?;

  if !snapshot.started {
    centered(out, INSTRUCTIONS, height / 2, width, Color::Yellow, false)?;
  }

  centered(
    out,
    CONTROLS,
    height.saturating_sub(2).max(last_row.saturating_add(3)),
    width,
    Color::DarkGrey,
    false,
  )?;

  if snapshot.terminal {
    let row = (height.saturating_sub(4) / 2 + 2).max(last_row.saturating_add(2));

    centered(out, COMPLETE, row, width, Color::Cyan, true)?;

    centered(
      out,
      &format!(
        "Final WPM: {:.0} | Final Accuracy: {:.1}%",
        snapshot.metrics.wpm, snapshot.metrics.accuracy
      ),
      row.saturating_add(1),
      width,
      Color::Cyan,
      false,
    )?;

    centered(out, RESTART, row.saturating_add(2), width, Color::DarkGrey, false)?;
  }

  if snapshot.cursor < snapshot.slots.len() {
    let (x, y) = layout.position(snapshot.cursor);
    queue!(out, MoveTo(x, y), Show)?;
  }

  Ok(())
}
