use super::*;

const PROSE: &[&str] = &[
  "The old lighthouse keeper climbed the spiral stairs every evening, counting each step out loud as if the number might change. It never did, but the habit kept him company through the long winter nights.",
  "Rivers do not hurry, yet they carve canyons. Small efforts repeated every day often matter more than grand gestures made once, and the patient hand usually shapes the stone.",
  "She opened the map on the kitchen table and traced the route with her finger. The mountains looked small on paper, but she knew the climb would take the better part of a week.",
  "A good cup of coffee needs only three things: fresh beans, clean water, and a little patience while it brews. Most people skip the last one and wonder why the taste falls flat.",
  "The market woke before the sun. Vendors stacked crates of apples and onions, called out prices to one another, and argued cheerfully about the weather that nobody could predict.",
  "When the power went out, the whole street seemed to remember the stars at once. Neighbors stood on their porches, pointing upward and talking quietly, as if the sky had just been unveiled.",
  "Learning to type quickly is mostly about trust. Your fingers already know where the keys are; the hard part is letting them move without looking down to check their work.",
];

const PYTHON: &[&str] = &[
  "def mean(values): return sum(values) / len(values) if values else 0.0",
  "for index, line in enumerate(open(path)): print(f\"{index:>4}: {line.rstrip()}\")",
  "counts = {}; [counts.update({word: counts.get(word, 0) + 1}) for word in text.split()]",
  "class Point: def __init__(self, x, y): self.x, self.y = x, y",
  "squares = [n * n for n in range(10) if n % 2 == 0]",
  "with open(\"data.json\") as handle: config = json.load(handle)",
  "try: value = int(raw) except ValueError: value = None",
];

/// The passage set a run draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Corpus {
  #[default]
  Prose,
  Python,
}

impl Corpus {
  fn passages(self) -> &'static [&'static str] {
    match self {
      Self::Prose => PROSE,
      Self::Python => PYTHON,
    }
  }

  pub(crate) fn choose(self, rng: &mut impl Rng) -> Result<&'static str> {
    self
      .passages()
      .choose(rng)
      .copied()
      .ok_or_else(|| anyhow!("no passages available for {self:?} corpus"))
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    rand::{SeedableRng, rngs::StdRng},
  };

  #[test]
  fn choose_from_each_corpus() {
    let mut rng = StdRng::seed_from_u64(1);

    assert!(PROSE.contains(&Corpus::Prose.choose(&mut rng).unwrap()));
    assert!(PYTHON.contains(&Corpus::Python.choose(&mut rng).unwrap()));
  }

  #[test]
  fn passages_are_single_line_and_printable() {
    for corpus in [Corpus::Prose, Corpus::Python] {
      for passage in corpus.passages() {
        assert!(!passage.is_empty());
        assert!(!passage.chars().any(char::is_control), "{passage:?}");
      }
    }
  }

  #[test]
  fn default_is_prose() {
    assert_eq!(Corpus::default(), Corpus::Prose);
  }
}
