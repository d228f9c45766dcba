use shifter_lib::{
  Direction,
  Prompter,
  host::NumericBlockMode,
};

use crate::cli::Answers;

/// Answers prompts from command line flags. A question without a matching
/// flag is dismissed, which cancels the shift.
#[derive(Debug, Default)]
pub struct FlagPrompter {
  answers: Answers,
}

impl FlagPrompter {
  pub fn new(answers: Answers) -> Self {
    Self { answers }
  }
}

/// Tells the user which flag answers `prompt`.
fn unanswered<T>(prompt: &str, hint: &str) -> Option<T> {
  log::warn!("unanswered prompt '{prompt}'");
  eprintln!("{prompt}: pass {hint}");
  None
}

impl Prompter for FlagPrompter {
  fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> Option<usize> {
    unanswered(prompt, &options.join(" or "))
  }

  fn numeric_block_mode(&mut self, first: i64, direction: Direction) -> Option<NumericBlockMode> {
    self.answers.numeric_block.or_else(|| {
      let each = if direction.is_up() {
        "increment"
      } else {
        "decrement"
      };
      let hint = format!("--enumerate-from N (e.g. {first}), or --each to {each} every row");
      unanswered("Shift numeric block", &hint)
    })
  }

  fn collapse_duplicates(&mut self) -> Option<bool> {
    self
      .answers
      .duplicates
      .or_else(|| unanswered("Duplicate lines found", "--collapse or --keep-duplicates"))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn flags_answer_prompts() {
    let mut prompter = FlagPrompter::new(Answers {
      numeric_block: Some(NumericBlockMode::ShiftEach),
      duplicates:    Some(false),
    });
    assert_eq!(
      prompter.numeric_block_mode(1, Direction::Up),
      Some(NumericBlockMode::ShiftEach)
    );
    assert_eq!(prompter.collapse_duplicates(), Some(false));
  }

  #[test]
  fn missing_flags_cancel() {
    let mut prompter = FlagPrompter::default();
    assert_eq!(prompter.numeric_block_mode(1, Direction::Down), None);
    assert_eq!(prompter.collapse_duplicates(), None);
  }
}
