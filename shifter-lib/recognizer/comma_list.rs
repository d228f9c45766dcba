use super::Recognizer;
use crate::{
  engine::ShiftEngine,
  fragment::{
    Probe,
    TypeTag,
  },
  request::ShiftRequest,
  sort::sort_comma_separated,
  text::is_comma_separated_list,
};

/// `b, a, c`, sorted ascending or descending by shift direction.
pub struct CommaSeparatedList;

impl Recognizer for CommaSeparatedList {
  fn name(&self) -> &'static str {
    "comma-separated-list"
  }

  fn classify(&self, probe: &Probe, _cx: &ShiftEngine) -> Option<TypeTag> {
    is_comma_separated_list(probe.text).then_some(TypeTag::CommaSeparatedList)
  }

  fn shift(&self, probe: &Probe, request: ShiftRequest, cx: &ShiftEngine) -> Option<String> {
    Some(sort_comma_separated(
      probe.text,
      request.direction,
      cx.config.sort_case,
    ))
  }
}
