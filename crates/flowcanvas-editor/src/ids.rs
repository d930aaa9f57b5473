use tracing::debug;
use uuid::Uuid;

/// Attempts made against an [`IdSource`] before falling back to suffixing.
pub(crate) const MAX_ID_ATTEMPTS: usize = 64;

/// Source of candidate node identifiers.
///
/// Candidates need not be unique: the store checks each one against the live
/// graph and asks again on collision.
pub trait IdSource: Send {
  fn next_id(&mut self) -> String;
}

/// Yields "1", "2", "3", ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
  next: u64,
}

impl SequentialIds {
  pub fn new() -> Self {
    Self::starting_at(1)
  }

  pub fn starting_at(next: u64) -> Self {
    Self { next }
  }
}

impl Default for SequentialIds {
  fn default() -> Self {
    Self::new()
  }
}

impl IdSource for SequentialIds {
  fn next_id(&mut self) -> String {
    let id = self.next.to_string();
    self.next = self.next.wrapping_add(1);
    id
  }
}

/// Yields random v4 UUIDs in simple form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
  fn next_id(&mut self) -> String {
    Uuid::new_v4().simple().to_string()
  }
}

/// Draw candidates from `source` until one is free.
///
/// Gives up on the source after [`MAX_ID_ATTEMPTS`] and derives a free id
/// from the last candidate instead, so this always terminates with an id for
/// which `is_taken` is false.
pub(crate) fn fresh_id(source: &mut dyn IdSource, is_taken: impl Fn(&str) -> bool) -> String {
  let mut last = String::new();
  for attempt in 1..=MAX_ID_ATTEMPTS {
    let candidate = source.next_id();
    if !candidate.is_empty() && !is_taken(&candidate) {
      return candidate;
    }
    debug!(candidate = %candidate, attempt, "generated id is taken, regenerating");
    last = candidate;
  }
  suffixed_id(&last, is_taken)
}

/// `base` if free, otherwise the first free `base-2`, `base-3`, ...
pub(crate) fn suffixed_id(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
  if !base.is_empty() && !is_taken(base) {
    return base.to_string();
  }
  let mut n: u64 = 2;
  loop {
    let candidate = format!("{base}-{n}");
    if !is_taken(&candidate) {
      return candidate;
    }
    n += 1;
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  struct Constant(&'static str);

  impl IdSource for Constant {
    fn next_id(&mut self) -> String {
      self.0.to_string()
    }
  }

  #[test]
  fn test_sequential_ids() {
    let mut ids = SequentialIds::starting_at(5);
    assert_eq!(ids.next_id(), "5");
    assert_eq!(ids.next_id(), "6");
  }

  #[test]
  fn test_uuid_ids_are_simple_form() {
    let id = UuidIds.next_id();
    assert_eq!(id.len(), 32);
    assert!(!id.contains('-'));
  }

  #[test]
  fn test_fresh_id_skips_taken() {
    let taken: HashSet<&str> = ["1", "2", "4"].into_iter().collect();
    let mut ids = SequentialIds::new();

    assert_eq!(fresh_id(&mut ids, |c| taken.contains(c)), "3");
    assert_eq!(fresh_id(&mut ids, |c| taken.contains(c)), "5");
  }

  #[test]
  fn test_fresh_id_falls_back_when_source_is_stuck() {
    let taken: HashSet<&str> = ["x", "x-2"].into_iter().collect();
    let id = fresh_id(&mut Constant("x"), |c| taken.contains(c));
    assert_eq!(id, "x-3");
  }

  #[test]
  fn test_fresh_id_rejects_empty_candidates() {
    let id = fresh_id(&mut Constant(""), |_| false);
    assert_eq!(id, "-2");
  }

  #[test]
  fn test_suffixed_id() {
    let taken: HashSet<&str> = ["e1-2", "e1-2-2"].into_iter().collect();
    assert_eq!(suffixed_id("e1-3", |c| taken.contains(c)), "e1-3");
    assert_eq!(suffixed_id("e1-2", |c| taken.contains(c)), "e1-2-3");
  }
}
