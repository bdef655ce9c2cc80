use crate::block_state::{BlockState, Capabilities};
use orient_rotate::rotator::Rotator;
use std::collections::HashMap;

/// Position of a part relative to the template's anchor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Offset {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl Offset {
  pub fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  pub fn rotated(&self, rotator: &Rotator) -> Offset {
    let (x, y, z) = rotator.rotate_offset(self.x, self.y, self.z);
    Offset { x, y, z }
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Part {
  pub offset: Offset,
  pub state: BlockState,
}

impl Part {
  pub fn new(offset: Offset, state: BlockState) -> Self {
    Self { offset, state }
  }
}

/// Multi-block layout defined relative to an anchor.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Template {
  parts: Vec<Part>,
}

impl FromIterator<Part> for Template {
  fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
    Template {
      parts: iter.into_iter().collect(),
    }
  }
}

impl Template {
  pub fn new(parts: Vec<Part>) -> Self {
    Self { parts }
  }

  #[inline]
  pub fn parts(&self) -> &[Part] {
    &self.parts
  }

  pub fn push(&mut self, offset: Offset, state: BlockState) {
    self.parts.push(Part::new(offset, state));
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.parts.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.parts.is_empty()
  }

  pub fn rotated(&self, rotator: &Rotator, capabilities: &Capabilities) -> Template {
    self
      .parts
      .iter()
      .map(|part| Part::new(part.offset.rotated(rotator), part.state.rotated(rotator, capabilities)))
      .collect()
  }

  /// The template in every orientation, starting with the identity.
  pub fn orientations<'a>(&'a self, capabilities: &'a Capabilities) -> impl Iterator<Item = (Rotator, Template)> + 'a {
    Rotator::all().map(move |rotator| (rotator, self.rotated(&rotator, capabilities)))
  }

  /// Same parts regardless of their order.
  pub fn matches(&self, other: &Template) -> bool {
    if self.parts.len() != other.parts.len() {
      return false;
    }
    let mut counts = HashMap::<&Part, isize>::with_capacity(self.parts.len());
    for part in &self.parts {
      *counts.entry(part).or_default() += 1;
    }
    for part in &other.parts {
      *counts.entry(part).or_default() -= 1;
    }
    counts.values().all(|&count| count == 0)
  }

  /// Orientation that turns this template into `placed`.
  pub fn find_orientation(&self, placed: &Template, capabilities: &Capabilities) -> Option<Rotator> {
    let result = self
      .orientations(capabilities)
      .find(|(_, rotated)| rotated.matches(placed))
      .map(|(rotator, _)| rotator);
    match result {
      Some(rotator) => log::debug!(
        "Template of {} parts matches with rotation {} (mirrored: {})",
        self.len(),
        rotator.rotation(),
        rotator.is_mirrored()
      ),
      None => log::debug!("Template of {} parts matches in no orientation", self.len()),
    }
    result
  }
}
