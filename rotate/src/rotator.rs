use crate::axis::Axis;
use crate::direction::{CARDINALS_COUNT, Direction};

/// Number of distinct quarter-turn rotations.
pub const ROTATIONS: u8 = 4;

/// Total number of orientations, i.e. rotations with and without mirroring.
pub const ORIENTATIONS: usize = 8;

/// Brings any number of clockwise quarter turns into `0..ROTATIONS`.
/// Negative turns wrap around, so `-1` is `3`.
#[inline]
pub fn normalize_rotation(rotation: i32) -> u8 {
  rotation.rem_euclid(ROTATIONS as i32) as u8
}

/// Rotate a face by `rotation` clockwise quarter turns. With `mirror` the
/// east and west faces are swapped before turning. Faces outside of the four
/// cardinals are returned as is.
pub fn rotate_direction(face: Direction, rotation: i32, mirror: bool) -> Direction {
  let Some(index) = face.index() else {
    return face;
  };
  let index = if mirror && index % 2 == 1 { index + 2 } else { index };
  Direction::from_index(index + normalize_rotation(rotation) as usize)
}

/// Number of clockwise quarter turns that bring `from` to `to`, or `0` if
/// either of them isn't a cardinal.
pub fn rotation_between(from: Direction, to: Direction) -> u8 {
  match (from.index(), to.index()) {
    (Some(from), Some(to)) => ((to + CARDINALS_COUNT - from) % CARDINALS_COUNT) as u8,
    _ => 0,
  }
}

/// A fixed orientation: mirroring over the Z axis (east and west swap)
/// followed by a number of clockwise quarter turns around the vertical axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rotator {
  rotation: u8,
  mirrored: bool,
}

/// Horizontal coordinates captured by `Rotator::locate`. The stored `x` has
/// the mirroring of the rotator already applied. Negation wraps, so
/// `i32::MIN` maps to itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Location {
  x: i32,
  z: i32,
  rotation: u8,
}

impl Location {
  #[inline]
  pub fn x(&self) -> i32 {
    self.x
  }

  #[inline]
  pub fn z(&self) -> i32 {
    self.z
  }

  pub fn rotated_x(&self) -> i32 {
    match self.rotation {
      0 => self.x,
      1 => self.z.wrapping_neg(),
      2 => self.x.wrapping_neg(),
      _ => self.z,
    }
  }

  pub fn rotated_z(&self) -> i32 {
    match self.rotation {
      0 => self.z,
      1 => self.x,
      2 => self.z.wrapping_neg(),
      _ => self.x.wrapping_neg(),
    }
  }

  #[inline]
  pub fn rotated(&self) -> (i32, i32) {
    (self.rotated_x(), self.rotated_z())
  }
}

impl Rotator {
  pub const IDENTITY: Rotator = Rotator {
    rotation: 0,
    mirrored: false,
  };

  pub fn new(rotation: i32, mirrored: bool) -> Self {
    Self {
      rotation: normalize_rotation(rotation),
      mirrored,
    }
  }

  /// Rotator that turns `from` into `to`.
  pub fn from_directions(from: Direction, to: Direction, mirrored: bool) -> Self {
    Self {
      rotation: rotation_between(from, to),
      mirrored,
    }
  }

  #[inline]
  pub fn between(from: Direction, to: Direction) -> Self {
    Self::from_directions(from, to, false)
  }

  /// All orientations: unmirrored ones by increasing rotation, then mirrored
  /// ones.
  pub fn all() -> impl Iterator<Item = Rotator> {
    [false, true]
      .into_iter()
      .flat_map(|mirrored| (0..ROTATIONS).map(move |rotation| Rotator { rotation, mirrored }))
  }

  #[inline]
  pub fn rotation(&self) -> u8 {
    self.rotation
  }

  #[inline]
  pub fn set_rotation(&mut self, rotation: i32) {
    self.rotation = normalize_rotation(rotation);
  }

  #[inline]
  pub fn is_mirrored(&self) -> bool {
    self.mirrored
  }

  #[inline]
  pub fn set_mirrored(&mut self, mirrored: bool) {
    self.mirrored = mirrored;
  }

  #[inline]
  pub fn is_identity(&self) -> bool {
    *self == Self::IDENTITY
  }

  #[inline]
  pub fn apply_to_direction(&self, face: Direction) -> Direction {
    rotate_direction(face, self.rotation as i32, self.mirrored)
  }

  /// Axis orientation is only affected by odd rotations, mirroring keeps it.
  #[inline]
  pub fn rotate_axis(&self, axis: Axis) -> Axis {
    if self.rotation % 2 == 1 { axis.quarter_turn() } else { axis }
  }

  pub fn locate(&self, x: i32, z: i32) -> Location {
    Location {
      x: if self.mirrored { x.wrapping_neg() } else { x },
      z,
      rotation: self.rotation,
    }
  }

  #[inline]
  pub fn rotate_xz(&self, x: i32, z: i32) -> (i32, i32) {
    self.locate(x, z).rotated()
  }

  /// Rotate a relative offset. The vertical component is kept.
  #[inline]
  pub fn rotate_offset(&self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
    let (x, z) = self.rotate_xz(x, z);
    (x, y, z)
  }

  /// Rotate an array indexed by cardinal direction, so that the value stored
  /// for a direction `d` ends up stored for `self.apply_to_direction(d)`.
  pub fn rotate_quad<T>(&self, values: [T; CARDINALS_COUNT]) -> [T; CARDINALS_COUNT] {
    let mut result = values;
    result.rotate_right(self.rotation as usize);
    if self.mirrored {
      if self.rotation % 2 == 0 {
        result.swap(1, 3);
      } else {
        result.swap(0, 2);
      }
    }
    result
  }

  /// Rotator that undoes this one. A mirrored rotator is a reflection, so it
  /// is its own inverse.
  pub fn inverse(&self) -> Rotator {
    if self.mirrored {
      *self
    } else {
      Rotator::new(-(self.rotation as i32), false)
    }
  }

  /// Rotator equivalent to applying `self` and then `other`.
  pub fn then(&self, other: &Rotator) -> Rotator {
    let rotation = if other.mirrored {
      other.rotation as i32 - self.rotation as i32
    } else {
      other.rotation as i32 + self.rotation as i32
    };
    Rotator::new(rotation, self.mirrored != other.mirrored)
  }
}
