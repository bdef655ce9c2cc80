use strum::{Display, EnumIter, EnumString};

/// Number of cardinal directions, i.e. the length of one full turn.
pub const CARDINALS_COUNT: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
  North,
  East,
  South,
  West,
  Up,
  Down,
  NorthEast,
  SouthEast,
  SouthWest,
  NorthWest,
}

impl Direction {
  /// Cardinal directions in clockwise order. Index in this array is the
  /// direction index used by all rotation arithmetic.
  pub const CARDINALS: [Direction; CARDINALS_COUNT] =
    [Direction::North, Direction::East, Direction::South, Direction::West];

  /// Position in `CARDINALS`, `None` for faces that rotation leaves alone.
  #[inline]
  pub fn index(self) -> Option<usize> {
    match self {
      Direction::North => Some(0),
      Direction::East => Some(1),
      Direction::South => Some(2),
      Direction::West => Some(3),
      Direction::Up
      | Direction::Down
      | Direction::NorthEast
      | Direction::SouthEast
      | Direction::SouthWest
      | Direction::NorthWest => None,
    }
  }

  #[inline]
  pub fn from_index(index: usize) -> Direction {
    Direction::CARDINALS[index % CARDINALS_COUNT]
  }

  #[inline]
  pub fn is_cardinal(self) -> bool {
    self.index().is_some()
  }

  #[inline]
  pub fn clockwise(self) -> Direction {
    self.index().map_or(self, |index| Direction::from_index(index + 1))
  }

  #[inline]
  pub fn counter_clockwise(self) -> Direction {
    self
      .index()
      .map_or(self, |index| Direction::from_index(index + CARDINALS_COUNT - 1))
  }

  pub fn opposite(self) -> Direction {
    match self {
      Direction::North => Direction::South,
      Direction::East => Direction::West,
      Direction::South => Direction::North,
      Direction::West => Direction::East,
      Direction::Up => Direction::Down,
      Direction::Down => Direction::Up,
      Direction::NorthEast => Direction::SouthWest,
      Direction::SouthEast => Direction::NorthWest,
      Direction::SouthWest => Direction::NorthEast,
      Direction::NorthWest => Direction::SouthEast,
    }
  }

  /// Horizontal unit offset `(dx, dz)`. North points to negative Z, east to
  /// positive X. Vertical faces have no horizontal offset.
  pub fn offset(self) -> (i32, i32) {
    match self {
      Direction::North => (0, -1),
      Direction::East => (1, 0),
      Direction::South => (0, 1),
      Direction::West => (-1, 0),
      Direction::Up | Direction::Down => (0, 0),
      Direction::NorthEast => (1, -1),
      Direction::SouthEast => (1, 1),
      Direction::SouthWest => (-1, 1),
      Direction::NorthWest => (-1, -1),
    }
  }
}
