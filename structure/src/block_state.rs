use orient_rotate::axis::Axis;
use orient_rotate::direction::{CARDINALS_COUNT, Direction};
use orient_rotate::rotator::Rotator;
use std::fmt::{self, Formatter};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WallHeight {
  #[default]
  None,
  Low,
  Tall,
}

/// Per side state of a block, indexed in `Direction::CARDINALS` order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sides {
  /// Whether the block connects to each side, e.g. fences and panes.
  Faces([bool; CARDINALS_COUNT]),
  /// Height of each side of a wall.
  Walls([WallHeight; CARDINALS_COUNT]),
}

/// What the running platform supports rotating.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Capabilities {
  pub wall_heights: bool,
}

impl Default for Capabilities {
  fn default() -> Self {
    Self { wall_heights: true }
  }
}

impl Capabilities {
  /// Platforms where walls only store connections without heights.
  pub fn legacy() -> Self {
    Self { wall_heights: false }
  }
}

/// Orientable part of a block's state. Everything else about the block is
/// kept by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct BlockState {
  pub facing: Option<Direction>,
  pub axis: Option<Axis>,
  pub sides: Option<Sides>,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum StateParseError {
  #[error("property `{0}` has no value")]
  MissingValue(String),
  #[error("unknown property `{0}`")]
  UnknownProperty(String),
  #[error("invalid value `{value}` for property `{key}`")]
  InvalidValue { key: String, value: String },
  #[error("property `{0}` is given more than once")]
  DuplicateProperty(String),
  #[error("sides mix connections with wall heights")]
  MixedSides,
}

impl BlockState {
  pub fn facing(facing: Direction) -> Self {
    Self {
      facing: Some(facing),
      ..Self::default()
    }
  }

  pub fn axis(axis: Axis) -> Self {
    Self {
      axis: Some(axis),
      ..Self::default()
    }
  }

  pub fn faces(faces: [bool; CARDINALS_COUNT]) -> Self {
    Self {
      sides: Some(Sides::Faces(faces)),
      ..Self::default()
    }
  }

  pub fn walls(walls: [WallHeight; CARDINALS_COUNT]) -> Self {
    Self {
      sides: Some(Sides::Walls(walls)),
      ..Self::default()
    }
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.facing.is_none() && self.axis.is_none() && self.sides.is_none()
  }

  pub fn rotated(&self, rotator: &Rotator, capabilities: &Capabilities) -> BlockState {
    let sides = self.sides.map(|sides| match sides {
      Sides::Faces(faces) => Sides::Faces(rotator.rotate_quad(faces)),
      Sides::Walls(walls) if capabilities.wall_heights => Sides::Walls(rotator.rotate_quad(walls)),
      walls @ Sides::Walls(_) => walls,
    });
    BlockState {
      facing: self.facing.map(|facing| rotator.apply_to_direction(facing)),
      axis: self.axis.map(|axis| rotator.rotate_axis(axis)),
      sides,
    }
  }
}

fn invalid_value(key: &str, value: &str) -> StateParseError {
  StateParseError::InvalidValue {
    key: key.to_owned(),
    value: value.to_owned(),
  }
}

impl FromStr for BlockState {
  type Err = StateParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    let s = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')).unwrap_or(s);

    let mut state = BlockState::default();
    let mut faces = [None; CARDINALS_COUNT];
    let mut walls = [None; CARDINALS_COUNT];

    for pair in s.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
      let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| StateParseError::MissingValue(pair.to_owned()))?;
      let (key, value) = (key.trim(), value.trim());
      match key {
        "facing" => {
          if state.facing.is_some() {
            return Err(StateParseError::DuplicateProperty(key.to_owned()));
          }
          state.facing = Some(value.parse().map_err(|_| invalid_value(key, value))?);
        }
        "axis" => {
          if state.axis.is_some() {
            return Err(StateParseError::DuplicateProperty(key.to_owned()));
          }
          state.axis = Some(value.parse().map_err(|_| invalid_value(key, value))?);
        }
        side => {
          let index = side
            .parse::<Direction>()
            .ok()
            .and_then(Direction::index)
            .ok_or_else(|| StateParseError::UnknownProperty(side.to_owned()))?;
          if faces[index].is_some() || walls[index].is_some() {
            return Err(StateParseError::DuplicateProperty(side.to_owned()));
          }
          if let Ok(face) = value.parse::<bool>() {
            faces[index] = Some(face);
          } else if let Ok(wall) = value.parse::<WallHeight>() {
            walls[index] = Some(wall);
          } else {
            return Err(invalid_value(side, value));
          }
        }
      }
    }

    let has_faces = faces.iter().any(Option::is_some);
    let has_walls = walls.iter().any(Option::is_some);
    state.sides = match (has_faces, has_walls) {
      (true, true) => return Err(StateParseError::MixedSides),
      (true, false) => Some(Sides::Faces(faces.map(|face| face.unwrap_or(false)))),
      (false, true) => Some(Sides::Walls(walls.map(|wall| wall.unwrap_or_default()))),
      (false, false) => None,
    };

    Ok(state)
  }
}

impl fmt::Display for BlockState {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut properties = Vec::new();
    if let Some(facing) = self.facing {
      properties.push(format!("facing={}", facing));
    }
    if let Some(axis) = self.axis {
      properties.push(format!("axis={}", axis));
    }
    match self.sides {
      Some(Sides::Faces(faces)) => {
        for (direction, face) in Direction::CARDINALS.iter().zip(faces) {
          properties.push(format!("{}={}", direction, face));
        }
      }
      Some(Sides::Walls(walls)) => {
        for (direction, wall) in Direction::CARDINALS.iter().zip(walls) {
          properties.push(format!("{}={}", direction, wall));
        }
      }
      None => {}
    }
    write!(f, "{}", properties.join(","))
  }
}
