use orient_rotate::direction::Direction;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Offset {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Request {
  RotateDirection {
    direction: Direction,
    rotation: i32,
    #[serde(default)]
    mirrored: bool,
  },
  RotationBetween {
    from: Direction,
    to: Direction,
  },
  RotateOffset {
    rotation: i32,
    #[serde(default)]
    mirrored: bool,
    offset: Offset,
  },
  RotateState {
    rotation: i32,
    #[serde(default)]
    mirrored: bool,
    state: String,
  },
  Inverse {
    rotation: i32,
    #[serde(default)]
    mirrored: bool,
  },
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Response {
  RotateDirection { direction: Direction },
  RotationBetween { rotation: u8 },
  RotateOffset { offset: Offset },
  RotateState { state: String },
  Inverse { rotation: u8, mirrored: bool },
  Error { message: String },
}
