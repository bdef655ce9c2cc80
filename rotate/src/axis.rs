use strum::{Display, EnumIter, EnumString};

/// Orientation of a block that lies along an axis rather than facing a
/// direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  /// Swaps the horizontal axes, keeps the vertical one.
  #[inline]
  pub fn quarter_turn(self) -> Axis {
    match self {
      Axis::X => Axis::Z,
      Axis::Z => Axis::X,
      Axis::Y => Axis::Y,
    }
  }
}
