use crate::block_state::{BlockState, Capabilities};
use crate::template::{Offset, Part, Template};
use orient_rotate::direction::Direction;
use orient_rotate::rotator::{ORIENTATIONS, Rotator};

/// Asymmetric layout: a chest facing north with a fence to its east and a
/// lever two blocks above, facing west.
fn construct_template() -> Template {
  let mut template = Template::default();
  template.push(Offset::new(0, 0, 0), BlockState::facing(Direction::North));
  template.push(Offset::new(1, 0, 0), BlockState::faces([false, false, false, true]));
  template.push(Offset::new(0, 2, 1), BlockState::facing(Direction::West));
  template
}

#[test]
fn offset_rotation() {
  let offset = Offset::new(3, 1, 0);
  assert_eq!(offset.rotated(&Rotator::new(1, false)), Offset::new(0, 1, 3));
  assert_eq!(offset.rotated(&Rotator::new(1, true)), Offset::new(0, 1, -3));
}

#[test]
fn rotate_template() {
  let template = construct_template();
  let rotated = template.rotated(&Rotator::new(1, false), &Capabilities::default());
  assert_eq!(
    rotated.parts(),
    &[
      Part::new(Offset::new(0, 0, 0), BlockState::facing(Direction::East)),
      Part::new(Offset::new(0, 0, 1), BlockState::faces([true, false, false, false])),
      Part::new(Offset::new(-1, 2, 0), BlockState::facing(Direction::North)),
    ]
  );
}

#[test]
fn identity_keeps_template() {
  let template = construct_template();
  assert_eq!(template.rotated(&Rotator::IDENTITY, &Capabilities::default()), template);
}

#[test]
fn matches_ignores_order() {
  let template = construct_template();
  let reversed = template.parts().iter().rev().copied().collect::<Template>();
  assert!(template.matches(&reversed));
  assert!(!template.matches(&Template::default()));
  let mut bigger = template.clone();
  bigger.push(Offset::new(5, 5, 5), BlockState::default());
  assert!(!template.matches(&bigger));
}

#[test]
fn matches_counts_duplicates() {
  let part = Part::new(Offset::default(), BlockState::default());
  let other = Part::new(Offset::new(1, 0, 0), BlockState::default());
  let first = Template::new(vec![part, part, other]);
  let second = Template::new(vec![part, other, other]);
  assert!(!first.matches(&second));
}

#[test]
fn orientations_are_distinct() {
  let template = construct_template();
  let orientations = template.orientations(&Capabilities::default()).collect::<Vec<_>>();
  assert_eq!(orientations.len(), ORIENTATIONS);
  assert_eq!(orientations[0], (Rotator::IDENTITY, template.clone()));
  for i in 0..orientations.len() {
    for j in i + 1..orientations.len() {
      assert!(!orientations[i].1.matches(&orientations[j].1));
    }
  }
}

#[test]
fn find_orientation_of_placed_template() {
  env_logger::try_init().ok();
  let template = construct_template();
  let capabilities = Capabilities::default();
  for rotator in Rotator::all() {
    let placed = template.rotated(&rotator, &capabilities);
    let placed = placed.parts().iter().rev().copied().collect::<Template>();
    assert_eq!(template.find_orientation(&placed, &capabilities), Some(rotator));
  }
}

#[test]
fn find_orientation_fails_for_other_layout() {
  env_logger::try_init().ok();
  let template = construct_template();
  let mut placed = template.clone();
  placed.push(Offset::new(0, -1, 0), BlockState::default());
  assert_eq!(template.find_orientation(&placed, &Capabilities::default()), None);
}

#[test]
fn inverse_restores_template() {
  let template = construct_template();
  let capabilities = Capabilities::default();
  for rotator in Rotator::all() {
    let rotated = template.rotated(&rotator, &capabilities);
    assert_eq!(rotated.rotated(&rotator.inverse(), &capabilities), template);
  }
}
