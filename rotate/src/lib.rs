pub mod axis;
pub mod direction;
pub mod rotator;
