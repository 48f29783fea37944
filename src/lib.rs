// Dead reckoning library
// Extrapolates entity kinematic state between sparse authoritative updates

pub mod geodesy;
pub mod interpolation;
pub mod reckon;

pub use reckon::{DeadReckoner, KinematicState, RvwCmReckoner, RvwReckoner};
