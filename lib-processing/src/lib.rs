#![cfg_attr(not(test), no_std)]

use math::*;

pub mod face_detection;
pub use face_detection::*;

/// Number of faces on the dodecahedron.
///
pub const FACE_COUNT: usize = 12;
