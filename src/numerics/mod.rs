pub mod angles;
pub mod vector;

pub use angles::{copy_sign, normalize_angle};
pub use vector::{linear_combination, Vector3};
