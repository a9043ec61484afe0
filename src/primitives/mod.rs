//! Transform primitives - the math under a CSS 3D transform
//!
//! Each primitive is an immutable value:
//! - `Vector3` / `VectorArgs` → operation arguments
//! - `Matrix4` → the homogeneous transform, `to_css()` → `matrix3d(...)`
//! - `format_number` → the shared CSS number format

pub mod matrix;
pub mod number;
pub mod rotation;
pub mod vector;

pub use matrix::Matrix4;
pub use number::{PRECISION, format_number};
pub use vector::{ArgValue, Vector3, VectorArgs};
