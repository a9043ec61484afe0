//! Transform - an element's transform state and the operations on it
//!
//! A `TransformState` pairs a `Matrix4` with the `Origin` it is anchored at.
//! Operations return new states; `apply()` writes the result back as
//! `transform: matrix3d(...)` plus `transform-origin`.

pub mod origin;
pub mod parse;
pub mod sampler;
pub mod state;

pub use origin::{BoxSize, Length, Origin};
pub use parse::parse_transform;
pub use sampler::{Operation, Sampler};
pub use state::{OriginSpec, TransformState};
