//! matrix-playground - CSS 3D transforms as immutable matrix values
//!
//! Look an element up, chain `translate` / `scale` / `rotate` /
//! `change_origin` on the returned state, then `apply()` it:
//!
//! ```ignore
//! use matrix_playground::{lookup, dom::web::WebDocument};
//!
//! let doc = WebDocument::current().unwrap();
//! lookup(&doc, "#box")?
//!     .scale((0.5, 2.0))?
//!     .change_origin("top left")?
//!     .rotate([0.0, 0.0, 1.0], std::f64::consts::FRAC_PI_4)?
//!     .apply()?;
//! ```

pub mod dom;
pub mod error;
pub mod primitives;
pub mod transform;

pub use dom::{ElementSource, StyleTarget, Target, lookup, read};
pub use error::{Error, Result};
pub use primitives::{ArgValue, Matrix4, Vector3, VectorArgs};
pub use transform::{BoxSize, Origin, OriginSpec, TransformState};
