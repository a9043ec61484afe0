//! Vector3 - translate/scale/rotate arguments
//!
//! Operations take either up to three positional numbers or one ordered
//! sequence of exactly three. [`VectorArgs`] carries which form was used so
//! the operation can decide how to fill missing trailing components.

use crate::error::{Error, Result};

/// A 3-component vector of doubles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Self::new(self.x / len, self.y / len, self.z / len))
    }

    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// One raw argument as it arrives from a dynamic caller
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Number(f64),
    Sequence(Vec<f64>),
}

/// Validated argument form for a vector-taking operation
#[derive(Debug, Clone, PartialEq)]
pub enum VectorArgs {
    /// One to three leading components.
    Positional(Vec<f64>),
    /// A single ordered sequence; only valid with exactly three entries.
    Sequence(Vec<f64>),
}

impl VectorArgs {
    /// Classify a dynamic argument list. All numbers, or exactly one sequence.
    pub fn from_values(values: &[ArgValue]) -> Result<Self> {
        match values {
            [ArgValue::Sequence(seq)] => Ok(Self::Sequence(seq.clone())),
            _ => values
                .iter()
                .map(|value| match value {
                    ArgValue::Number(n) => Ok(*n),
                    ArgValue::Sequence(_) => Err(Error::Argument(
                        "cannot mix positional numbers with a sequence".to_string(),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Positional),
        }
    }

    /// Resolve to a full vector, taking missing trailing components from `fallback`.
    pub fn resolve(&self, fallback: Vector3) -> Result<Vector3> {
        self.check_finite()?;
        match self {
            Self::Positional(values) if (1..=3).contains(&values.len()) => {
                let mut out = fallback.to_array();
                out[..values.len()].copy_from_slice(values);
                Ok(Vector3::from(out))
            }
            Self::Positional(values) => Err(Error::Argument(format!(
                "expected 1 to 3 components, got {}",
                values.len()
            ))),
            Self::Sequence(_) => self.require_full(),
        }
    }

    /// Resolve to a full vector, rejecting any partial form.
    pub fn require_full(&self) -> Result<Vector3> {
        self.check_finite()?;
        let values = self.values();
        match values {
            &[x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => Err(Error::Argument(format!(
                "expected exactly 3 components, got {}",
                values.len()
            ))),
        }
    }

    fn values(&self) -> &[f64] {
        match self {
            Self::Positional(values) | Self::Sequence(values) => values,
        }
    }

    /// NaN or an infinity would poison every product it enters.
    fn check_finite(&self) -> Result<()> {
        match self.values().iter().find(|n| !n.is_finite()) {
            Some(n) => Err(Error::Argument(format!("expected a finite number, got {n}"))),
            None => Ok(()),
        }
    }
}

impl From<f64> for VectorArgs {
    fn from(x: f64) -> Self {
        Self::Positional(vec![x])
    }
}

impl From<(f64, f64)> for VectorArgs {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Positional(vec![x, y])
    }
}

impl From<(f64, f64, f64)> for VectorArgs {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::Positional(vec![x, y, z])
    }
}

impl From<[f64; 3]> for VectorArgs {
    fn from(values: [f64; 3]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl From<&[f64]> for VectorArgs {
    fn from(values: &[f64]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl From<Vec<f64>> for VectorArgs {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Vector3> for VectorArgs {
    fn from(v: Vector3) -> Self {
        Self::Sequence(v.to_array().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_fills_from_fallback() {
        let args = VectorArgs::from((1.0, 2.0));
        let v = args.resolve(Vector3::new(7.0, 8.0, 9.0)).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 9.0));
    }

    #[test]
    fn sequence_ignores_fallback() {
        let args = VectorArgs::from([1.0, 2.0, 3.0]);
        let v = args.resolve(Vector3::new(7.0, 8.0, 9.0)).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn short_sequence_is_rejected() {
        let args = VectorArgs::from(&[1.0, 2.0][..]);
        assert!(matches!(args.resolve(Vector3::ZERO), Err(Error::Argument(_))));
    }

    #[test]
    fn empty_positional_is_rejected() {
        let args = VectorArgs::Positional(Vec::new());
        assert!(matches!(args.resolve(Vector3::ZERO), Err(Error::Argument(_))));
    }

    #[test]
    fn require_full_rejects_partial_positional() {
        let args = VectorArgs::from((1.0, 0.0));
        assert!(args.require_full().is_err());
        assert_eq!(
            VectorArgs::from((1.0, 0.0, 0.0)).require_full().unwrap(),
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn from_values_classifies_forms() {
        let positional = VectorArgs::from_values(&[ArgValue::Number(1.0), ArgValue::Number(2.0)]);
        assert_eq!(positional, Ok(VectorArgs::Positional(vec![1.0, 2.0])));

        let sequence = VectorArgs::from_values(&[ArgValue::Sequence(vec![1.0, 2.0, 3.0])]);
        assert_eq!(sequence, Ok(VectorArgs::Sequence(vec![1.0, 2.0, 3.0])));
    }

    #[test]
    fn from_values_rejects_mixed_forms() {
        let mixed = VectorArgs::from_values(&[
            ArgValue::Number(1.0),
            ArgValue::Sequence(vec![1.0, 2.0, 3.0]),
        ]);
        assert!(matches!(mixed, Err(Error::Argument(_))));
    }

    #[test]
    fn non_finite_components_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let positional = VectorArgs::from((bad, 0.0));
            assert!(matches!(positional.resolve(Vector3::ZERO), Err(Error::Argument(_))));

            let sequence = VectorArgs::from([0.0, bad, 1.0]);
            assert!(matches!(sequence.require_full(), Err(Error::Argument(_))));
        }
    }

    #[test]
    fn normalized_zero_is_none() {
        assert_eq!(Vector3::ZERO.normalized(), None);
        assert_eq!(
            Vector3::new(0.0, 3.0, 4.0).normalized(),
            Some(Vector3::new(0.0, 0.6, 0.8))
        );
    }
}
