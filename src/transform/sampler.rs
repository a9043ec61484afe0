//! Sampler - random operation chains
//!
//! Drives the playground's "randomize" control and the chain-level tests.

use rand::Rng;

use crate::error::Result;
use crate::primitives::Vector3;

use super::state::TransformState;

/// One step of a transform chain
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Translate(Vector3),
    Scale(Vector3),
    Rotate { axis: Vector3, angle: f64 },
    ChangeOrigin(&'static str),
}

impl Operation {
    pub fn apply_to<E: Clone>(&self, state: &TransformState<E>) -> Result<TransformState<E>> {
        match self {
            Self::Translate(v) => state.translate(*v),
            Self::Scale(v) => state.scale(*v),
            Self::Rotate { axis, angle } => state.rotate(*axis, *angle),
            Self::ChangeOrigin(css) => state.change_origin(*css),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Translate(v) => format!("translate({}, {}, {})", v.x, v.y, v.z),
            Self::Scale(v) => format!("scale({}, {}, {})", v.x, v.y, v.z),
            Self::Rotate { axis, angle } => format!(
                "rotate([{}, {}, {}], {:.0}deg)",
                axis.x,
                axis.y,
                axis.z,
                angle.to_degrees()
            ),
            Self::ChangeOrigin(css) => format!("origin({css})"),
        }
    }
}

/// Generates random operation chains
pub struct Sampler;

impl Sampler {
    pub const SCALE_VOCABULARY: &[f64] = &[0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
    pub const ANGLE_VOCABULARY: &[f64] = &[-90.0, -45.0, -30.0, -15.0, 15.0, 30.0, 45.0, 90.0];
    pub const ORIGIN_VOCABULARY: &[&str] = &[
        "center",
        "top left",
        "top right",
        "bottom left",
        "bottom right",
        "10% 10%",
        "25% 75%",
        "0px 50px",
    ];
    pub const AXIS_VOCABULARY: &[Vector3] = &[
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(2.0, -4.0, 0.6),
    ];

    fn pick<R: Rng, T: Copy>(rng: &mut R, vocab: &[T]) -> T {
        vocab[rng.random_range(0..vocab.len())]
    }

    pub fn random_translate<R: Rng>(rng: &mut R, reach: f64) -> Operation {
        Operation::Translate(Vector3::new(
            rng.random_range(-reach..=reach).round(),
            rng.random_range(-reach..=reach).round(),
            0.0,
        ))
    }

    pub fn random_scale<R: Rng>(rng: &mut R) -> Operation {
        let s = Self::pick(rng, Self::SCALE_VOCABULARY);
        Operation::Scale(Vector3::new(s, s, 1.0))
    }

    pub fn random_rotate<R: Rng>(rng: &mut R) -> Operation {
        Operation::Rotate {
            axis: Self::pick(rng, Self::AXIS_VOCABULARY),
            angle: Self::pick(rng, Self::ANGLE_VOCABULARY).to_radians(),
        }
    }

    pub fn random_origin<R: Rng>(rng: &mut R) -> Operation {
        Operation::ChangeOrigin(Self::pick(rng, Self::ORIGIN_VOCABULARY))
    }

    /// One operation of any kind
    pub fn random_operation<R: Rng>(rng: &mut R) -> Operation {
        match rng.random_range(0..4) {
            0 => Self::random_translate(rng, 60.0),
            1 => Self::random_scale(rng),
            2 => Self::random_rotate(rng),
            _ => Self::random_origin(rng),
        }
    }

    pub fn random_chain<R: Rng>(rng: &mut R, count: usize) -> Vec<Operation> {
        (0..count).map(|_| Self::random_operation(rng)).collect()
    }

    /// Fold a chain over a starting state
    pub fn apply_chain<E: Clone>(
        state: &TransformState<E>,
        chain: &[Operation],
    ) -> Result<TransformState<E>> {
        chain
            .iter()
            .try_fold(state.clone(), |acc, op| op.apply_to(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::dom::lookup;
    use crate::dom::memory::{MemoryDocument, MemoryElement};
    use crate::transform::{BoxSize, parse_transform};

    fn fixture() -> TransformState<MemoryElement> {
        let doc = MemoryDocument::new();
        doc.insert(MemoryElement::new("test", BoxSize::new(100.0, 100.0)));
        lookup(&doc, "#test").unwrap()
    }

    #[test]
    fn chains_are_deterministic_per_seed() {
        let a = Sampler::random_chain(&mut SmallRng::seed_from_u64(7), 10);
        let b = Sampler::random_chain(&mut SmallRng::seed_from_u64(7), 10);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn serialized_chains_reparse_to_the_same_string() {
        let start = fixture();
        for seed in 0..50 {
            let chain = Sampler::random_chain(&mut SmallRng::seed_from_u64(seed), 8);
            let state = Sampler::apply_chain(&start, &chain).unwrap();
            let css = state.to_transform_matrix();
            assert_eq!(parse_transform(&css).unwrap().to_css(), css, "seed {seed}");
        }
    }

    #[test]
    fn chains_keep_the_affine_bottom_row() {
        let start = fixture();
        for seed in 0..50 {
            let chain = Sampler::random_chain(&mut SmallRng::seed_from_u64(seed), 8);
            let state = Sampler::apply_chain(&start, &chain).unwrap();
            assert_eq!(state.matrix().rows()[3], [0.0, 0.0, 0.0, 1.0], "seed {seed}");
        }
    }

    #[test]
    fn origin_changes_never_move_the_rendering() {
        let start = fixture();
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            let chain = Sampler::random_chain(&mut rng, 6);
            let state = Sampler::apply_chain(&start, &chain).unwrap();
            let Operation::ChangeOrigin(css) = Sampler::random_origin(&mut rng) else {
                unreachable!()
            };
            let moved = state.change_origin(css).unwrap();
            assert_eq!(moved.absolute_matrix().to_css(), state.absolute_matrix().to_css());
        }
    }

    #[test]
    fn describe_reads_like_css() {
        assert_eq!(
            Operation::Translate(Vector3::new(1.0, 2.0, 0.0)).describe(),
            "translate(1, 2, 0)"
        );
        assert_eq!(Operation::ChangeOrigin("top left").describe(), "origin(top left)");
    }
}
