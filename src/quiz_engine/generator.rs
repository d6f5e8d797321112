use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::trace;

use crate::quiz_engine::{
    error::QuizError,
    models::{DifficultyTier, Operator, Puzzle, PuzzleRequest},
};

/// Build one puzzle for `tier` from the supplied RNG.
///
/// | Tier   | Left     | Right    | Operation |
/// |--------|----------|----------|-----------|
/// | Easy   | 1..=9    | 1..=9    | sum |
/// | Medium | 10..=50  | 10..=50  | difference, larger operand first |
/// | Hard   | 11..=20  | 2..=20   | product |
///
/// The Hard ranges are deliberately asymmetric.
pub fn generate_with_rng<R: Rng>(rng: &mut R, tier: DifficultyTier) -> Puzzle {
    let puzzle = match tier {
        DifficultyTier::Easy => {
            let a = rng.gen_range(1..=9);
            let b = rng.gen_range(1..=9);
            Puzzle::new(tier, a, Operator::Add, b)
        }
        DifficultyTier::Medium => {
            let a = rng.gen_range(10..=50);
            let b = rng.gen_range(10..=50);
            // keep the difference non-negative
            let (a, b) = if a < b { (b, a) } else { (a, b) };
            Puzzle::new(tier, a, Operator::Sub, b)
        }
        DifficultyTier::Hard => {
            let a = rng.gen_range(11..=20);
            let b = rng.gen_range(2..=20);
            Puzzle::new(tier, a, Operator::Mul, b)
        }
    };
    trace!(tier = %tier, question = %puzzle.question, "generated puzzle");
    puzzle
}

/// Generate a puzzle using thread-local entropy.
pub fn generate(tier: DifficultyTier) -> Puzzle {
    generate_with_rng(&mut rand::thread_rng(), tier)
}

/// Entry point for one-off generation, deterministic when a seed is given.
pub fn generate_puzzle(request: PuzzleRequest) -> Puzzle {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with_rng(&mut rng, request.tier)
}

/// Generate from a raw tier label such as `"Medium"`.
///
/// Fails with [`QuizError::InvalidTier`] instead of falling back to a default.
pub fn generate_for_label(label: &str) -> Result<Puzzle, QuizError> {
    let tier: DifficultyTier = label.parse()?;
    Ok(generate(tier))
}
