//! Unit tests for the `adaptive_quiz` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical puzzle; different seeds → varied puzzles |
//! | Question text | Answer matches the expression; operands and operator appear in the text |
//! | Per-tier | Operand ranges and the non-negative Medium difference |
//! | Adaptive walk | Tracker + rule together over a scripted run |
//! | Entropy | `rng_seed: None` produces a valid puzzle (smoke test) |

use crate::quiz_engine::{
    generate, generate_puzzle, next_difficulty, Clock, DifficultyTier, Operator,
    PerformanceTracker, Puzzle, PuzzleRequest, Summary,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn seeded(tier: DifficultyTier, seed: u64) -> Puzzle {
    generate_puzzle(PuzzleRequest::seeded(tier, seed))
}

/// Pull `a`, `op`, `b` back out of "What is a op b?".
fn parse_question(q: &str) -> (i64, String, i64) {
    let body = q
        .strip_prefix("What is ")
        .and_then(|rest| rest.strip_suffix('?'))
        .unwrap_or_else(|| panic!("unexpected question format: {q}"));
    let parts: Vec<&str> = body.split(' ').collect();
    assert_eq!(parts.len(), 3, "question should have exactly two operands: {q}");
    (
        parts[0].parse().unwrap(),
        parts[1].to_string(),
        parts[2].parse().unwrap(),
    )
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_puzzle() {
    for tier in DifficultyTier::ALL {
        for seed in SEEDS {
            assert_eq!(seeded(tier, seed), seeded(tier, seed), "{tier:?} seed={seed}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    // Not a hard guarantee: 190 distinct Hard questions exist, so a few
    // collisions can happen, but never a quarter of the pairs.
    let pairs = 40u64;
    let same = (0..pairs)
        .filter(|&seed| {
            seeded(DifficultyTier::Hard, seed).question
                == seeded(DifficultyTier::Hard, seed + 500).question
        })
        .count();
    assert!(
        same < pairs as usize / 4,
        "Too many identical questions across different seeds ({same}/{pairs})"
    );
}

#[test]
fn entropy_request_produces_a_valid_puzzle() {
    for tier in DifficultyTier::ALL {
        let p = generate_puzzle(PuzzleRequest::new(tier));
        assert_eq!(p.tier, tier);
        assert_eq!(p.answer, p.operator.apply(p.operands[0], p.operands[1]));
    }
}

// ── question text ────────────────────────────────────────────────────────────

#[test]
fn answer_matches_the_stated_expression() {
    for tier in DifficultyTier::ALL {
        for seed in 0..200u64 {
            let p = seeded(tier, seed);
            let (a, op, b) = parse_question(&p.question);
            assert_eq!([a, b], p.operands, "{}", p.question);
            let expected = match op.as_str() {
                "+" => a + b,
                "-" => a - b,
                "x" => a * b,
                other => panic!("unknown operator {other:?} in {}", p.question),
            };
            assert_eq!(p.answer, expected, "{}", p.question);
        }
    }
}

#[test]
fn each_tier_uses_its_operator() {
    let expected = [
        (DifficultyTier::Easy,   Operator::Add, "+"),
        (DifficultyTier::Medium, Operator::Sub, "-"),
        (DifficultyTier::Hard,   Operator::Mul, "x"),
    ];
    for (tier, operator, symbol) in expected {
        for seed in SEEDS {
            let p = seeded(tier, seed);
            assert_eq!(p.operator, operator);
            assert_eq!(parse_question(&p.question).1, symbol);
        }
    }
}

// ── per-tier ranges ──────────────────────────────────────────────────────────

#[test]
fn medium_first_operand_is_never_smaller() {
    for _ in 0..1000 {
        let p = generate(DifficultyTier::Medium);
        assert!(p.operands[0] >= p.operands[1], "{}", p.question);
        assert!(p.answer >= 0, "{}", p.question);
    }
}

#[test]
fn operands_cover_each_tier_range() {
    let ranges = [
        (DifficultyTier::Easy,   1..=9,   1..=9),
        (DifficultyTier::Medium, 10..=50, 10..=50),
        (DifficultyTier::Hard,   11..=20, 2..=20),
    ];
    for (tier, left, right) in ranges {
        for seed in 0..300u64 {
            let [a, b] = seeded(tier, seed).operands;
            assert!(left.contains(&a), "{tier:?}: left operand {a} out of range");
            assert!(right.contains(&b), "{tier:?}: right operand {b} out of range");
        }
    }
}

// ── adaptive walk ────────────────────────────────────────────────────────────

#[test]
fn tracker_and_rule_drive_the_tier() {
    let mut tracker = PerformanceTracker::new().with_clock(Clock::manual());
    let mut tier = DifficultyTier::Easy;

    // (correct, seconds) → expected tier afterwards
    let script = [
        (true,  2.0, DifficultyTier::Medium),
        (true,  6.0, DifficultyTier::Medium),
        (true,  4.9, DifficultyTier::Hard),
        (true,  1.0, DifficultyTier::Hard),
        (false, 1.0, DifficultyTier::Medium),
        (false, 9.0, DifficultyTier::Easy),
        (false, 9.0, DifficultyTier::Easy),
    ];
    for (correct, secs, expected) in script {
        tracker.start_puzzle();
        tracker.clock_mut().advance_secs(secs);
        tracker.log_attempt(tier, correct).unwrap();
        let last = tracker.last_attempt().copied().unwrap();
        assert_eq!(last.tier, tier);
        tier = next_difficulty(tier, &last);
        assert_eq!(tier, expected, "after correct={correct} t={secs}");
    }

    match tracker.get_summary() {
        Summary::Stats(s) => {
            assert_eq!(s.total, script.len());
            assert_eq!(s.correct, 4);
        }
        Summary::Empty => panic!("attempts were logged"),
    }
}
