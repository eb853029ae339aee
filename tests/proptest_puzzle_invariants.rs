//! Property-based invariant tests for whole-puzzle generation.
//!
//! Verifies, for arbitrary seeds, word counts and dictionaries:
//! 1. Determinism: identical arguments give identical grids and word paths.
//! 2. Coverage: every cell in [0, width) x [0, height) holds an A-Z letter.
//! 3. Fidelity: reading each word's path back out of the grid spells it.
//! 4. Normalization: the bounding box starts at (0, 0).
//! 5. Orientation: height never exceeds width.
//! 6. Accounting: every attempted word is either returned or skipped.
//! 7. Paths are monotonic along a single axis, one cell or more per step.

use proptest::prelude::*;
use wordgrid::{Dictionary, FillMode, Params, Puzzle, generate_with};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_seed() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,12}"
}

fn arb_dictionary() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec("[A-Z]{1,9}", 1..12).prop_map(|words| Dictionary::new(words).unwrap())
}

fn arb_word_count() -> impl Strategy<Value = i64> {
    -3i64..30
}

fn build(count: i64, seed: &str, dict: &Dictionary) -> Puzzle {
    generate_with(count, seed, dict, &Params::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(seed in arb_seed(), dict in arb_dictionary(), count in arb_word_count()) {
        let a = build(count, &seed, &dict);
        let b = build(count, &seed, &dict);
        prop_assert_eq!(a.grid.rows(), b.grid.rows());
        prop_assert_eq!(a.words, b.words);
        prop_assert_eq!(a.skipped, b.skipped);
    }

    #[test]
    fn grid_is_fully_covered(seed in arb_seed(), dict in arb_dictionary(), count in arb_word_count()) {
        let p = build(count, &seed, &dict);
        let (w, h) = (p.width(), p.height());
        prop_assert_eq!(p.grid.len(), w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let ch = p.grid.get_char(x, y);
                prop_assert!(ch.is_some_and(|c| c.is_ascii_uppercase()), "hole at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn words_read_back_from_grid(seed in arb_seed(), dict in arb_dictionary(), count in arb_word_count()) {
        let p = build(count, &seed, &dict);
        for word in &p.words {
            prop_assert_eq!(word.coords.len(), word.text.len());
            let read: String = word
                .coords
                .iter()
                .map(|c| p.grid.get_char(c.x, c.y).unwrap_or('?'))
                .collect();
            prop_assert_eq!(&read, &word.text);
        }
    }

    #[test]
    fn output_is_normalized_landscape(seed in arb_seed(), dict in arb_dictionary(), count in arb_word_count()) {
        let p = build(count, &seed, &dict);
        let b = p.grid.bounds().unwrap();
        prop_assert_eq!((b.min_x, b.min_y), (0, 0));
        prop_assert!(p.height() <= p.width(), "{}x{}", p.width(), p.height());
    }

    #[test]
    fn every_attempt_is_accounted_for(seed in arb_seed(), dict in arb_dictionary(), count in arb_word_count()) {
        let p = build(count, &seed, &dict);
        prop_assert_eq!(p.words.len() + p.skipped.len(), 1 + count.max(0) as usize);
    }

    #[test]
    fn paths_advance_along_one_axis(seed in arb_seed(), dict in arb_dictionary(), count in arb_word_count()) {
        let p = build(count, &seed, &dict);
        for word in &p.words {
            let Some(first) = word.coords.windows(2).next() else { continue };
            let dx = (first[1].x - first[0].x).signum();
            let dy = (first[1].y - first[0].y).signum();
            prop_assert_eq!(dx.abs() + dy.abs(), 1);
            for pair in word.coords.windows(2) {
                prop_assert_eq!((pair[1].x - pair[0].x).signum(), dx);
                prop_assert_eq!((pair[1].y - pair[0].y).signum(), dy);
            }
        }
    }

    #[test]
    fn ambient_fill_keeps_word_layout(seed in arb_seed(), dict in arb_dictionary(), count in 0i64..15) {
        let ambient = Params { fill: FillMode::Ambient, ..Params::default() };
        let a = generate_with(count, &seed, &dict, &ambient).unwrap();
        let b = build(count, &seed, &dict);
        prop_assert_eq!(&a.words, &b.words);
        prop_assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    }
}
