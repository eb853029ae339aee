use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// A hidden word and its path through the grid, first letter to last.
///
/// The order of `coords` is part of the contract: a selection is checked
/// positionally against it, never as a set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub coords: Vec<Coord>,
}

impl Word {
    pub fn new(text: impl Into<String>, coords: Vec<Coord>) -> Self {
        Self {
            text: text.into(),
            coords,
        }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// True when `selection` traces this word start-to-end or end-to-start.
    pub fn matches_selection(&self, selection: &[Coord]) -> bool {
        if selection.len() != self.coords.len() || selection.is_empty() {
            return false;
        }
        selection == self.coords.as_slice() || selection.iter().eq(self.coords.iter().rev())
    }

    /// Coordinates advance by one constant unit step along one axis.
    pub fn is_straight_run(&self) -> bool {
        let Some(first) = self.coords.windows(2).next() else {
            return true;
        };
        let step = (first[1].x - first[0].x, first[1].y - first[0].y);
        if step.0.abs() + step.1.abs() != 1 {
            return false;
        }
        self.coords
            .windows(2)
            .all(|p| (p[1].x - p[0].x, p[1].y - p[0].y) == step)
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Word {
        Word {
            text: self.text.clone(),
            coords: self
                .coords
                .iter()
                .map(|c| Coord::new(c.x + dx, c.y + dy))
                .collect(),
        }
    }

    /// Same quarter turn as [`crate::grid::Grid::rotate_quarter`] for a
    /// normalized grid of the given width.
    pub fn rotated(&self, width: usize) -> Word {
        let w = width as i32;
        Word {
            text: self.text.clone(),
            coords: self
                .coords
                .iter()
                .map(|c| Coord::new(c.y, w - 1 - c.x))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> Word {
        Word::new(
            "CAT",
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
        )
    }

    #[test]
    fn selection_matches_in_both_directions() {
        let w = cat();
        assert!(w.matches_selection(&w.coords));
        let reversed: Vec<_> = w.coords.iter().rev().copied().collect();
        assert!(w.matches_selection(&reversed));
    }

    #[test]
    fn selection_order_matters() {
        let w = cat();
        let shuffled = vec![Coord::new(1, 0), Coord::new(0, 0), Coord::new(2, 0)];
        assert!(!w.matches_selection(&shuffled));
        assert!(!w.matches_selection(&w.coords[..2]));
        assert!(!w.matches_selection(&[]));
    }

    #[test]
    fn straight_run_detection() {
        assert!(cat().is_straight_run());
        let gap = Word::new("CAT", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(3, 0)]);
        assert!(!gap.is_straight_run());
        let bent = Word::new("CAT", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]);
        assert!(!bent.is_straight_run());
        let up = Word::new("AB", vec![Coord::new(4, 4), Coord::new(4, 3)]);
        assert!(up.is_straight_run());
    }

    #[test]
    fn rotation_matches_grid_rule() {
        let w = Word::new("AB", vec![Coord::new(0, 0), Coord::new(0, 1)]);
        let r = w.rotated(2);
        assert_eq!(r.coords, vec![Coord::new(0, 1), Coord::new(1, 1)]);
    }
}
