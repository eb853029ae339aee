use crate::config::Params;
use crate::grid::{Coord, Direction, Grid};
use crate::rng::Rng;

/// Shape of the grid relative to the configured aspect thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    Wide,
    Narrow,
    Square,
}

pub fn classify(width: usize, height: usize, params: &Params) -> Balance {
    let aspect = width as f64 / height.max(1) as f64;
    if aspect > params.aspect_wide {
        Balance::Wide
    } else if aspect < params.aspect_narrow {
        Balance::Narrow
    } else {
        Balance::Square
    }
}

/// Anchor and direction for a word placed away from existing letters.
///
/// The anchor is uniform over the bounding box shrunk by `edge_buffer` of
/// its width and height on each side. The grid must not be empty.
pub fn free_anchor(grid: &Grid, rng: &mut Rng, params: &Params) -> (Coord, Direction) {
    let Some(b) = grid.bounds() else {
        return (Coord::new(0, 0), Direction::ALL[rng.index(Direction::ALL.len())]);
    };
    let inset_x = (b.width() as f64 * params.edge_buffer).floor() as i32;
    let inset_y = (b.height() as f64 * params.edge_buffer).floor() as i32;
    let (min_x, max_x) = (b.min_x + inset_x, b.max_x - inset_x);
    let (min_y, max_y) = (b.min_y + inset_y, b.max_y - inset_y);

    // Every arm samples the full interior. Biasing the short axis is not
    // implemented and would change layouts for existing seeds.
    let balance = classify(b.width(), b.height(), params);
    let anchor = match balance {
        Balance::Wide => Coord::new(rng.range_i32(min_x, max_x), rng.range_i32(min_y, max_y)),
        Balance::Narrow => Coord::new(rng.range_i32(min_x, max_x), rng.range_i32(min_y, max_y)),
        Balance::Square => Coord::new(rng.range_i32(min_x, max_x), rng.range_i32(min_y, max_y)),
    };
    log::trace!("free anchor {anchor:?} in {balance:?} grid {}x{}", b.width(), b.height());

    let dir = Direction::ALL[rng.index(Direction::ALL.len())];
    (anchor, dir)
}
