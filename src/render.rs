use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use rayon::prelude::*;

use crate::Puzzle;
use crate::error::{GenError, Result};
use crate::grid::{Direction, Grid};
use crate::rng::splitmix64;

const FILLER: [u8; 4] = [58, 60, 66, 255];
const GRID_LINE: [u8; 4] = [24, 25, 28, 255];
const HORIZONTAL: [u8; 4] = [70, 140, 220, 255];
const VERTICAL: [u8; 4] = [220, 120, 60, 255];

/// An RGBA image buffer with its pixel dimensions.
pub struct Image {
    pub rgba: Vec<u8>,
    pub w: usize,
    pub h: usize,
}

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// Distinct bright color per word index.
fn word_color(i: usize) -> [u8; 4] {
    let h = splitmix64(i as u64 * 7 + 123);
    [
        (h & 0xFF) as u8 | 80,
        ((h >> 8) & 0xFF) as u8 | 80,
        ((h >> 16) & 0xFF) as u8 | 80,
        255,
    ]
}

/// Paint one `cell_px` square per grid cell. `color(x, y)` picks the fill;
/// the last pixel row and column of each square are drawn as grid lines.
fn paint_cells(grid: &Grid, cell_px: usize, color: impl Fn(usize, usize) -> [u8; 4] + Sync) -> Image {
    let cell_px = cell_px.max(2);
    let w = grid.width() * cell_px;
    let h = grid.height() * cell_px;
    let mut rgba = vec![0u8; w * h * 4];
    if w == 0 {
        return Image { rgba, w, h };
    }

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(py, row)| {
        let cy = py / cell_px;
        let edge_y = py % cell_px == cell_px - 1;
        for px in 0..w {
            let cx = px / cell_px;
            let edge_x = px % cell_px == cell_px - 1;
            let c = if edge_x || edge_y {
                GRID_LINE
            } else {
                color(cx, cy)
            };
            row[px * 4..px * 4 + 4].copy_from_slice(&c);
        }
    });

    Image { rgba, w, h }
}

/// Answer key: word cells tinted per word (a crossing cell shows the later
/// word), filler cells dark.
pub fn render_solution(puzzle: &Puzzle, cell_px: usize) -> Image {
    let gw = puzzle.grid.width();
    let mut owner: Vec<Option<usize>> = vec![None; gw * puzzle.grid.height()];
    for (i, word) in puzzle.words.iter().enumerate() {
        for c in &word.coords {
            if c.x >= 0 && c.y >= 0 && (c.x as usize) < gw {
                if let Some(slot) = owner.get_mut(c.y as usize * gw + c.x as usize) {
                    *slot = Some(i);
                }
            }
        }
    }

    paint_cells(&puzzle.grid, cell_px, |x, y| match owner[y * gw + x] {
        Some(i) => word_color(i),
        None => FILLER,
    })
}

/// Diagnostic: cells by direction tag of the word that claimed them.
/// Horizontal = blue, vertical = orange, filler = dark.
pub fn render_directions(grid: &Grid) -> Image {
    paint_cells(grid, 8, |x, y| {
        match grid.get_cell(x as i32, y as i32).and_then(|c| c.direction) {
            Some(Direction::Left) | Some(Direction::Right) => HORIZONTAL,
            // Up and Down get a lighter shade so reversed runs stand out.
            Some(Direction::Up) => lerp_color(VERTICAL, [255, 255, 255, 255], 0.3),
            Some(Direction::Down) => VERTICAL,
            None => FILLER,
        }
    })
}

pub fn encode_png(img: &Image) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(&img.rgba, img.w as u32, img.h as u32, image::ExtendedColorType::Rgba8)
        .map_err(|e| GenError::Image(e.to_string()))?;
    Ok(buf)
}
