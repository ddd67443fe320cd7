// Pointer-reactive background grid: per-cell glow from pointer distance.
use crate::model::{
    ENLARGE_THRESHOLD, ENLARGED_SCALE, GLOW_GRID_COLS, GLOW_GRID_ROWS, GlowTier, MAX_INFLUENCE_PX,
    PointerPosition, Viewport,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowCell {
    pub row: u32,
    pub col: u32,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub distance: f64,
    pub intensity: f64,
    pub tier: GlowTier,
    pub enlarged: bool,
}

impl GlowCell {
    pub fn scale(&self) -> f64 {
        if self.enlarged { ENLARGED_SCALE } else { 1.0 }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Screen-space anchor of a cell: a sixth of the way across, a ninth down.
pub fn cell_anchor(viewport: Viewport, row: u32, col: u32) -> (f64, f64) {
    let cell_w = sanitize(viewport.width) / GLOW_GRID_COLS as f64;
    let cell_h = sanitize(viewport.height) / GLOW_GRID_ROWS as f64;
    (
        col as f64 * cell_w + cell_w / 6.0,
        row as f64 * cell_h + cell_h / 9.0,
    )
}

pub fn intensity_at(distance: f64) -> f64 {
    if !distance.is_finite() {
        return 0.0;
    }
    (1.0 - distance / MAX_INFLUENCE_PX).clamp(0.0, 1.0)
}

impl GlowTier {
    pub fn from_intensity(intensity: f64) -> GlowTier {
        if intensity.is_nan() || intensity <= 0.0 {
            return GlowTier::Transparent;
        }
        let top = Self::LIT.len() - 1;
        let idx = ((intensity * top as f64).floor() as usize).min(top);
        Self::LIT[idx]
    }
}

pub fn glow_cell(viewport: Viewport, pointer: PointerPosition, row: u32, col: u32) -> GlowCell {
    let (anchor_x, anchor_y) = cell_anchor(viewport, row, col);
    let distance = (pointer.x - anchor_x).hypot(pointer.y - anchor_y);
    let intensity = intensity_at(distance);
    GlowCell {
        row,
        col,
        anchor_x,
        anchor_y,
        distance,
        intensity,
        tier: GlowTier::from_intensity(intensity),
        enlarged: intensity > ENLARGE_THRESHOLD,
    }
}

fn inert_cell(viewport: Viewport, row: u32, col: u32) -> GlowCell {
    let (anchor_x, anchor_y) = cell_anchor(viewport, row, col);
    GlowCell {
        row,
        col,
        anchor_x,
        anchor_y,
        distance: f64::INFINITY,
        intensity: 0.0,
        tier: GlowTier::Transparent,
        enlarged: false,
    }
}

/// All cells, row-major. Without a pointer sample, or with a zero-area
/// viewport, every cell is transparent.
pub fn glow_cells(viewport: Viewport, pointer: Option<PointerPosition>) -> Vec<GlowCell> {
    let live = sanitize(viewport.width) > 0.0 && sanitize(viewport.height) > 0.0;
    let mut cells = Vec::with_capacity((GLOW_GRID_ROWS * GLOW_GRID_COLS) as usize);
    for row in 0..GLOW_GRID_ROWS {
        for col in 0..GLOW_GRID_COLS {
            cells.push(match pointer {
                Some(p) if live => glow_cell(viewport, p, row, col),
                _ => inert_cell(viewport, row, col),
            });
        }
    }
    cells
}
