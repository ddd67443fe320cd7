pub mod glow_grid;
pub mod heatmap;
pub mod random;

pub use glow_grid::glow_cells;
pub use heatmap::Heatmap;
pub use random::JsRandom;
