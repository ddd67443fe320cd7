pub mod action_links;
pub mod app;
pub mod background_grid;
pub mod feature_list;
pub mod heatmap_preview;
pub mod hero;
pub mod preview_card;
pub mod structured_data;
