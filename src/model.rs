//! Core data models for the GitWidget landing page.
//! Everything here is plain data: sizes, palettes, links and the transient
//! pointer/viewport state the background grid reacts to.

/// Background glow grid dimensions.
pub const GLOW_GRID_COLS: u32 = 15;
pub const GLOW_GRID_ROWS: u32 = 10;
/// Distance (px) past which the pointer no longer lights a cell.
pub const MAX_INFLUENCE_PX: f64 = 200.0;
/// Cells brighter than this are drawn slightly larger.
pub const ENLARGE_THRESHOLD: f64 = 0.7;
pub const ENLARGED_SCALE: f64 = 1.1;

/// Preview heatmap: 15 weeks of 7 days.
pub const HEATMAP_COLS: u32 = 15;
pub const HEATMAP_ROWS: u32 = 7;
pub const CLUSTER_BOOST: f64 = 2.5;
pub const WEEKEND_DAMPEN: f64 = 0.2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Translucency tiers for the background glow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowTier {
    Transparent,
    Faint,
    Soft,
    Medium,
    Strong,
}

impl GlowTier {
    pub const LIT: [GlowTier; 4] = [
        GlowTier::Faint,
        GlowTier::Soft,
        GlowTier::Medium,
        GlowTier::Strong,
    ];

    pub fn color(self) -> &'static str {
        match self {
            GlowTier::Transparent => "transparent",
            GlowTier::Faint => "rgba(35, 134, 54, 0.1)",
            GlowTier::Soft => "rgba(35, 134, 54, 0.3)",
            GlowTier::Medium => "rgba(35, 134, 54, 0.5)",
            GlowTier::Strong => "rgba(35, 134, 54, 0.7)",
        }
    }
}

/// GitHub's dark-theme contribution levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContributionTier {
    Level0,
    Level1,
    Level2,
    Level3,
    Level4,
}

impl ContributionTier {
    pub fn color(self) -> &'static str {
        match self {
            ContributionTier::Level0 => "#161b22",
            ContributionTier::Level1 => "#0e4429",
            ContributionTier::Level2 => "#006d32",
            ContributionTier::Level3 => "#26a641",
            ContributionTier::Level4 => "#39d353",
        }
    }
}

/// Outbound links. Opaque; never parsed.
pub mod links {
    pub const SITE_URL: &str = "https://gitwidget.vercel.app";
    pub const DOWNLOAD_URL: &str =
        "https://github.com/Fahad-Dezloper/gitwidget/releases/latest";
    pub const REPOSITORY_URL: &str = "https://github.com/Fahad-Dezloper/gitwidget";
    pub const SOCIAL_URL: &str = "https://twitter.com/FahadDezloper";
    pub const AUTHOR_NAME: &str = "Fahad Dezloper";
    pub const AUTHOR_URL: &str = "https://github.com/Fahad-Dezloper";
}
