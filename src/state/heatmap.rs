//! Synthetic contribution heatmap for the live preview card.
//!
//! Cells get a uniform random base intensity, boosted inside a few fixed
//! "burst" rectangles and dampened on weekend rows, then bucketed into the
//! five GitHub contribution colors. Generated once per mount.

use std::ops::RangeInclusive;

use super::random::RandomSource;
use crate::model::{CLUSTER_BOOST, ContributionTier, HEATMAP_COLS, HEATMAP_ROWS, WEEKEND_DAMPEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRegion {
    pub cols: RangeInclusive<u32>,
    pub rows: RangeInclusive<u32>,
}

impl ClusterRegion {
    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.cols.contains(&col) && self.rows.contains(&row)
    }
}

pub fn clusters() -> [ClusterRegion; 3] {
    [
        ClusterRegion { cols: 2..=4, rows: 1..=5 },
        ClusterRegion { cols: 8..=11, rows: 2..=4 },
        ClusterRegion { cols: 13..=14, rows: 0..=6 },
    ]
}

pub fn in_cluster(row: u32, col: u32) -> bool {
    clusters().iter().any(|c| c.contains(row, col))
}

/// Sunday and Saturday rows.
pub fn is_weekend(row: u32) -> bool {
    row == 0 || row == HEATMAP_ROWS - 1
}

pub fn shape_intensity(base: f64, row: u32, col: u32) -> f64 {
    if in_cluster(row, col) {
        base * CLUSTER_BOOST
    } else if is_weekend(row) {
        base * WEEKEND_DAMPEN
    } else {
        base
    }
}

impl ContributionTier {
    pub fn from_intensity(intensity: f64) -> ContributionTier {
        if intensity > 0.9 {
            ContributionTier::Level4
        } else if intensity > 0.7 {
            ContributionTier::Level3
        } else if intensity > 0.5 {
            ContributionTier::Level2
        } else if intensity > 0.25 {
            ContributionTier::Level1
        } else {
            ContributionTier::Level0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapCell {
    pub row: u32,
    pub col: u32,
    pub intensity: f64,
    pub tier: ContributionTier,
}

impl HeatmapCell {
    /// Seconds before this cell pops in; sweeps left to right by week.
    pub fn reveal_delay(&self) -> f64 {
        self.col as f64 * 0.02 + self.row as f64 * 0.003
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    /// Column-major: all seven days of week 0, then week 1, ...
    pub cells: Vec<HeatmapCell>,
}

impl Heatmap {
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity((HEATMAP_COLS * HEATMAP_ROWS) as usize);
        for col in 0..HEATMAP_COLS {
            for row in 0..HEATMAP_ROWS {
                let intensity = shape_intensity(rng.next_unit(), row, col);
                cells.push(HeatmapCell {
                    row,
                    col,
                    intensity,
                    tier: ContributionTier::from_intensity(intensity),
                });
            }
        }
        Self { cells }
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&HeatmapCell> {
        if row >= HEATMAP_ROWS || col >= HEATMAP_COLS {
            return None;
        }
        self.cells.get((col * HEATMAP_ROWS + row) as usize)
    }

    #[cfg(test)]
    pub fn tier_counts(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for c in &self.cells {
            counts[c.tier as usize] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::random::{Scripted, Seeded};

    #[test]
    fn tier_thresholds() {
        assert_eq!(ContributionTier::from_intensity(0.95), ContributionTier::Level4);
        assert_eq!(ContributionTier::from_intensity(0.9), ContributionTier::Level3);
        assert_eq!(ContributionTier::from_intensity(0.6), ContributionTier::Level2);
        assert_eq!(ContributionTier::from_intensity(0.3), ContributionTier::Level1);
        assert_eq!(ContributionTier::from_intensity(0.25), ContributionTier::Level0);
        assert_eq!(ContributionTier::from_intensity(0.1), ContributionTier::Level0);
        assert_eq!(ContributionTier::from_intensity(2.5), ContributionTier::Level4);
        assert_eq!(ContributionTier::Level4.color(), "#39d353");
        assert_eq!(ContributionTier::Level0.color(), "#161b22");
    }

    #[test]
    fn cluster_membership() {
        assert!(in_cluster(1, 2));
        assert!(in_cluster(5, 4));
        assert!(in_cluster(3, 10));
        assert!(in_cluster(0, 13));
        assert!(in_cluster(6, 14));
        assert!(!in_cluster(0, 2));
        assert!(!in_cluster(3, 7));
        assert!(!in_cluster(1, 12));
    }

    #[test]
    fn scripted_draws_give_exact_tiers() {
        let map = Heatmap::generate(&mut Scripted::new(vec![0.3]));
        assert_eq!(map.cells.len(), (HEATMAP_COLS * HEATMAP_ROWS) as usize);
        // plain weekday
        assert_eq!(map.cell(3, 0).map(|c| c.tier), Some(ContributionTier::Level1));
        // weekend outside clusters
        let sunday = map.cell(0, 0).copied();
        assert_eq!(sunday.map(|c| c.tier), Some(ContributionTier::Level0));
        assert!(sunday.is_some_and(|c| (c.intensity - 0.06).abs() < 1e-12));
        // cluster boost wins over weekend dampening
        assert_eq!(map.cell(0, 13).map(|c| c.tier), Some(ContributionTier::Level3));
        assert_eq!(map.cell(3, 9).map(|c| c.tier), Some(ContributionTier::Level3));
    }

    #[test]
    fn draws_are_consumed_column_major() {
        let mut values = vec![0.0; (HEATMAP_COLS * HEATMAP_ROWS) as usize];
        values[1] = 0.95; // week 0, Monday
        let map = Heatmap::generate(&mut Scripted::new(values));
        let cell = map.cell(1, 0).copied();
        assert_eq!(cell.map(|c| c.tier), Some(ContributionTier::Level4));
        assert_eq!(map.tier_counts()[ContributionTier::Level4 as usize], 1);
        assert!(map.cell(HEATMAP_ROWS, 0).is_none());
    }

    #[test]
    fn clusters_brighter_and_weekends_dimmer_on_average() {
        let mut rng = Seeded::new(7);
        let (mut cluster, mut weekend, mut plain) = ((0.0, 0), (0.0, 0), (0.0, 0));
        for _ in 0..1000 {
            let map = Heatmap::generate(&mut rng);
            for c in &map.cells {
                let bucket = if in_cluster(c.row, c.col) {
                    &mut cluster
                } else if is_weekend(c.row) {
                    &mut weekend
                } else {
                    &mut plain
                };
                bucket.0 += c.intensity;
                bucket.1 += 1;
            }
        }
        let mean = |b: (f64, i32)| b.0 / b.1 as f64;
        assert!(mean(cluster) > mean(plain));
        assert!(mean(weekend) < mean(plain));
    }

    #[test]
    fn same_seed_same_pattern() {
        let a = Heatmap::generate(&mut Seeded::new(42));
        let b = Heatmap::generate(&mut Seeded::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn reveal_sweeps_by_week() {
        let map = Heatmap::generate(&mut Scripted::new(vec![0.5]));
        let first = map.cell(6, 0).map(|c| c.reveal_delay()).unwrap_or_default();
        let later = map.cell(0, 1).map(|c| c.reveal_delay()).unwrap_or_default();
        assert!(first < later);
    }
}
