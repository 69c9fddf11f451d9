//! Multi-level categorical tick layout.
//!
//! Composite keys such as `"2024|Q1|Jan"` are shown as stacked label levels.
//! The level nearest the axis line holds the last key segment; each further
//! level holds the preceding segment, with runs of equal labels merged.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{COMPOSITE_KEY_DELIMITER, Orientation};

/// Horizontal space kept free of labels when choosing a rotation.
pub const AXIS_RESERVED_WIDTH_PX: f64 = 100.0;
/// Space one label takes along a horizontal axis once rotated.
pub const ROTATED_LABEL_STEP_PX: f64 = 16.0;
/// Level size when labels stay horizontal.
pub const FLAT_LEVEL_SIZE_PX: f64 = 25.0;
/// Extra space a composite axis reserves beyond its levels.
pub const AXIS_SIZE_MARGIN_PX: f64 = 10.0;

/// Estimated pixel width of one glyph.
const GLYPH_WIDTH_PX: f64 = 6.0;
/// Estimated pixel height of a label rotated to vertical, per glyph.
const VERTICAL_GLYPH_PX: f64 = 6.62;
/// Estimated height of a diagonal label, per glyph.
const DIAGONAL_GLYPH_PX: f64 = 4.0;

/// Tick label rotation, in the three supported steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelRotation {
    #[default]
    None,
    Diagonal,
    Vertical,
}

impl LabelRotation {
    #[must_use]
    pub const fn degrees(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Diagonal => 45.0,
            Self::Vertical => 90.0,
        }
    }

    #[must_use]
    pub const fn is_rotated(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A run of sibling keys sharing one label at a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickGroup {
    pub text: String,
    /// Full composite keys covered, in domain order.
    pub domain: Vec<String>,
}

/// One label level with its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLevel {
    pub groups: Vec<TickGroup>,
    /// Thickness of the level in pixels, perpendicular to the axis.
    pub size: f64,
    /// Distance from the axis line to where this level starts.
    pub offset: f64,
    pub rotation: LabelRotation,
}

impl TickLevel {
    #[must_use]
    pub fn max_label_len(&self) -> usize {
        max_label_len(&self.groups)
    }
}

/// Inner tick length: one per level for composite axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickSizeInner {
    Single(f64),
    PerLevel(Vec<f64>),
}

/// Label geometry for a categorical axis, built fresh per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLayout {
    /// Ordered from the axis line outwards.
    pub levels: Vec<TickLevel>,
    pub multi_level: bool,
    pub orient: Orientation,
}

impl TickLayout {
    /// Lays out `domain` for an axis `axis_length` pixels long.
    ///
    /// Only horizontal axes use the length, to pick a label rotation.
    /// With `multi_level` each key segment gets its own level; otherwise the
    /// full keys form a single level.
    #[must_use]
    pub fn compute(
        domain: &[String],
        orient: Orientation,
        axis_length: f64,
        multi_level: bool,
    ) -> Self {
        let grouped = if multi_level {
            group_ticks(domain)
        } else {
            vec![single_level_groups(domain)]
        };

        let mut offset = 0.0;
        let levels = grouped
            .into_iter()
            .map(|groups| {
                let (size, rotation) = level_geometry(&groups, orient, axis_length);
                let level = TickLevel {
                    groups,
                    size,
                    offset,
                    rotation,
                };
                offset += size;
                level
            })
            .collect();

        Self {
            levels,
            multi_level,
            orient,
        }
    }

    #[must_use]
    pub fn tick_size_inner(&self) -> TickSizeInner {
        if self.multi_level {
            TickSizeInner::PerLevel(self.levels.iter().map(|l| l.size).collect())
        } else {
            TickSizeInner::Single(self.levels.first().map_or(0.0, |l| l.size))
        }
    }

    /// Sum of all level sizes, enough room for the deepest label.
    #[must_use]
    pub fn tick_size_outer(&self) -> f64 {
        self.levels.iter().map(|l| l.size).sum()
    }

    /// Pixel thickness to reserve for the axis.
    #[must_use]
    pub fn axis_size(&self) -> f64 {
        self.tick_size_outer() + AXIS_SIZE_MARGIN_PX
    }

    /// Level nearest the axis line (last key segment).
    #[must_use]
    pub fn inner_level(&self) -> Option<&TickLevel> {
        self.levels.first()
    }

    /// Level furthest from the axis line (first key segment).
    #[must_use]
    pub fn outer_level(&self) -> Option<&TickLevel> {
        self.levels.last()
    }
}

/// Groups composite keys into label levels, nearest-to-axis level first.
///
/// Consecutive keys with an equal segment at a level share one group there,
/// whatever their enclosing segments.
#[must_use]
pub fn group_ticks(domain: &[String]) -> Vec<Vec<TickGroup>> {
    let mut by_segment: Vec<Vec<TickGroup>> = Vec::new();
    let mut previous: SmallVec<[&str; 4]> = SmallVec::new();

    for key in domain {
        let segments: SmallVec<[&str; 4]> = key.split(COMPOSITE_KEY_DELIMITER).collect();
        for (depth, segment) in segments.iter().enumerate() {
            if by_segment.len() <= depth {
                by_segment.push(Vec::new());
            }
            let level = &mut by_segment[depth];
            if previous.get(depth) == Some(segment) {
                if let Some(group) = level.last_mut() {
                    group.domain.push(key.clone());
                    continue;
                }
            }
            level.push(TickGroup {
                text: (*segment).to_owned(),
                domain: vec![key.clone()],
            });
        }
        previous = segments;
    }

    by_segment.reverse();
    by_segment
}

fn single_level_groups(domain: &[String]) -> Vec<TickGroup> {
    domain
        .iter()
        .map(|key| TickGroup {
            text: key.clone(),
            domain: vec![key.clone()],
        })
        .collect()
}

fn max_label_len(groups: &[TickGroup]) -> usize {
    groups
        .iter()
        .map(|g| g.text.chars().count())
        .max()
        .unwrap_or(0)
}

/// Size and rotation of a level.
///
/// Horizontal axes keep labels flat when they all fit side by side, tilt them
/// to 45° when rotated labels fit, and stand them up at 90° otherwise.
/// Vertical axes never rotate and size to the longest label.
#[must_use]
pub fn level_geometry(
    groups: &[TickGroup],
    orient: Orientation,
    axis_length: f64,
) -> (f64, LabelRotation) {
    let max_len = max_label_len(groups) as f64;
    let vertical_size = max_len * VERTICAL_GLYPH_PX + AXIS_SIZE_MARGIN_PX;

    match orient {
        Orientation::Vertical => (vertical_size, LabelRotation::None),
        Orientation::Horizontal => {
            let count = groups.len() as f64;
            let budget = axis_length - AXIS_RESERVED_WIDTH_PX;
            if count * (max_len * GLYPH_WIDTH_PX + AXIS_SIZE_MARGIN_PX) <= budget {
                (FLAT_LEVEL_SIZE_PX, LabelRotation::None)
            } else if count * ROTATED_LABEL_STEP_PX <= budget {
                (max_len * DIAGONAL_GLYPH_PX + 20.0, LabelRotation::Diagonal)
            } else {
                (vertical_size, LabelRotation::Vertical)
            }
        }
    }
}
