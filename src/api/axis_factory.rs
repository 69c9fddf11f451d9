use tracing::debug;

use crate::core::{
    AxisScale, AxisType, ColumnType, Datum, Domain, DomainFunction, Extent, LabelFunction,
    LabelNode, LabelRect, LabelRotation, Orientation, ScaleKind, TickFormat, TickLayout,
    TickSizeInner, hide_overlapping_labels, infer_axis_type,
};
use crate::error::AxisResult;

use super::{AxisConfig, ChartSettings, ZoomTransform};

/// Tick geometry handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisComponent {
    /// Stock single-level ticks; sizes are left to the renderer.
    Standard,
    /// Grouped categorical ticks.
    Categorical(TickLayout),
}

impl AxisComponent {
    #[must_use]
    pub fn layout(&self) -> Option<&TickLayout> {
        match self {
            Self::Standard => None,
            Self::Categorical(layout) => Some(layout),
        }
    }

    #[must_use]
    pub fn tick_size_inner(&self) -> Option<TickSizeInner> {
        self.layout().map(TickLayout::tick_size_inner)
    }

    #[must_use]
    pub fn tick_size_outer(&self) -> Option<f64> {
        self.layout().map(TickLayout::tick_size_outer)
    }

    /// Label rotation for a level; vertical axes never rotate.
    #[must_use]
    pub fn rotation(&self, level: usize) -> LabelRotation {
        match self.layout() {
            Some(layout) if layout.orient == Orientation::Horizontal => layout
                .levels
                .get(level)
                .map_or(LabelRotation::None, |l| l.rotation),
            _ => LabelRotation::None,
        }
    }

    /// Per-level decoration run by the renderer once a level's labels are
    /// placed: hides colliding or off-screen labels, in order.
    ///
    /// Returns the number of hidden labels.
    pub fn decorate<L: LabelNode>(
        &self,
        level: usize,
        labels: &mut [L],
        visible_area: LabelRect,
    ) -> usize {
        match self {
            Self::Standard => 0,
            Self::Categorical(_) => {
                let rotated = self.rotation(level).is_rotated();
                hide_overlapping_labels(labels, rotated, visible_area)
            }
        }
    }
}

/// Everything a chart renderer needs to draw one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDescriptor {
    pub axis_type: AxisType,
    pub scale: ScaleKind,
    pub domain: Domain,
    /// Recomputes the domain over another (filtered, zoomed) dataset.
    pub domain_function: DomainFunction,
    pub label_function: LabelFunction,
    pub tick_format: TickFormat,
    pub component: AxisComponent,
    /// Pixels to reserve for the axis, when the layout knows it.
    pub size: Option<f64>,
    /// Configured column names, comma separated.
    pub label: String,
    /// Extent to thread into the next render's config.
    pub memo: Option<Extent>,
}

impl AxisDescriptor {
    /// Concrete scale over the pixel `range`.
    pub fn scale(&self, range: (f64, f64)) -> AxisResult<AxisScale> {
        self.scale.instantiate(&self.domain, range)
    }

    #[must_use]
    pub fn recompute_domain(&self, data: &[Datum]) -> Domain {
        self.domain_function.compute(data)
    }

    /// Continuous domain visible through `zoom` across `range`.
    ///
    /// `None` for categorical or undefined domains.
    pub fn rescaled_extent(
        &self,
        zoom: ZoomTransform,
        range: (f64, f64),
        orient: Orientation,
    ) -> AxisResult<Option<Extent>> {
        match self.domain {
            Domain::Continuous(extent) => zoom.rescale(extent, range, orient).map(Some),
            Domain::Categories(_) | Domain::Undefined => Ok(None),
        }
    }

    pub fn decorate<L: LabelNode>(
        &self,
        level: usize,
        labels: &mut [L],
        visible_area: LabelRect,
    ) -> usize {
        self.component.decorate(level, labels, visible_area)
    }
}

/// Builds an axis descriptor for `data`.
///
/// Fails only on configuration violations (see [`infer_axis_type`]); sparse
/// data always yields a descriptor, possibly with an empty or undefined
/// domain.
pub fn build_axis(
    settings: &ChartSettings,
    config: &AxisConfig,
    data: &[Datum],
) -> AxisResult<AxisDescriptor> {
    let columns = settings.columns(config.role);
    let axis_type = infer_axis_type(
        columns,
        config.role,
        config.exclude_type,
        config.setting_value.as_deref(),
    )?;

    let mut domain_function = DomainFunction::for_type(axis_type, config.value_names.clone())
        .with_orientation(config.orient)
        .with_include(config.include.clone())
        .with_symmetrical_about(config.symmetrical_about);
    if let Some(padding) = config.padding {
        domain_function = domain_function.with_padding(padding);
    }
    if let Some(pad) = config.pad {
        domain_function = domain_function.with_pad(pad);
    }

    let domain = widen_to_memo(domain_function.compute(data), config.memo);
    let memo = domain.extent();

    let component = match (&domain, axis_type) {
        (Domain::Categories(keys), AxisType::Ordinal) => {
            let multi_level = columns.len() > 1
                && columns
                    .iter()
                    .all(|c| c.column_type != ColumnType::Datetime);
            let axis_length = match config.orient {
                Orientation::Horizontal => settings.size.width,
                Orientation::Vertical => settings.size.height,
            };
            AxisComponent::Categorical(TickLayout::compute(
                keys,
                config.orient,
                f64::from(axis_length),
                multi_level,
            ))
        }
        _ => AxisComponent::Standard,
    };
    let size = component.layout().map(TickLayout::axis_size);

    let label = columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    debug!(
        role = %config.role,
        axis_type = %axis_type,
        domain_len = domain.categories().map_or(2, <[String]>::len),
        size = ?size,
        "built axis descriptor"
    );

    Ok(AxisDescriptor {
        axis_type,
        scale: ScaleKind::for_type(axis_type),
        tick_format: TickFormat::for_domain(axis_type, domain.extent()),
        label_function: LabelFunction::for_type(axis_type, &config.value_names),
        domain,
        domain_function,
        component,
        size,
        label,
        memo,
    })
}

/// Keeps a continuous domain from shrinking inside the previous render's
/// extent. An undefined domain falls back to the memo.
fn widen_to_memo(domain: Domain, memo: Option<Extent>) -> Domain {
    let Some(memo) = memo.filter(|m| m.is_finite()) else {
        return domain;
    };
    match domain {
        Domain::Continuous(extent) => Domain::Continuous(extent.union(memo)),
        Domain::Undefined => Domain::Continuous(memo),
        categories @ Domain::Categories(_) => categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_widens_but_never_narrows() {
        let domain = widen_to_memo(
            Domain::Continuous(Extent::new(2.0, 5.0)),
            Some(Extent::new(0.0, 4.0)),
        );
        assert_eq!(domain, Domain::Continuous(Extent::new(0.0, 5.0)));
    }

    #[test]
    fn memo_rescues_undefined_domain() {
        let domain = widen_to_memo(Domain::Undefined, Some(Extent::new(1.0, 3.0)));
        assert_eq!(domain, Domain::Continuous(Extent::new(1.0, 3.0)));
    }
}
