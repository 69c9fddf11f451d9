use tracing::{debug, trace};

use crate::core::{
    Datum, Domain, SplitData, SplitStrategy, TickFormat, domain_match_origins, split, split_with,
};
use crate::error::AxisResult;

use super::{AxisConfig, AxisDescriptor, AxisMemo, ChartSettings, build_axis};

/// Primary and optional alternate main axes for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitMainAxes {
    pub have_split: bool,
    pub primary: AxisDescriptor,
    /// Present only when some measure sits on the alternate axis.
    pub alternate: Option<AxisDescriptor>,
    /// Data plotted against `primary`.
    pub data: Vec<Datum>,
    /// Data plotted against `alternate`.
    pub alt_data: Option<Vec<Datum>>,
}

impl SplitMainAxes {
    /// Main-axis memo extents to store back into the settings.
    #[must_use]
    pub fn memo(&self, previous: AxisMemo) -> AxisMemo {
        AxisMemo {
            main: self.primary.memo,
            alt_main: self.alternate.as_ref().and_then(|alt| alt.memo),
            ..previous
        }
    }
}

/// Splits `data` across two main axes with `strategy` and builds both.
///
/// When both resulting domains are continuous their zero lines are aligned.
pub fn build_split_main_axes(
    settings: &ChartSettings,
    primary: &AxisConfig,
    alternate: &AxisConfig,
    data: &[Datum],
    strategy: &SplitStrategy,
) -> AxisResult<SplitMainAxes> {
    let split_data = split(
        &settings.split_assignment(),
        &settings.main_values,
        data,
        strategy,
    );
    assemble(settings, primary, alternate, split_data)
}

/// [`build_split_main_axes`] with a caller-provided partition function.
pub fn build_split_main_axes_with<F>(
    settings: &ChartSettings,
    primary: &AxisConfig,
    alternate: &AxisConfig,
    data: &[Datum],
    split_fn: F,
) -> AxisResult<SplitMainAxes>
where
    F: Fn(&[Datum], &dyn Fn(&str) -> bool) -> Vec<Datum>,
{
    let split_data = split_with(
        &settings.split_assignment(),
        &settings.main_values,
        data,
        split_fn,
    );
    assemble(settings, primary, alternate, split_data)
}

fn assemble(
    settings: &ChartSettings,
    primary_config: &AxisConfig,
    alternate_config: &AxisConfig,
    split_data: SplitData,
) -> AxisResult<SplitMainAxes> {
    let SplitData {
        have_split,
        data,
        alt_data,
    } = split_data;

    let mut primary = build_axis(settings, primary_config, &data)?;
    let mut alternate = alt_data
        .as_deref()
        .map(|alt| build_axis(settings, alternate_config, alt))
        .transpose()?;

    if let Some(alt) = alternate.as_mut() {
        if domain_match_origins(&mut primary.domain, &mut alt.domain) {
            refresh_after_alignment(&mut primary);
            refresh_after_alignment(alt);
        } else {
            trace!("main axis domains left unaligned");
        }
    }

    debug!(
        have_split,
        alternate = alternate.is_some(),
        "built split main axes"
    );

    Ok(SplitMainAxes {
        have_split,
        primary,
        alternate,
        data,
        alt_data,
    })
}

fn refresh_after_alignment(axis: &mut AxisDescriptor) {
    if let Domain::Continuous(extent) = axis.domain {
        axis.memo = Some(extent);
        axis.tick_format = TickFormat::for_domain(axis.axis_type, Some(extent));
    }
}
