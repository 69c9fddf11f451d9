use tracing::trace;

use crate::core::{Domain, Extent};

fn is_matchable(extent: Extent) -> bool {
    extent.is_finite() && extent.min != extent.max
}

/// Fraction of the way up the domain where zero sits.
#[must_use]
pub fn origin_ratio(extent: Extent) -> f64 {
    (0.0 - extent.min) / (extent.max - extent.min)
}

/// Lowers or raises the lower bound of whichever extent has the smaller zero
/// ratio so zero lands at the same fractional height on both axes.
///
/// Degenerate extents are left alone, as is the case where the larger ratio
/// puts zero at (or past) the top of the axis. Returns whether an extent
/// changed.
pub fn match_extent_origins(a: &mut Extent, b: &mut Extent) -> bool {
    if !is_matchable(*a) || !is_matchable(*b) {
        trace!("skipping origin alignment for degenerate domain");
        return false;
    }

    let ratio_a = origin_ratio(*a);
    let ratio_b = origin_ratio(*b);
    let (target, ratio) = if ratio_a > ratio_b {
        (b, ratio_a)
    } else {
        (a, ratio_b)
    };
    if ratio >= 1.0 {
        trace!(ratio, "skipping origin alignment with zero at domain top");
        return false;
    }

    let lower = ratio * target.max / (ratio - 1.0);
    trace!(from = target.min, to = lower, ratio, "aligned domain origin");
    target.min = lower;
    true
}

/// [`match_extent_origins`] over axis domains; non-continuous domains are
/// skipped.
pub fn domain_match_origins(a: &mut Domain, b: &mut Domain) -> bool {
    match (a, b) {
        (Domain::Continuous(a), Domain::Continuous(b)) => match_extent_origins(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_bounds_are_skipped() {
        let mut a = Extent::new(1.0, 1.0);
        let mut b = Extent::new(-1.0, 1.0);
        assert!(!match_extent_origins(&mut a, &mut b));
        assert_eq!(b, Extent::new(-1.0, 1.0));
    }

    #[test]
    fn categorical_domains_are_skipped() {
        let mut a = Domain::Categories(vec!["a".into()]);
        let mut b = Domain::Continuous(Extent::new(-1.0, 1.0));
        assert!(!domain_match_origins(&mut a, &mut b));
    }
}
