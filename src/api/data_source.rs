use indexmap::IndexMap;

use crate::core::{AxisId, Domain, SeriesTarget, TickSet, TickValue};
use crate::error::AxisResult;

/// Narrow query interface the axis core uses to read chart data.
///
/// The chart owns both its data and the axis facade; the facade only sees
/// data through this trait, per call.
pub trait AxisDataSource {
    fn targets(&self) -> &[SeriesTarget];

    fn visible_targets(&self) -> Vec<&SeriesTarget> {
        self.targets().iter().filter(|target| !target.hidden).collect()
    }

    fn x_domain(&self, targets: &[&SeriesTarget]) -> Option<Domain>;

    /// Largest x over every loaded series.
    fn x_domain_max(&self) -> Option<f64> {
        let all: Vec<&SeriesTarget> = self.targets().iter().collect();
        self.x_domain(&all).map(Domain::hi)
    }

    /// Value extent of the series plotted against `id`, restricted to
    /// `x_window` when given.
    fn y_domain(
        &self,
        targets: &[&SeriesTarget],
        id: AxisId,
        x_window: Option<Domain>,
    ) -> Option<Domain>;

    fn category_name(&self, index: usize) -> Option<String>;

    /// Category names in index order.
    fn categories(&self) -> Vec<String> {
        (0..).map_while(|index| self.category_name(index)).collect()
    }

    /// Pie-like charts draw no axes.
    fn has_arc_type(&self) -> bool {
        false
    }
}

/// In-memory [`AxisDataSource`] over a list of series.
#[derive(Debug, Clone, Default)]
pub struct SeriesData {
    targets: Vec<SeriesTarget>,
    categories: Vec<String>,
    data_axes: IndexMap<String, AxisId>,
    arc_type: bool,
}

impl SeriesData {
    #[must_use]
    pub fn new(targets: Vec<SeriesTarget>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_data_axes(mut self, data_axes: IndexMap<String, AxisId>) -> Self {
        self.data_axes = data_axes;
        self
    }

    #[must_use]
    pub fn with_arc_type(mut self, arc_type: bool) -> Self {
        self.arc_type = arc_type;
        self
    }

    pub fn set_targets(&mut self, targets: Vec<SeriesTarget>) {
        self.targets = targets;
    }

    pub fn targets_mut(&mut self) -> &mut Vec<SeriesTarget> {
        &mut self.targets
    }

    fn axis_of(&self, target: &SeriesTarget) -> AxisId {
        self.data_axes
            .get(&target.id)
            .copied()
            .unwrap_or(AxisId::Y)
    }
}

impl AxisDataSource for SeriesData {
    fn targets(&self) -> &[SeriesTarget] {
        &self.targets
    }

    fn x_domain(&self, targets: &[&SeriesTarget]) -> Option<Domain> {
        extent(
            targets
                .iter()
                .flat_map(|target| target.values.iter().map(|point| point.x)),
        )
    }

    fn y_domain(
        &self,
        targets: &[&SeriesTarget],
        id: AxisId,
        x_window: Option<Domain>,
    ) -> Option<Domain> {
        extent(
            targets
                .iter()
                .filter(|target| self.axis_of(target) == id)
                .flat_map(|target| target.values.iter())
                .filter(|point| {
                    x_window.is_none_or(|window| point.x >= window.lo() && point.x <= window.hi())
                })
                .map(|point| point.y),
        )
    }

    fn category_name(&self, index: usize) -> Option<String> {
        self.categories.get(index).cloned()
    }

    fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    fn has_arc_type(&self) -> bool {
        self.arc_type
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<Domain> {
    values
        .filter(|value| value.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, value| match acc {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
        .map(Domain::from)
}

/// Sorted, de-duplicated x values of `targets`.
///
/// Time-series x values are epoch milliseconds and come back as instants.
pub fn unique_xs(targets: &[&SeriesTarget], is_time_series: bool) -> AxisResult<TickSet> {
    let mut xs: Vec<f64> = targets
        .iter()
        .flat_map(|target| target.values.iter().map(|point| point.x))
        .filter(|x| x.is_finite())
        .collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();

    xs.into_iter()
        .map(|x| {
            if is_time_series {
                TickValue::time_from_millis(x)
            } else {
                Ok(TickValue::Number(x))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::{AxisDataSource, SeriesData, unique_xs};
    use crate::core::{AxisId, DataPoint, Domain, SeriesTarget, TickValue};

    fn series(id: &str, points: &[(f64, f64)]) -> SeriesTarget {
        SeriesTarget::new(
            id,
            points.iter().map(|(x, y)| DataPoint::new(*x, *y)).collect(),
        )
    }

    #[test]
    fn hidden_series_are_not_visible() {
        let data = SeriesData::new(vec![
            series("a", &[(0.0, 1.0)]),
            series("b", &[(1.0, 2.0)]).hidden(true),
        ]);
        let visible = data.visible_targets();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a");
    }

    #[test]
    fn y_domain_only_reads_series_of_that_axis() {
        let mut axes = IndexMap::new();
        axes.insert("b".to_owned(), AxisId::Y2);
        let data = SeriesData::new(vec![
            series("a", &[(0.0, 1.0), (5.0, 4.0)]),
            series("b", &[(0.0, 100.0), (5.0, 300.0)]),
        ])
        .with_data_axes(axes);
        let visible = data.visible_targets();

        assert_eq!(
            data.y_domain(&visible, AxisId::Y, None),
            Some(Domain::new(1.0, 4.0))
        );
        assert_eq!(
            data.y_domain(&visible, AxisId::Y2, Some(Domain::new(0.0, 1.0))),
            Some(Domain::new(100.0, 100.0))
        );
    }

    #[test]
    fn unique_xs_sorts_and_dedups() {
        let a = series("a", &[(3.0, 0.0), (1.0, 0.0)]);
        let b = series("b", &[(1.0, 0.0), (2.0, 0.0)]);
        let xs = unique_xs(&[&a, &b], false).expect("xs");
        assert_eq!(
            xs,
            vec![
                TickValue::Number(1.0),
                TickValue::Number(2.0),
                TickValue::Number(3.0)
            ]
        );
    }
}
