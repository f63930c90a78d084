use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{AxisId, AxisMap, Domain, Orientation, Scale, ScaleSet};
use crate::error::AxisResult;
use crate::render::{AxisRenderConfig, AxisRenderer, DEFAULT_OUTER_TICK_SIZE, SubAxisPaint};

use super::config::SubAxisConfig;

/// Independently scaled decorative axis attached to a base axis.
#[derive(Debug)]
pub struct SubAxis {
    scale: Box<dyn Scale>,
    domain_override: Option<Domain>,
    config: AxisRenderConfig,
}

impl SubAxis {
    #[must_use]
    pub fn scale(&self) -> &dyn Scale {
        self.scale.as_ref()
    }

    #[must_use]
    pub fn render_config(&self) -> &AxisRenderConfig {
        &self.config
    }
}

/// Placement of one sub-axis paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubAxisUpdate {
    /// Distance between consecutive sub-axes.
    pub spacing: f64,
    pub transition: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct MultiAxisManager {
    axes: AxisMap<Vec<SubAxis>>,
}

impl MultiAxisManager {
    /// Rebuilds the sub-axes of `id` from its descriptors.
    pub fn generate_axes(
        &mut self,
        id: AxisId,
        descriptors: &[SubAxisConfig],
        base: &dyn Scale,
        orientation: Orientation,
    ) {
        let axes = descriptors
            .iter()
            .map(|descriptor| {
                let mut scale = base.copy();
                if let Some(domain) = descriptor.domain {
                    scale.set_domain(domain);
                }

                let tick = &descriptor.tick;
                let mut config =
                    AxisRenderConfig::new(id, orientation, scale.domain(), scale.range());
                config.tick_count = tick.count;
                config.tick_values = tick.values.clone();
                config.tick_format = tick.format_fn.as_ref().map(|format| format.to_format_fn());
                config.outer_tick_size = if tick.outer {
                    DEFAULT_OUTER_TICK_SIZE
                } else {
                    0.0
                };

                SubAxis {
                    scale,
                    domain_override: descriptor.domain,
                    config,
                }
            })
            .collect::<Vec<_>>();

        debug!(axis = %id, count = axes.len(), "generate sub-axes");
        self.axes[id] = axes;
    }

    #[must_use]
    pub fn sub_axes(&self, id: AxisId) -> &[SubAxis] {
        &self.axes[id]
    }

    /// Re-synchronizes every sub-axis with its live base scale and paints it.
    ///
    /// Missing sub-axes are appended; existing ones transition only when their
    /// domain or range changed.
    pub fn update_axes<R: AxisRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        scales: &ScaleSet,
        visible: &AxisMap<bool>,
        update: SubAxisUpdate,
    ) -> AxisResult<()> {
        for id in AxisId::CONFIGURED {
            let Some(base) = scales.get(id) else {
                continue;
            };
            let range = base.range();

            for (index, sub_axis) in self.axes[id].iter_mut().enumerate() {
                let range_changed = sub_axis.scale.range() != range;
                if range_changed {
                    sub_axis.scale.set_range(range);
                }

                let exists = renderer.has_sub_axis(id, index);
                let domain = sub_axis.domain_override.unwrap_or_else(|| base.domain());
                let domain_changed = sub_axis.scale.domain() != domain;
                if domain_changed {
                    sub_axis.scale.set_domain(domain);
                }
                if exists && !domain_changed && !range_changed {
                    trace!(axis = %id, index, "sub-axis unchanged");
                    continue;
                }

                sub_axis.config.domain = sub_axis.scale.domain();
                sub_axis.config.range = range;
                let offset = (index + 1) as f64
                    * update.spacing
                    * sub_axis.config.orientation.outward_sign();
                renderer.render_sub_axis(&SubAxisPaint {
                    id,
                    index,
                    config: &sub_axis.config,
                    offset,
                    visible: visible[id],
                    transition: if exists { update.transition } else { None },
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MultiAxisManager, SubAxisUpdate};
    use crate::api::config::{SubAxisConfig, SubAxisTickConfig};
    use crate::core::{AxisId, AxisMap, Domain, LinearScale, Orientation, ScaleSet};
    use crate::render::NullRenderer;

    fn scales(domain: Domain) -> ScaleSet {
        ScaleSet {
            y: Some(Box::new(
                LinearScale::new(domain, (300.0, 0.0)).expect("scale"),
            )),
            ..ScaleSet::default()
        }
    }

    #[test]
    fn domain_override_is_kept_across_updates() {
        let base = LinearScale::new(Domain::new(0.0, 10.0), (300.0, 0.0)).expect("scale");
        let mut manager = MultiAxisManager::default();
        manager.generate_axes(
            AxisId::Y,
            &[
                SubAxisConfig {
                    domain: Some(Domain::new(0.0, 1.0)),
                    tick: SubAxisTickConfig {
                        outer: false,
                        ..SubAxisTickConfig::default()
                    },
                },
                SubAxisConfig::default(),
            ],
            &base,
            Orientation::Left,
        );
        assert_eq!(manager.sub_axes(AxisId::Y)[0].render_config().outer_tick_size, 0.0);

        let mut renderer = NullRenderer::default();
        let visible = AxisMap::from_fn(|_| true);
        let update = SubAxisUpdate {
            spacing: 40.0,
            transition: None,
        };
        manager
            .update_axes(&mut renderer, &scales(Domain::new(0.0, 50.0)), &visible, update)
            .expect("update");

        let painted = renderer.sub_axes(AxisId::Y);
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[0].domain, Domain::new(0.0, 1.0));
        assert_eq!(painted[1].domain, Domain::new(0.0, 50.0));
        assert_eq!(painted[0].offset, -40.0);
        assert_eq!(painted[1].offset, -80.0);
        assert_eq!(manager.sub_axes(AxisId::Y)[1].scale().range(), (300.0, 0.0));
    }
}
