use crate::error::AxisResult;
use crate::render::{AxisRenderConfig, AxisRenderer};

/// Handle of an off-screen render target owned by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetachedTargetId(pub u64);

/// Scoped off-screen target used by measurement passes.
///
/// The target is removed from the renderer when the guard drops, on every
/// exit path.
pub struct DetachedTarget<'r, R: AxisRenderer + ?Sized> {
    renderer: &'r mut R,
    id: DetachedTargetId,
}

impl<'r, R: AxisRenderer + ?Sized> DetachedTarget<'r, R> {
    pub fn acquire(renderer: &'r mut R) -> AxisResult<Self> {
        let id = renderer.create_detached_target()?;
        Ok(Self { renderer, id })
    }

    #[must_use]
    pub fn id(&self) -> DetachedTargetId {
        self.id
    }

    /// Renders `config` into the target and returns each tick label's
    /// bounding-box width in render order.
    pub fn measure_labels(&mut self, config: &AxisRenderConfig) -> AxisResult<Vec<f64>> {
        self.renderer.render_detached(self.id, config)?;
        self.renderer.detached_label_widths(self.id)
    }
}

impl<R: AxisRenderer + ?Sized> Drop for DetachedTarget<'_, R> {
    fn drop(&mut self) {
        self.renderer.remove_detached_target(self.id);
    }
}
