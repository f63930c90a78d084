use smallvec::SmallVec;

use crate::core::{AxisId, AxisMap, Domain};

pub type TickWidths = SmallVec<[f64; 16]>;

/// Runtime metrics exposed by the tick width cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickWidthCacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Last measured tick label geometry of one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickWidthCacheEntry {
    /// Widest measured tick label, in pixels.
    pub pixel_size: f64,
    pub domain_snapshot: Option<Domain>,
    /// Width of every measured label (x axis only).
    pub per_tick_widths: TickWidths,
    /// Unrotated labels are wider than their tick slot.
    pub needs_clip_path: bool,
}

impl TickWidthCacheEntry {
    /// A degenerate domain or an unchanged one needs no re-measurement.
    #[must_use]
    pub fn is_fresh_for(&self, domain: Domain) -> bool {
        domain.is_degenerate() || self.domain_snapshot == Some(domain)
    }

    /// Stores a measurement; zero-width results leave the entry untouched.
    ///
    /// Returns whether the entry was updated.
    pub fn store(&mut self, domain: Domain, widths: &[f64], keep_per_tick: bool) -> bool {
        let max_width = widths.iter().copied().fold(0.0, f64::max);
        if max_width <= 0.0 {
            return false;
        }

        self.pixel_size = max_width;
        self.domain_snapshot = Some(domain);
        if keep_per_tick {
            self.per_tick_widths = widths.iter().copied().collect();
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct TickWidthCache {
    entries: AxisMap<TickWidthCacheEntry>,
    hits: u64,
    misses: u64,
}

impl TickWidthCache {
    #[must_use]
    pub fn entry(&self, id: AxisId) -> &TickWidthCacheEntry {
        &self.entries[id]
    }

    pub fn entry_mut(&mut self, id: AxisId) -> &mut TickWidthCacheEntry {
        &mut self.entries[id]
    }

    #[must_use]
    pub fn size(&self, id: AxisId) -> f64 {
        self.entries[id].pixel_size
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses = self.misses.saturating_add(1);
    }

    #[must_use]
    pub fn stats(&self) -> TickWidthCacheStats {
        TickWidthCacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub fn clear(&mut self) {
        self.entries = AxisMap::default();
    }
}
