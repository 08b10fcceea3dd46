//! The per-node layout result, including the two-tier measurement cache
//! that makes repeated layout passes tractable (§4.3 of the design).

use arrayvec::ArrayVec;

use crate::geometry::{Rect, Size};
use crate::style::{Direction, MeasureMode};
use crate::value::FloatValue;

/// Maximum number of prior (input -> output) measurements retained per node,
/// on top of the dedicated full-layout slot.
pub const MEASUREMENT_CACHE_SIZE: usize = 16;

/// One cached (input -> output) measurement: the availabilities and modes a
/// query was made with, plus the size it produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CacheEntry {
    pub available_width: f32,
    pub available_height: f32,
    pub width_measure_mode: MeasureMode,
    pub height_measure_mode: MeasureMode,
    pub margin_row: f32,
    pub margin_column: f32,
    pub computed_width: f32,
    pub computed_height: f32,
}

/// The result of the most recent layout pass for a node, plus its cache.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The four physical edges, relative to the parent's content box.
    pub position: Rect<f32>,
    /// The promoted, authoritative dimensions -- only written when a full
    /// layout (not a mere measurement) was performed.
    pub dimensions: Size<f32>,
    /// The direction this node resolved to on its last pass.
    pub direction: Direction,
    /// Cleared to undefined whenever the node is dirty (§4.1).
    pub computed_flex_basis: FloatValue,
    /// The global generation this node's cache was last refreshed under.
    pub generation_count: u32,
    /// The direction the parent resolved to on the call that produced this
    /// layout; a later call with a different parent direction invalidates
    /// the cache regardless of generation.
    pub last_parent_direction: Direction,
    /// The dedicated slot for full-layout (`performLayout = true`) results,
    /// distinct from the measurement ring.
    pub cached_layout: Option<CacheEntry>,
    /// Up to [`MEASUREMENT_CACHE_SIZE`] prior measure-only results.
    pub cached_measurements: ArrayVec<CacheEntry, MEASUREMENT_CACHE_SIZE>,
    /// FIFO write position into `cached_measurements`.
    pub next_cached_measurement_index: usize,
    /// The authoritative per-pass output; promoted into `dimensions` only
    /// when `performLayout` was set.
    pub measured_dimensions: Size<FloatValue>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            position: Rect::ZERO,
            dimensions: Size::ZERO,
            direction: Direction::LTR,
            computed_flex_basis: FloatValue::UNDEFINED,
            generation_count: 0,
            last_parent_direction: Direction::Inherit,
            cached_layout: None,
            cached_measurements: ArrayVec::new(),
            next_cached_measurement_index: 0,
            measured_dimensions: Size { width: FloatValue::UNDEFINED, height: FloatValue::UNDEFINED },
        }
    }
}

impl Layout {
    /// Append (full-layout) or ring-insert (measurement) a freshly computed
    /// entry.
    pub fn store(&mut self, entry: CacheEntry, perform_layout: bool) {
        if perform_layout {
            self.cached_layout = Some(entry);
        } else if self.cached_measurements.len() < MEASUREMENT_CACHE_SIZE {
            self.cached_measurements.push(entry);
            self.next_cached_measurement_index = self.cached_measurements.len() % MEASUREMENT_CACHE_SIZE;
        } else {
            let idx = self.next_cached_measurement_index;
            self.cached_measurements[idx] = entry;
            self.next_cached_measurement_index = (idx + 1) % MEASUREMENT_CACHE_SIZE;
        }
    }

    /// Drop all cached entries. Used when a node must be revisited: rather
    /// than mutating each slot's mode to an impossible value (as the
    /// historical implementation does to dodge a false cache hit), this
    /// clears the slots outright -- observably identical, since an absent
    /// entry can never match a query either.
    pub fn invalidate_cache(&mut self) {
        self.cached_layout = None;
        self.cached_measurements.clear();
        self.next_cached_measurement_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(w: f32) -> CacheEntry {
        CacheEntry {
            available_width: w,
            available_height: 0.0,
            width_measure_mode: MeasureMode::Exactly,
            height_measure_mode: MeasureMode::Exactly,
            margin_row: 0.0,
            margin_column: 0.0,
            computed_width: w,
            computed_height: 0.0,
        }
    }

    #[test]
    fn ring_wraps_at_capacity() {
        let mut layout = Layout::default();
        for i in 0..(MEASUREMENT_CACHE_SIZE + 3) {
            layout.store(entry(i as f32), false);
        }
        assert_eq!(layout.cached_measurements.len(), MEASUREMENT_CACHE_SIZE);
        // The three oldest entries (0, 1, 2) should have been evicted FIFO.
        assert_eq!(layout.cached_measurements[0].available_width, 3.0);
    }

    #[test]
    fn layout_slot_is_independent_of_the_ring() {
        let mut layout = Layout::default();
        layout.store(entry(1.0), true);
        layout.store(entry(2.0), false);
        assert_eq!(layout.cached_layout.unwrap().available_width, 1.0);
        assert_eq!(layout.cached_measurements.len(), 1);
    }
}
