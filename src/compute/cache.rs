//! The measurement-cache compatibility predicate (§4.3): decides when a
//! prior (input -> output) measurement may stand in for a fresh query.

use crate::layout::CacheEntry;
use crate::style::MeasureMode;
use crate::value::float_eq;

/// The inputs of a fresh layout/measure query, shaped to compare directly
/// against a stored [`CacheEntry`].
#[derive(Copy, Clone, Debug)]
pub struct CacheQuery {
    pub available_width: f32,
    pub available_height: f32,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    pub margin_row: f32,
    pub margin_column: f32,
}

/// `same`: both modes undefined, or modes match and availability is equal
/// within tolerance.
fn same(cached_avail: f32, cached_mode: MeasureMode, query_avail: f32, query_mode: MeasureMode) -> bool {
    if cached_mode == MeasureMode::Undefined && query_mode == MeasureMode::Undefined {
        return true;
    }
    cached_mode == query_mode && float_eq(cached_avail, query_avail)
}

/// `valid`: the cached entry was measured under no constraint, and the new
/// constraint is already satisfied by what it produced.
fn valid(cached_mode: MeasureMode, cached_output: f32, query_avail: f32, query_mode: MeasureMode, margin: f32) -> bool {
    if cached_mode != MeasureMode::Undefined {
        return false;
    }
    match query_mode {
        MeasureMode::AtMost => cached_output <= query_avail - margin,
        MeasureMode::Exactly => float_eq(cached_output, query_avail - margin),
        MeasureMode::Undefined => false,
    }
}

/// Decide whether `entry` may be reused for `query`. Returns the (width,
/// height) to report if so.
///
/// `is_text_node` is true for a childless node with a measure callback --
/// such nodes get the extra heuristic in §4.3 that lets a width-stable
/// entry answer a looser height query (and vice versa for an
/// unconstrained-width entry). Matching the historical implementation, a
/// reuse via the "heightMode=AtMost, cached height already fits" branch
/// widens the entry's recorded bound in place so a subsequent, still
/// broader query can hit the cheaper `same` path directly -- this is a
/// cache-quality optimization, not something the predicate's correctness
/// depends on.
pub fn reuse(entry: &mut CacheEntry, query: &CacheQuery, is_text_node: bool) -> Option<(f32, f32)> {
    let width_same = same(entry.available_width, entry.width_measure_mode, query.available_width, query.width_mode);
    let height_same = same(entry.available_height, entry.height_measure_mode, query.available_height, query.height_mode);
    let width_valid =
        valid(entry.width_measure_mode, entry.computed_width, query.available_width, query.width_mode, query.margin_row);
    let height_valid = valid(
        entry.height_measure_mode,
        entry.computed_height,
        query.available_height,
        query.height_mode,
        query.margin_column,
    );

    if (height_same && width_same) || (width_same && height_valid) || (height_same && width_valid) || (height_valid && width_valid)
    {
        return Some((entry.computed_width, entry.computed_height));
    }

    if is_text_node {
        if width_same {
            if query.height_mode == MeasureMode::Undefined {
                return Some((entry.computed_width, entry.computed_height));
            }
            if query.height_mode == MeasureMode::AtMost {
                let bound = query.available_height - query.margin_column;
                if entry.computed_height < bound {
                    entry.available_height = query.available_height;
                    entry.height_measure_mode = MeasureMode::AtMost;
                    return Some((entry.computed_width, entry.computed_height));
                }
            }
        }

        if entry.width_measure_mode == MeasureMode::Undefined {
            if query.width_mode == MeasureMode::Undefined {
                return Some((entry.computed_width, entry.computed_height));
            }
            if query.width_mode == MeasureMode::AtMost {
                let bound = query.available_width - query.margin_row;
                if entry.computed_width <= bound {
                    return Some((entry.computed_width, entry.computed_height));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_entry() -> CacheEntry {
        CacheEntry {
            available_width: 100.0,
            available_height: 50.0,
            width_measure_mode: MeasureMode::Exactly,
            height_measure_mode: MeasureMode::Exactly,
            margin_row: 0.0,
            margin_column: 0.0,
            computed_width: 100.0,
            computed_height: 50.0,
        }
    }

    #[test]
    fn identical_query_is_reusable() {
        let mut entry = base_entry();
        let query = CacheQuery {
            available_width: 100.0,
            available_height: 50.0,
            width_mode: MeasureMode::Exactly,
            height_mode: MeasureMode::Exactly,
            margin_row: 0.0,
            margin_column: 0.0,
        };
        assert_eq!(reuse(&mut entry, &query, false), Some((100.0, 50.0)));
    }

    #[test]
    fn different_exact_availability_is_not_reusable_for_non_text_node() {
        let mut entry = base_entry();
        let query = CacheQuery {
            available_width: 40.0,
            available_height: 50.0,
            width_mode: MeasureMode::Exactly,
            height_mode: MeasureMode::Exactly,
            margin_row: 0.0,
            margin_column: 0.0,
        };
        assert_eq!(reuse(&mut entry, &query, false), None);
    }

    #[test]
    fn undefined_cached_mode_is_valid_under_a_satisfied_at_most() {
        let mut entry = base_entry();
        entry.width_measure_mode = MeasureMode::Undefined;
        entry.computed_width = 30.0;
        let query = CacheQuery {
            available_width: 40.0,
            available_height: 50.0,
            width_mode: MeasureMode::AtMost,
            height_mode: MeasureMode::Exactly,
            margin_row: 0.0,
            margin_column: 0.0,
        };
        assert_eq!(reuse(&mut entry, &query, false), Some((30.0, 50.0)));
    }

    #[test]
    fn text_node_heuristic_reuses_across_a_looser_height() {
        let mut entry = base_entry();
        entry.computed_height = 20.0;
        let query = CacheQuery {
            available_width: 100.0,
            available_height: 80.0,
            width_mode: MeasureMode::Exactly,
            height_mode: MeasureMode::AtMost,
            margin_row: 0.0,
            margin_column: 0.0,
        };
        assert_eq!(reuse(&mut entry, &query, true), Some((100.0, 20.0)));
        // Narrowing step widened the stored bound in place.
        assert_eq!(entry.available_height, 80.0);
    }

    #[test]
    fn text_node_heuristic_does_not_apply_to_non_text_nodes() {
        let mut entry = base_entry();
        entry.computed_height = 20.0;
        let query = CacheQuery {
            available_width: 100.0,
            available_height: 80.0,
            width_mode: MeasureMode::Exactly,
            height_mode: MeasureMode::AtMost,
            margin_row: 0.0,
            margin_column: 0.0,
        };
        assert_eq!(reuse(&mut entry, &query, false), None);
    }
}
