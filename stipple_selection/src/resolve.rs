// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial selection resolution: pixel mask to global point indices.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use stipple_bounds::ScatterViewport;
use stipple_data::IndexMap;

use crate::mask::PixelMask;
use crate::set::{IndexSelection, SelectionModifier};

/// Collects the global indices of every point the mask hits.
///
/// `positions` are in local order and `map` translates local to global
/// indices. `bounds` must be the normalized bounds the renderer uses for the
/// same view: each point is placed in the mask exactly as the renderer places
/// it on screen (see [`ScatterViewport`]), rounded to the nearest pixel, and is
/// hit iff that pixel has non-zero alpha. Points falling outside the mask are
/// never hit.
///
/// Returns `None` when `bounds` cannot carry a mapping (for example the
/// "no data" sentinel) or the mask is empty.
#[must_use]
pub fn resolve_targets(
    mask: &PixelMask,
    positions: &[Point],
    bounds: Rect,
    map: &IndexMap,
) -> Option<Vec<u32>> {
    let viewport = ScatterViewport::new(mask.size(), bounds);
    if !viewport.is_valid() {
        return None;
    }
    let targets = positions
        .iter()
        .zip(map.local_to_global())
        .filter(|(p, _)| {
            viewport
                .data_to_pixel(**p)
                .is_some_and(|(x, y)| mask.is_hit(x, y))
        })
        .map(|(_, &global)| global)
        .collect();
    Some(targets)
}

/// Resolves a mask against the existing selection.
///
/// The result depends on `modifier`:
/// - [`Replace`](SelectionModifier::Replace): only the hit points, `existing`
///   is ignored.
/// - [`Add`](SelectionModifier::Add): `existing` plus the hit points.
/// - [`Subtract`](SelectionModifier::Subtract): `existing` minus the hit points.
///
/// Returns `None`, meaning "leave the selection alone", when there are no
/// positions or the bounds are invalid.
#[must_use]
pub fn resolve_selection(
    mask: &PixelMask,
    positions: &[Point],
    bounds: Rect,
    modifier: SelectionModifier,
    existing: &[u32],
    map: &IndexMap,
) -> Option<IndexSelection> {
    if positions.is_empty() {
        return None;
    }
    let targets = resolve_targets(mask, positions, bounds, map)?;
    log::trace!(
        target: "stipple::selection",
        "mask hit {} of {} points ({modifier:?})",
        targets.len(),
        positions.len()
    );
    let mut selection = match modifier {
        SelectionModifier::Replace => IndexSelection::new(),
        SelectionModifier::Add | SelectionModifier::Subtract => {
            IndexSelection::from_indices(existing.iter().copied())
        }
    };
    selection.apply(modifier, targets);
    Some(selection)
}
