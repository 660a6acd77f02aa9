// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Selection: turning drawn shapes into selected points.
//!
//! A selection tool (rectangle, brush, lasso, polygon) rasterizes its shape
//! into a [`PixelMask`] the size of the view. This crate decides which points
//! of the scatterplot fall inside that mask and how the hits combine with the
//! host's existing selection:
//!
//! - [`resolve_targets`] maps every point through the same letterboxed
//!   data-to-view transform the renderer uses and samples the mask at the
//!   rounded pixel.
//! - [`resolve_selection`] applies a [`SelectionModifier`] to the hits and the
//!   existing selection, producing an [`IndexSelection`] of global indices.
//! - [`SelectionGesture`] tracks the begin/tick/end/abort lifecycle of a drag
//!   and says when, and with which modifier, to resolve.
//! - [`Highlights`] projects a selection back into per-point flags for the
//!   point renderer.
//!
//! Nothing here stores selection state across events; callers read the host's
//! selection fresh for every resolution.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use stipple_bounds::{BoundsConfig, compute_bounds, normalize};
//! use stipple_data::{DatasetId, IndexMap, MemoryDataset};
//! use stipple_selection::{PixelMask, SelectionModifier, resolve_selection};
//!
//! let positions = [Point::new(-1.0, -1.0), Point::new(1.0, 1.0)];
//! let bounds = normalize(compute_bounds(&positions), BoundsConfig::default());
//! let dataset = MemoryDataset::full(DatasetId::new(1), 2, vec![-1.0, -1.0, 1.0, 1.0]);
//! let map = IndexMap::for_dataset(&dataset).unwrap();
//!
//! // Select the bottom-left quadrant of a 100x100 view.
//! let mut mask = PixelMask::new(100, 100);
//! mask.fill_rect(Rect::new(0.0, 50.0, 50.0, 100.0));
//!
//! let selection = resolve_selection(
//!     &mask,
//!     &positions,
//!     bounds,
//!     SelectionModifier::Replace,
//!     &[],
//!     &map,
//! )
//! .unwrap();
//! assert_eq!(selection.to_sorted_vec(), [0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gesture;
mod highlight;
mod mask;
mod resolve;
mod set;

pub use gesture::{GestureConfig, GestureStep, SelectionGesture};
pub use highlight::Highlights;
pub use mask::PixelMask;
pub use resolve::{resolve_selection, resolve_targets};
pub use set::{IndexSelection, SelectionModifier};
