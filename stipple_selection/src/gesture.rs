// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection gesture lifecycle.
//!
//! ## Usage
//!
//! 1) Call [`SelectionGesture::begin`] with the modifier held when the drag starts.
//! 2) On every shape update, call [`SelectionGesture::tick`]. If it returns a
//!    [`GestureStep`], resolve the current mask with the step's modifier and
//!    write the result back.
//! 3) Finish with [`SelectionGesture::end`], or cancel with
//!    [`SelectionGesture::abort`]. Both return a final step to resolve.
//!
//! Steps never carry selection state; every resolution reads the host's
//! current selection.
//!
//! ## Minimal example
//!
//! ```
//! use stipple_selection::{GestureConfig, SelectionGesture, SelectionModifier};
//!
//! let mut gesture = SelectionGesture::new(GestureConfig::default());
//! gesture.begin(SelectionModifier::Add);
//!
//! let step = gesture.tick().unwrap();
//! assert_eq!(step.modifier, SelectionModifier::Add);
//!
//! // Cancelling never replaces: it subtracts what the shape covers.
//! let last = gesture.abort().unwrap();
//! assert_eq!(last.modifier, SelectionModifier::Subtract);
//! assert!(!gesture.is_active());
//! ```

use crate::set::SelectionModifier;

/// Gesture behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Write back (and notify) on every tick, not only when the gesture ends.
    pub notify_during_selection: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            notify_during_selection: true,
        }
    }
}

/// One resolution the caller should perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GestureStep {
    /// Modifier to resolve with.
    pub modifier: SelectionModifier,
    /// `true` for the last step of the gesture.
    pub finished: bool,
}

/// Tracks an in-progress selection gesture.
#[derive(Clone, Debug, Default)]
pub struct SelectionGesture {
    config: GestureConfig,
    modifier: Option<SelectionModifier>,
    ticks: u64,
}

impl SelectionGesture {
    /// Creates an idle gesture tracker.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            modifier: None,
            ticks: 0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Replaces the configuration; takes effect on the next tick.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Starts a gesture, discarding any gesture still in progress.
    pub fn begin(&mut self, modifier: SelectionModifier) {
        self.modifier = Some(modifier);
        self.ticks = 0;
    }

    /// Records a shape update.
    ///
    /// Returns a step only while a gesture is active and
    /// [`notify_during_selection`](GestureConfig::notify_during_selection) is on.
    pub fn tick(&mut self) -> Option<GestureStep> {
        let modifier = self.modifier?;
        self.ticks += 1;
        self.config
            .notify_during_selection
            .then_some(GestureStep {
                modifier,
                finished: false,
            })
    }

    /// Ends the gesture, returning the final step with the nominal modifier.
    pub fn end(&mut self) -> Option<GestureStep> {
        let modifier = self.modifier.take()?;
        Some(GestureStep {
            modifier,
            finished: true,
        })
    }

    /// Cancels the gesture.
    ///
    /// The final step always subtracts, whatever modifier the gesture began
    /// with, so a cancelled add can never replace a larger prior selection.
    pub fn abort(&mut self) -> Option<GestureStep> {
        self.modifier.take()?;
        Some(GestureStep {
            modifier: SelectionModifier::Subtract,
            finished: true,
        })
    }

    /// Drops the gesture in progress without producing a final step.
    ///
    /// Used when the points the gesture was drawn over go away.
    pub fn reset(&mut self) {
        self.modifier = None;
        self.ticks = 0;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.modifier.is_some()
    }

    /// Modifier of the gesture in progress.
    #[must_use]
    pub fn modifier(&self) -> Option<SelectionModifier> {
        self.modifier
    }

    /// Number of ticks since the gesture began.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
