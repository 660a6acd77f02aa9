// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use stipple_data::{DataError, Dataset, DatasetId};

/// The visual attribute a scalar buffer drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarChannel {
    /// Point size in device pixels.
    Size,
    /// Point opacity in `[0, 1]`.
    Opacity,
    /// Color-map coordinate in `[0, 1]`.
    Color,
}

/// Where a channel's values come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelMode {
    /// Every point gets [`ScalarChannelConfig::constant_value`].
    Constant,
    /// Values are read from one dimension of a dataset.
    Dataset {
        /// Dataset providing the values.
        source: DatasetId,
        /// Dimension of `source` to read.
        dimension: usize,
    },
}

/// An inclusive value range.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarRange {
    /// Lower end.
    pub min: f32,
    /// Upper end.
    pub max: f32,
}

impl ScalarRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The smallest range containing every finite value, or `None` if there is none.
    #[must_use]
    pub fn from_values(values: &[f32]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
            })
    }

    /// Returns `true` if `min == max`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Clamps `value` into the range and maps it onto `[0, 1]`.
    ///
    /// A degenerate or non-finite range maps everything to `0`.
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        if self.is_degenerate() || !self.min.is_finite() || !self.max.is_finite() {
            return 0.0;
        }
        let (lo, hi) = if self.min < self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        (value.clamp(lo, hi) - self.min) / (self.max - self.min)
    }
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// How one scalar channel is computed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarChannelConfig {
    /// Constant or dataset-driven.
    pub mode: ChannelMode,
    /// Value used in [`ChannelMode::Constant`], already in renderer units.
    pub constant_value: f32,
    /// Added to the normalized value.
    pub offset: f32,
    /// Scale of the normalized value.
    pub magnitude: f32,
    /// Raw values are clamped into this range before normalization.
    pub range: ScalarRange,
}

impl ScalarChannelConfig {
    /// A constant channel.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self {
            mode: ChannelMode::Constant,
            constant_value: value,
            offset: 0.0,
            magnitude: 1.0,
            range: ScalarRange::default(),
        }
    }

    /// A dataset-driven channel with unit magnitude and no offset.
    #[must_use]
    pub fn dimension(source: DatasetId, dimension: usize, range: ScalarRange) -> Self {
        Self {
            mode: ChannelMode::Dataset { source, dimension },
            range,
            ..Self::constant(0.0)
        }
    }

    /// Sets the offset and magnitude.
    #[must_use]
    pub fn with_scale(mut self, offset: f32, magnitude: f32) -> Self {
        self.offset = offset;
        self.magnitude = magnitude;
        self
    }

    /// Dataset the channel reads from, if dataset-driven.
    #[must_use]
    pub fn source(&self) -> Option<DatasetId> {
        match self.mode {
            ChannelMode::Constant => None,
            ChannelMode::Dataset { source, .. } => Some(source),
        }
    }
}

/// Combines a normalized value `t` into the channel's output unit.
///
/// - Size: `offset + t * magnitude`.
/// - Opacity: `magnitude * (offset + t / (1 - offset))`, except that an
///   offset of exactly `1` saturates to `1`.
/// - Color: `t`.
#[must_use]
pub fn combine(channel: ScalarChannel, config: &ScalarChannelConfig, t: f32) -> f32 {
    match channel {
        ScalarChannel::Size => config.offset + t * config.magnitude,
        ScalarChannel::Opacity => {
            if config.offset == 1.0 {
                1.0
            } else {
                config.magnitude * (config.offset + t / (1.0 - config.offset))
            }
        }
        ScalarChannel::Color => t,
    }
}

/// Computes one value per point for `channel`.
///
/// `source` must be the dataset named by a dataset-driven `config`; it is
/// ignored in constant mode. A degenerate range yields all zeros, whatever
/// the offset and magnitude.
///
/// # Errors
///
/// - [`DataError::UnknownDataset`] if the config is dataset-driven and
///   `source` is `None`.
/// - [`DataError::CountMismatch`] if `source` does not have `point_count` points.
/// - Whatever [`Dataset::extract_dimension`] reports.
pub fn compute_channel(
    channel: ScalarChannel,
    config: &ScalarChannelConfig,
    source: Option<&dyn Dataset>,
    point_count: usize,
) -> Result<Vec<f32>, DataError> {
    let ChannelMode::Dataset {
        source: id,
        dimension,
    } = config.mode
    else {
        return Ok(vec![config.constant_value; point_count]);
    };
    let source = source.ok_or(DataError::UnknownDataset(id))?;
    if source.point_count() != point_count {
        return Err(DataError::CountMismatch {
            expected: point_count,
            actual: source.point_count(),
        });
    }
    let raw = source.extract_dimension(dimension)?;
    if config.range.is_degenerate() {
        return Ok(vec![0.0; point_count]);
    }
    Ok(raw
        .into_iter()
        .map(|v| combine(channel, config, config.range.normalize(v)))
        .collect())
}
