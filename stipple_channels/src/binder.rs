// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use stipple_data::{DataError, DataHost, DatasetId};

use crate::scalar::{ChannelMode, ScalarChannel, ScalarChannelConfig, ScalarRange, compute_channel};

/// Keeps the last good buffer of one scalar channel.
///
/// [`ChannelBinder::bind`] replaces the buffer only when the computation
/// succeeds. On failure the previous buffer stays in place and the problem is
/// logged, so a renderer fed from [`ChannelBinder::buffer`] never sees a
/// partial or stale-length result.
#[derive(Clone, Debug)]
pub struct ChannelBinder {
    channel: ScalarChannel,
    config: ScalarChannelConfig,
    buffer: Vec<f32>,
}

impl ChannelBinder {
    /// Creates a binder with an empty buffer.
    #[must_use]
    pub fn new(channel: ScalarChannel, config: ScalarChannelConfig) -> Self {
        Self {
            channel,
            config,
            buffer: Vec::new(),
        }
    }

    /// The channel this binder computes.
    #[must_use]
    pub fn channel(&self) -> ScalarChannel {
        self.channel
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ScalarChannelConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect on the next [`ChannelBinder::bind`].
    pub fn set_config(&mut self, config: ScalarChannelConfig) {
        self.config = config;
    }

    /// Switches to constant mode with `value`.
    pub fn set_constant(&mut self, value: f32) {
        self.config.mode = ChannelMode::Constant;
        self.config.constant_value = value;
    }

    /// Switches to reading `dimension` of `source`, with the range seeded from
    /// the data's own minimum and maximum.
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownDataset`] if the host does not know `source`, or
    /// whatever extracting the dimension reports. The configuration is left
    /// unchanged on error.
    pub fn set_dimension(
        &mut self,
        host: &dyn DataHost,
        source: DatasetId,
        dimension: usize,
    ) -> Result<(), DataError> {
        let dataset = host
            .dataset(source)
            .ok_or(DataError::UnknownDataset(source))?;
        let values = dataset.extract_dimension(dimension)?;
        self.config.mode = ChannelMode::Dataset { source, dimension };
        self.config.range = ScalarRange::from_values(&values).unwrap_or_default();
        Ok(())
    }

    /// The last successfully computed buffer.
    #[must_use]
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// Largest value of the current buffer, ignoring NaN.
    #[must_use]
    pub fn max_value(&self) -> Option<f32> {
        self.buffer
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f32::max)
    }

    /// Recomputes the buffer for `point_count` points.
    ///
    /// # Errors
    ///
    /// Returns the [`DataError`] that stopped the computation; the previous
    /// buffer is retained and the error has already been logged.
    pub fn bind(&mut self, host: &dyn DataHost, point_count: usize) -> Result<&[f32], DataError> {
        let source = self.config.source().and_then(|id| host.dataset(id));
        match compute_channel(self.channel, &self.config, source, point_count) {
            Ok(values) => {
                self.buffer = values;
                Ok(self.buffer.as_slice())
            }
            Err(err) => {
                log::warn!(
                    target: "stipple::channels",
                    "{:?} channel not updated, keeping previous values: {err}",
                    self.channel
                );
                Err(err)
            }
        }
    }

    /// Falls back to constant mode if the source dataset is gone.
    ///
    /// Returns `true` if the configuration changed.
    pub fn revalidate(&mut self, host: &dyn DataHost) -> bool {
        let Some(source) = self.config.source() else {
            return false;
        };
        if host.dataset(source).is_some() {
            return false;
        }
        log::warn!(
            target: "stipple::channels",
            "{:?} channel source {source} was removed, reverting to constant",
            self.channel
        );
        self.config.mode = ChannelMode::Constant;
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use stipple_data::{DataError, DatasetId, MemoryDataset, MemoryHost};

    use super::ChannelBinder;
    use crate::{ChannelMode, ScalarChannel, ScalarChannelConfig, ScalarRange};

    fn host_with(id: DatasetId, values: Vec<f32>) -> MemoryHost {
        let mut host = MemoryHost::new();
        host.insert_dataset(MemoryDataset::full(id, 1, values));
        host
    }

    #[test]
    fn failure_keeps_last_good_buffer() {
        let id = DatasetId::new(3);
        let host = host_with(id, vec![0.0, 5.0, 10.0]);
        let config = ScalarChannelConfig::dimension(id, 0, ScalarRange::new(0.0, 10.0))
            .with_scale(1.0, 9.0);
        let mut binder = ChannelBinder::new(ScalarChannel::Size, config);

        assert_eq!(binder.bind(&host, 3).unwrap(), &[1.0, 5.5, 10.0]);
        assert_eq!(binder.max_value(), Some(10.0));

        let err = binder.bind(&host, 4).unwrap_err();
        assert_eq!(
            err,
            DataError::CountMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(binder.buffer(), &[1.0, 5.5, 10.0]);
    }

    #[test]
    fn bind_is_idempotent() {
        let id = DatasetId::new(3);
        let host = host_with(id, vec![0.3, 0.1, 0.7]);
        let config = ScalarChannelConfig::dimension(id, 0, ScalarRange::new(0.1, 0.7))
            .with_scale(0.2, 0.8);
        let mut binder = ChannelBinder::new(ScalarChannel::Opacity, config);

        let first: Vec<u32> = binder.bind(&host, 3).unwrap().iter().map(|v| v.to_bits()).collect();
        let second: Vec<u32> = binder.bind(&host, 3).unwrap().iter().map(|v| v.to_bits()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn set_dimension_seeds_range() {
        let id = DatasetId::new(1);
        let host = host_with(id, vec![4.0, -2.0, 1.0]);
        let mut binder = ChannelBinder::new(ScalarChannel::Color, ScalarChannelConfig::constant(0.0));
        binder.set_dimension(&host, id, 0).unwrap();
        assert_eq!(binder.config().range, ScalarRange::new(-2.0, 4.0));
        assert_eq!(binder.bind(&host, 3).unwrap(), &[1.0, 0.0, 0.5]);

        assert_eq!(
            binder.set_dimension(&host, DatasetId::new(2), 0),
            Err(DataError::UnknownDataset(DatasetId::new(2)))
        );
    }

    #[test]
    fn removed_source_reverts_to_constant() {
        let id = DatasetId::new(1);
        let mut host = host_with(id, vec![1.0]);
        let config = ScalarChannelConfig {
            constant_value: 0.5,
            ..ScalarChannelConfig::dimension(id, 0, ScalarRange::default())
        };
        let mut binder = ChannelBinder::new(ScalarChannel::Opacity, config);
        assert!(!binder.revalidate(&host));

        host.remove_dataset(id);
        assert!(binder.revalidate(&host));
        assert_eq!(binder.config().mode, ChannelMode::Constant);
        assert_eq!(binder.bind(&host, 2).unwrap(), &[0.5, 0.5]);
    }
}
