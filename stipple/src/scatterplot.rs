// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use stipple_channels::{
    ChannelBinder, ClusterColorBinder, PointSettings, ScalarChannel, ScalarChannelConfig,
};
use stipple_data::{DataError, DataHost, Dataset, DatasetId, IndexMap, selection_owner};
use stipple_render::{
    ColorMapImage, ColorMapRange, ColoringMode, DensityRenderer, ParameterPhase, PointRenderer,
    RenderMode, RenderModeCoordinator,
};
use stipple_selection::{
    GestureStep, Highlights, IndexSelection, PixelMask, SelectionGesture, SelectionModifier,
    resolve_selection,
};

use crate::config::EngineConfig;

/// What point colors are read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorDataset {
    /// Cluster membership; each point takes its cluster's color.
    Clusters(DatasetId),
    /// One dimension of a dataset, looked up in the color map.
    Dimension {
        /// Dataset providing the values.
        source: DatasetId,
        /// Dimension of `source` to read.
        dimension: usize,
    },
}

/// The position dataset and what was derived from it at load time.
#[derive(Clone, Debug)]
struct ActiveDataset {
    id: DatasetId,
    /// Dataset whose selection this view reads and writes.
    owner: DatasetId,
    /// Full dataset the position dataset materializes points of.
    full: DatasetId,
    map: IndexMap,
    x: usize,
    y: usize,
}

fn load(
    dataset: &dyn Dataset,
    x: usize,
    y: usize,
) -> Result<(ActiveDataset, Vec<Point>), DataError> {
    let map = IndexMap::for_dataset(dataset)?;
    let positions = dataset.extract_positions(x, y)?;
    let active = ActiveDataset {
        id: dataset.id(),
        owner: selection_owner(dataset),
        full: dataset.parent().unwrap_or(dataset.id()),
        map,
        x,
        y,
    };
    Ok((active, positions))
}

fn write_back(host: &mut dyn DataHost, owner: DatasetId, selection: &IndexSelection) {
    host.set_selection(owner, selection.to_sorted_vec());
    host.notify_selection_changed(owner);
}

/// A scatterplot view's interaction and visual-channel engine.
///
/// The host calls one method per event. Nothing here holds on to host state
/// between events except what the last dataset event loaded: the positions,
/// their bounds and the index mapping. Selections are read from the host
/// every time they are needed.
///
/// Every event method is a no-op while no position dataset is active.
///
/// Selection write-backs notify the host through
/// [`DataHost::notify_selection_changed`]; the host is expected to dispatch
/// that notification back as [`Scatterplot::selection_changed`], which
/// refreshes the highlights.
#[derive(Debug)]
pub struct Scatterplot<P, D> {
    config: EngineConfig,
    coordinator: RenderModeCoordinator<P, D>,
    size: ChannelBinder,
    opacity: ChannelBinder,
    color: ChannelBinder,
    clusters: ClusterColorBinder,
    cluster_source: Option<DatasetId>,
    gesture: SelectionGesture,
    active: Option<ActiveDataset>,
}

impl<P: PointRenderer, D: DensityRenderer> Scatterplot<P, D> {
    /// Creates an engine with no position dataset.
    pub fn new(points: P, density: D, config: EngineConfig) -> Self {
        let config = EngineConfig {
            points: config.points.clamped(),
            ..config
        };
        let coordinator = RenderModeCoordinator::new(
            points,
            density,
            config.density,
            config.bounds,
            config.constant_color,
        );
        let size =
            ScalarChannelConfig::constant(config.points.size).with_scale(0.0, config.points.size);
        Self {
            coordinator,
            size: ChannelBinder::new(ScalarChannel::Size, size),
            opacity: ChannelBinder::new(
                ScalarChannel::Opacity,
                ScalarChannelConfig::constant(config.points.opacity),
            ),
            color: ChannelBinder::new(ScalarChannel::Color, ScalarChannelConfig::constant(0.0)),
            clusters: ClusterColorBinder::new(),
            cluster_source: None,
            gesture: SelectionGesture::new(config.gesture),
            active: None,
            config,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The render mode coordinator, and through it both renderers.
    #[must_use]
    pub fn coordinator(&self) -> &RenderModeCoordinator<P, D> {
        &self.coordinator
    }

    /// The position dataset, if one is active.
    #[must_use]
    pub fn active_dataset(&self) -> Option<DatasetId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// The dimensions used as x and y.
    #[must_use]
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.active.as_ref().map(|a| (a.x, a.y))
    }

    /// Local to global mapping of the position dataset.
    #[must_use]
    pub fn index_map(&self) -> Option<&IndexMap> {
        self.active.as_ref().map(|a| &a.map)
    }

    /// Number of points on screen.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.map.len())
    }

    /// Number of points on screen that the host currently has selected.
    #[must_use]
    pub fn selected_count(&self, host: &dyn DataHost) -> usize {
        let Some(active) = &self.active else {
            return 0;
        };
        Highlights::from_selection(host.selection(active.owner), &active.map).selected_count()
    }

    /// Configuration of one scalar channel.
    #[must_use]
    pub fn channel_config(&self, channel: ScalarChannel) -> &ScalarChannelConfig {
        match channel {
            ScalarChannel::Size => self.size.config(),
            ScalarChannel::Opacity => self.opacity.config(),
            ScalarChannel::Color => self.color.config(),
        }
    }

    /// Cluster dataset used for [`ColoringMode::ColorData`].
    #[must_use]
    pub fn cluster_source(&self) -> Option<DatasetId> {
        self.cluster_source
    }

    /// Returns `true` while a selection gesture is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.gesture.is_active()
    }

    /// Makes `id` the position dataset, plotting its first two dimensions.
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownDataset`] if the host does not know `id`, or
    /// whatever building the index map or extracting positions reports. The
    /// previous dataset stays active on error.
    pub fn set_position_dataset(
        &mut self,
        host: &dyn DataHost,
        id: DatasetId,
    ) -> Result<(), DataError> {
        let dataset = host.dataset(id).ok_or(DataError::UnknownDataset(id))?;
        let y = usize::from(dataset.dimension_count() > 1);
        let (active, positions) = load(dataset, 0, y)?;
        log::debug!(target: "stipple", "position dataset {id}, {} points", positions.len());
        self.activate(host, active, positions);
        Ok(())
    }

    /// Drops the position dataset and clears the renderers' positions.
    ///
    /// A gesture in progress is discarded.
    pub fn clear_position_dataset(&mut self) {
        self.reset_gesture();
        if self.active.take().is_some() {
            self.coordinator.set_positions(Vec::new());
        }
    }

    /// Plots dimensions `x` and `y` of the position dataset.
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownDataset`] if the position dataset is gone, or
    /// whatever extracting positions reports. The previous dimensions stay in
    /// use on error.
    pub fn set_dimensions(
        &mut self,
        host: &dyn DataHost,
        x: usize,
        y: usize,
    ) -> Result<(), DataError> {
        let Some(id) = self.active_dataset() else {
            return Ok(());
        };
        let dataset = host.dataset(id).ok_or(DataError::UnknownDataset(id))?;
        let (active, positions) = load(dataset, x, y)?;
        self.activate(host, active, positions);
        Ok(())
    }

    /// Handles a change to any dataset of the host.
    ///
    /// Channel sources that disappeared fall back to constant values. The
    /// position dataset is reloaded; if it disappeared the view is cleared,
    /// and if it cannot be reloaded the previous points stay on screen.
    pub fn dataset_changed(&mut self, host: &dyn DataHost) {
        let Some(active) = &self.active else {
            return;
        };
        let (id, x, y) = (active.id, active.x, active.y);
        self.revalidate_sources(host);
        let Some(dataset) = host.dataset(id) else {
            log::warn!(target: "stipple", "position dataset {id} was removed");
            self.clear_position_dataset();
            return;
        };
        match load(dataset, x, y) {
            Ok((active, positions)) => self.activate(host, active, positions),
            Err(err) => log::warn!(
                target: "stipple",
                "position dataset {id} not reloaded, keeping previous points: {err}"
            ),
        }
    }

    /// Handles a selection change notification from the host.
    pub fn selection_changed(&mut self, host: &dyn DataHost) {
        self.refresh_highlights(host);
    }

    /// Starts a selection gesture.
    pub fn begin_selection(&mut self, modifier: SelectionModifier) {
        if self.active.is_none() {
            return;
        }
        self.gesture.begin(modifier);
    }

    /// Handles a shape update of the gesture in progress.
    ///
    /// Returns `true` if the selection was written back.
    pub fn tick_selection(&mut self, host: &mut dyn DataHost, mask: &PixelMask) -> bool {
        if self.active.is_none() {
            return false;
        }
        let Some(step) = self.gesture.tick() else {
            return false;
        };
        self.apply_step(host, mask, step)
    }

    /// Finishes the gesture in progress with its nominal modifier.
    ///
    /// Returns `true` if the selection was written back.
    pub fn end_selection(&mut self, host: &mut dyn DataHost, mask: &PixelMask) -> bool {
        if self.active.is_none() {
            self.gesture.reset();
            return false;
        }
        let Some(step) = self.gesture.end() else {
            return false;
        };
        log::debug!(
            target: "stipple::selection",
            "gesture finished after {} ticks",
            self.gesture.ticks()
        );
        self.apply_step(host, mask, step)
    }

    /// Cancels the gesture in progress.
    ///
    /// The final resolution subtracts what `mask` covers, whatever modifier
    /// the gesture began with. Returns `true` if the selection was written back.
    pub fn abort_selection(&mut self, host: &mut dyn DataHost, mask: &PixelMask) -> bool {
        if self.active.is_none() {
            self.gesture.reset();
            return false;
        }
        let Some(step) = self.gesture.abort() else {
            return false;
        };
        log::debug!(target: "stipple::selection", "gesture aborted");
        self.apply_step(host, mask, step)
    }

    /// Selects every point on screen.
    pub fn select_all(&mut self, host: &mut dyn DataHost) -> bool {
        self.edit_selection(host, |selection, map| selection.select_all(map))
    }

    /// Deselects every point on screen.
    pub fn clear_selection(&mut self, host: &mut dyn DataHost) -> bool {
        self.edit_selection(host, |selection, map| {
            selection.subtract(map.local_to_global().iter().copied());
        })
    }

    /// Flips the selection state of every point on screen.
    pub fn invert_selection(&mut self, host: &mut dyn DataHost) -> bool {
        self.edit_selection(host, |selection, map| selection.invert(map))
    }

    /// The current selection as sorted global indices, and the dataset to cut
    /// a subset of them from.
    ///
    /// With `from_source` the indices refer to the dataset the selection is
    /// kept on (the derivation source for derived data); otherwise to the full
    /// dataset behind the position dataset.
    #[must_use]
    pub fn subset_indices(
        &self,
        host: &dyn DataHost,
        from_source: bool,
    ) -> Option<(DatasetId, Vec<u32>)> {
        let active = self.active.as_ref()?;
        let indices = IndexSelection::from_indices(host.selection(active.owner)).to_sorted_vec();
        let target = if from_source { active.owner } else { active.full };
        Some((target, indices))
    }

    /// Turns the current selection into a new cluster of `clusters`.
    ///
    /// Returns the size of the new cluster, or `None` if nothing is selected
    /// or the host has no such cluster dataset.
    pub fn add_cluster_from_selection(
        &mut self,
        host: &mut dyn DataHost,
        clusters: DatasetId,
        name: &str,
        color: Color,
    ) -> Option<usize> {
        let active = self.active.as_ref()?;
        let selection = host.selection(active.owner);
        if selection.is_empty() {
            return None;
        }
        let len = host
            .clusters_mut(clusters)?
            .add_cluster_from_selection(name, color, selection)
            .len();
        if self.cluster_source == Some(clusters) {
            self.refresh_colors(&*host);
        }
        Some(len)
    }

    /// Switches render mode. Returns `true` if the mode changed.
    pub fn set_render_mode(&mut self, mode: RenderMode) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.coordinator.set_render_mode(mode)
    }

    /// Changes the kernel width. Returns `true` if density was recomputed.
    pub fn set_sigma(&mut self, sigma: f32, phase: ParameterPhase) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.coordinator.set_sigma(sigma, phase)
    }

    /// Turns live density updates while dragging the sigma control on or off.
    pub fn set_live_updates(&mut self, live_updates: bool) {
        if self.active.is_none() {
            return;
        }
        self.coordinator.set_live_updates(live_updates);
        self.config.density.live_updates = live_updates;
    }

    /// Replaces the gradient color map.
    pub fn set_color_map(&mut self, image: ColorMapImage) {
        if self.active.is_none() {
            return;
        }
        self.coordinator.set_color_map(image);
    }

    /// Sets the color map range of the active renderer.
    pub fn set_color_map_range(&mut self, range: ColorMapRange) {
        if self.active.is_none() {
            return;
        }
        self.coordinator.set_color_map_range(range);
    }

    /// Changes constant point size and opacity.
    ///
    /// Channels in constant mode pick up the new values immediately.
    pub fn set_point_settings(&mut self, host: &dyn DataHost, settings: PointSettings) {
        if self.active.is_none() {
            return;
        }
        let settings = settings.clamped();
        self.config.points = settings;
        let mut size = *self.size.config();
        size.constant_value = settings.size;
        self.size.set_config(size);
        let mut opacity = *self.opacity.config();
        opacity.constant_value = settings.opacity;
        self.opacity.set_config(opacity);
        self.refresh_scalar(host, ScalarChannel::Size);
        self.refresh_scalar(host, ScalarChannel::Opacity);
    }

    /// Replaces the configuration of one scalar channel and recomputes it.
    ///
    /// Configuring the color channel also selects [`ColoringMode::Scalar`]
    /// (dataset-driven) or [`ColoringMode::Constant`].
    pub fn set_channel_config(
        &mut self,
        host: &dyn DataHost,
        channel: ScalarChannel,
        config: ScalarChannelConfig,
    ) {
        if self.active.is_none() {
            return;
        }
        self.binder_mut(channel).set_config(config);
        if channel == ScalarChannel::Color {
            let coloring = if config.source().is_some() {
                ColoringMode::Scalar
            } else {
                ColoringMode::Constant
            };
            self.coordinator.set_coloring_mode(coloring);
            self.refresh_colors(host);
        } else {
            self.refresh_scalar(host, channel);
        }
    }

    /// Drives `channel` from `dimension` of `source`, over the data's own range.
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownDataset`] if the host does not know `source`, or
    /// whatever extracting the dimension reports. The channel is unchanged on
    /// error.
    pub fn set_channel_dimension(
        &mut self,
        host: &dyn DataHost,
        channel: ScalarChannel,
        source: DatasetId,
        dimension: usize,
    ) -> Result<(), DataError> {
        if self.active.is_none() {
            return Ok(());
        }
        self.binder_mut(channel).set_dimension(host, source, dimension)?;
        if channel == ScalarChannel::Color {
            self.coordinator.set_coloring_mode(ColoringMode::Scalar);
            self.refresh_colors(host);
        } else {
            self.refresh_scalar(host, channel);
        }
        Ok(())
    }

    /// Colors points by clusters or by a dimension.
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownDataset`] if the host has no such cluster or
    /// dataset; see also [`Scatterplot::set_channel_dimension`].
    pub fn set_color_dataset(
        &mut self,
        host: &dyn DataHost,
        color: ColorDataset,
    ) -> Result<(), DataError> {
        if self.active.is_none() {
            return Ok(());
        }
        match color {
            ColorDataset::Clusters(id) => {
                host.clusters(id).ok_or(DataError::UnknownDataset(id))?;
                self.cluster_source = Some(id);
                self.coordinator.set_coloring_mode(ColoringMode::ColorData);
                self.refresh_colors(host);
                Ok(())
            }
            ColorDataset::Dimension { source, dimension } => {
                self.set_channel_dimension(host, ScalarChannel::Color, source, dimension)
            }
        }
    }

    /// Switches coloring mode.
    ///
    /// [`ColoringMode::Scalar`] needs a dataset-driven color channel and
    /// [`ColoringMode::ColorData`] a cluster dataset; requests without one are
    /// refused. Returns `true` if the request was accepted.
    pub fn set_coloring_mode(&mut self, host: &dyn DataHost, coloring: ColoringMode) -> bool {
        if self.active.is_none() {
            return false;
        }
        let available = match coloring {
            ColoringMode::Constant => true,
            ColoringMode::Scalar => self.color.config().source().is_some(),
            ColoringMode::ColorData => self.cluster_source.is_some(),
        };
        if !available {
            return false;
        }
        self.coordinator.set_coloring_mode(coloring);
        self.refresh_colors(host);
        true
    }

    fn binder_mut(&mut self, channel: ScalarChannel) -> &mut ChannelBinder {
        match channel {
            ScalarChannel::Size => &mut self.size,
            ScalarChannel::Opacity => &mut self.opacity,
            ScalarChannel::Color => &mut self.color,
        }
    }

    fn activate(&mut self, host: &dyn DataHost, active: ActiveDataset, positions: Vec<Point>) {
        if self.active_dataset() != Some(active.id) {
            self.reset_gesture();
        }
        self.active = Some(active);
        self.coordinator.set_positions(positions);
        self.refresh_scalar(host, ScalarChannel::Size);
        self.refresh_scalar(host, ScalarChannel::Opacity);
        self.refresh_colors(host);
        self.refresh_highlights(host);
    }

    fn reset_gesture(&mut self) {
        if self.gesture.is_active() {
            log::debug!(
                target: "stipple::selection",
                "gesture discarded, position dataset changed"
            );
        }
        self.gesture.reset();
    }

    fn revalidate_sources(&mut self, host: &dyn DataHost) {
        self.size.revalidate(host);
        self.opacity.revalidate(host);
        if self.color.revalidate(host) && self.coordinator.coloring_mode() == ColoringMode::Scalar
        {
            self.coordinator.set_coloring_mode(ColoringMode::Constant);
        }
        if let Some(id) = self.cluster_source {
            if host.clusters(id).is_none() {
                log::warn!(
                    target: "stipple",
                    "cluster dataset {id} was removed, reverting to constant color"
                );
                self.cluster_source = None;
                if self.coordinator.coloring_mode() == ColoringMode::ColorData {
                    self.coordinator.set_coloring_mode(ColoringMode::Constant);
                }
            }
        }
    }

    fn refresh_scalar(&mut self, host: &dyn DataHost, channel: ScalarChannel) {
        let Some(count) = self.active.as_ref().map(|a| a.map.len()) else {
            return;
        };
        let binder = match channel {
            ScalarChannel::Size => &mut self.size,
            ScalarChannel::Opacity => &mut self.opacity,
            ScalarChannel::Color => &mut self.color,
        };
        if binder.bind(host, count).is_err() {
            return;
        }
        self.coordinator.push_scalars(channel, binder.buffer());
        if channel == ScalarChannel::Size {
            let size = binder.max_value().unwrap_or(self.config.points.size);
            self.coordinator.push_point_size(size);
        }
    }

    fn refresh_colors(&mut self, host: &dyn DataHost) {
        let Some(id) = self.active_dataset() else {
            return;
        };
        match self.coordinator.coloring_mode() {
            ColoringMode::Constant => {}
            ColoringMode::Scalar => self.refresh_scalar(host, ScalarChannel::Color),
            ColoringMode::ColorData => {
                let Some(source) = self.cluster_source else {
                    return;
                };
                let (Some(clusters), Some(dataset)) = (host.clusters(source), host.dataset(id))
                else {
                    return;
                };
                if self.clusters.project(clusters, dataset).is_ok() {
                    self.coordinator.push_colors(self.clusters.colors());
                }
            }
        }
    }

    fn refresh_highlights(&mut self, host: &dyn DataHost) {
        let Some(active) = &self.active else {
            return;
        };
        let highlights = Highlights::from_selection(host.selection(active.owner), &active.map);
        self.coordinator
            .push_highlights(highlights.flags(), highlights.selected_count());
    }

    fn apply_step(&self, host: &mut dyn DataHost, mask: &PixelMask, step: GestureStep) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let existing = host.selection(active.owner);
        let Some(selection) = resolve_selection(
            mask,
            self.coordinator.positions(),
            self.coordinator.bounds(),
            step.modifier,
            &existing,
            &active.map,
        ) else {
            return false;
        };
        write_back(host, active.owner, &selection);
        true
    }

    fn edit_selection(
        &self,
        host: &mut dyn DataHost,
        edit: impl FnOnce(&mut IndexSelection, &IndexMap),
    ) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let mut selection = IndexSelection::from_indices(host.selection(active.owner));
        edit(&mut selection, &active.map);
        write_back(host, active.owner, &selection);
        true
    }
}
