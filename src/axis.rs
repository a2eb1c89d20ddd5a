use crate::animation::{AnimationPlan, RevealAnimator, RevealProgress};
use crate::config::AxisConfig;
use crate::layout::{recompute, AxisLayout, LabelHooks};
use crate::math::{PointF64, SizeF64};
use crate::painter::{MeasureCache, MonospaceMeasurer, Painter, TextMeasurer};
use crate::scale::Scale;

/// A radial axis that keeps its layout in sync with its configuration,
/// its size and its reveal animation.
///
/// Changes only mark the axis dirty. The layout is recomputed lazily by
/// [`RadialAxis::layout`] once a size is known, and on every animation
/// frame.
#[derive(Debug)]
pub struct RadialAxis<M: TextMeasurer = MeasureCache<MonospaceMeasurer>> {
    config: AxisConfig,
    /// A configuration set while the reveal animation runs.
    pending_config: Option<AxisConfig>,
    hooks: LabelHooks,
    measurer: M,
    available: Option<SizeF64>,
    layout: Option<AxisLayout>,
    dirty: bool,
    animator: RevealAnimator,
}

impl RadialAxis {
    /// Creates an axis that measures labels as a fixed-width font.
    pub fn new(config: AxisConfig) -> Self {
        Self::with_measurer(config, MeasureCache::new(MonospaceMeasurer::default()))
    }
}

impl Default for RadialAxis {
    fn default() -> Self {
        Self::new(AxisConfig::default())
    }
}

impl<M: TextMeasurer> RadialAxis<M> {
    pub fn with_measurer(config: AxisConfig, measurer: M) -> Self {
        log_issues(&config);

        Self {
            config,
            pending_config: None,
            hooks: LabelHooks::default(),
            measurer,
            available: None,
            layout: None,
            dirty: true,
            animator: RevealAnimator::new(),
        }
    }

    /// The configuration the current layout is built from.
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// While the reveal animation runs, the new configuration is held back
    /// until the animation ends or is cancelled.
    pub fn set_config(&mut self, config: AxisConfig) {
        log_issues(&config);

        if self.animator.is_running() {
            log::debug!("axis configuration deferred until the reveal animation ends");
            self.pending_config = Some(config);
        } else {
            self.config = config;
        }
        self.invalidate();
    }

    /// Changes the configuration in place.
    pub fn update_config(&mut self, f: impl FnOnce(&mut AxisConfig)) {
        let mut config = self.pending_config.take().unwrap_or_else(|| self.config.clone());
        f(&mut config);
        self.set_config(config);
    }

    pub fn set_label_hooks(&mut self, hooks: LabelHooks) {
        self.hooks = hooks;
        self.invalidate();
    }

    pub fn set_available_size(&mut self, available: SizeF64) {
        if self.available != Some(available) {
            self.available = Some(available);
            self.invalidate();
        }
    }

    pub fn available_size(&self) -> Option<SizeF64> {
        self.available
    }

    /// Marks the layout as out of date.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Lays the axis out inside `available`, recomputing only if something
    /// changed since the last call.
    pub fn layout(&mut self, available: SizeF64) -> &AxisLayout {
        self.set_available_size(available);
        if self.dirty {
            self.layout = None;
        }
        self.dirty = false;

        let config = &self.config;
        let hooks = &self.hooks;
        let measurer = &mut self.measurer;
        let progress = self.animator.progress();
        self.layout
            .get_or_insert_with(|| recompute(config, hooks, available, measurer, progress))
    }

    /// The most recent layout, recomputed first if it is out of date.
    ///
    /// Returns `None` until a size has been supplied.
    pub fn current_layout(&mut self) -> Option<&AxisLayout> {
        let available = self.available?;
        Some(self.layout(available))
    }

    /// The angle of `value` in degrees.
    pub fn value_to_angle(&self, value: f64) -> f64 {
        self.scale().value_to_angle(value)
    }

    /// The point of `value` on the outer edge of the axis line.
    ///
    /// Returns `None` until a size has been supplied.
    pub fn value_to_point(&mut self, value: f64) -> Option<PointF64> {
        Some(self.current_layout()?.value_to_point(value))
    }

    /// The value under `point`, if it lies within the sweep of the axis.
    pub fn point_to_value(&mut self, point: PointF64) -> Option<f64> {
        self.current_layout()?.point_to_value(point)
    }

    fn scale(&self) -> Scale {
        Scale::from_config(&self.config).0
    }

    /// Starts the reveal animation over `duration` seconds.
    pub fn play(&mut self, duration: f64) {
        let plan = AnimationPlan::for_config(&self.config);
        self.animator.start(plan, duration);
        self.invalidate();
    }

    /// Stops the reveal animation, leaving the axis as revealed so far.
    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
        if self.apply_pending_config() {
            self.invalidate();
        }
    }

    /// Stops the reveal animation and shows the whole axis.
    pub fn skip_animation(&mut self) {
        self.animator.finish();
        self.apply_pending_config();
        self.invalidate();
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn reveal_progress(&self) -> &RevealProgress {
        self.animator.progress()
    }

    /// Advances the reveal animation by `dt` seconds and lays out the frame.
    ///
    /// Returns `true` while the animation keeps running.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.animator.is_running() {
            return false;
        }

        let mut changed = false;
        let running = self.animator.tick(dt, |_, _| changed = true);
        if changed {
            self.invalidate();
        }
        if !running {
            self.apply_pending_config();
            self.invalidate();
        }

        if let Some(available) = self.available {
            self.layout(available);
        }

        running
    }

    /// Applies a configuration held back by the animation, returning `true`
    /// if there was one.
    fn apply_pending_config(&mut self) -> bool {
        match self.pending_config.take() {
            Some(config) => {
                self.config = config;
                true
            }
            None => false,
        }
    }

    pub fn draw_axis_line<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if let Some(layout) = self.current_layout() {
            layout.draw_axis_line(painter);
        }
    }

    pub fn draw_major_ticks<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if let Some(layout) = self.current_layout() {
            layout.draw_major_ticks(painter);
        }
    }

    pub fn draw_minor_ticks<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if let Some(layout) = self.current_layout() {
            layout.draw_minor_ticks(painter);
        }
    }

    pub fn draw_labels<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if let Some(layout) = self.current_layout() {
            layout.draw_labels(painter);
        }
    }

    pub fn draw_ranges<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if let Some(layout) = self.current_layout() {
            layout.draw_ranges(painter);
        }
    }

    /// Draws the whole axis.
    pub fn draw<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if let Some(layout) = self.current_layout() {
            layout.draw(painter);
        }
    }
}

fn log_issues(config: &AxisConfig) {
    let (_, issues) = Scale::from_config(config);
    for issue in issues {
        log::warn!("{issue}");
    }
}
