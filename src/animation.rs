//! The staged reveal animation of an axis.
//!
//! A reveal plays its phases one after another, each taking an equal share
//! of the total duration. The host drives it with [`RevealAnimator::tick`].

use smallvec::SmallVec;

use crate::config::AxisConfig;

/// A stage of the reveal animation, in playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    AxisLine,
    TicksAndLabels,
    Ranges,
    Pointers,
    Annotations,
}

/// The share `[begin, end)` of the total duration a phase plays in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWindow {
    pub phase: RevealPhase,
    pub begin: f64,
    pub end: f64,
}

impl PhaseWindow {
    /// The progress of this phase at `t`, the progress of the whole
    /// animation.
    pub fn local_progress(&self, t: f64) -> f64 {
        if t <= self.begin {
            0.0
        } else if t >= self.end {
            1.0
        } else {
            (t - self.begin) / (self.end - self.begin)
        }
    }
}

/// The ordered phase windows of one reveal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnimationPlan {
    windows: SmallVec<[PhaseWindow; 5]>,
}

impl AnimationPlan {
    /// Splits the duration evenly between `phases`.
    pub fn new(phases: impl IntoIterator<Item = RevealPhase>) -> Self {
        let phases: SmallVec<[RevealPhase; 5]> = phases.into_iter().collect();
        let share = 1.0 / phases.len().max(1) as f64;
        let count = phases.len();

        let windows = phases
            .into_iter()
            .enumerate()
            .map(|(i, phase)| PhaseWindow {
                phase,
                begin: i as f64 * share,
                // The last window always closes the animation.
                end: if i + 1 == count {
                    1.0
                } else {
                    (i + 1) as f64 * share
                },
            })
            .collect();

        Self { windows }
    }

    /// The phases that have something to reveal in `config`.
    pub fn for_config(config: &AxisConfig) -> Self {
        let mut phases = SmallVec::<[RevealPhase; 5]>::new();
        if config.show_axis_line {
            phases.push(RevealPhase::AxisLine);
        }
        if config.show_ticks || config.show_labels {
            phases.push(RevealPhase::TicksAndLabels);
        }
        if !config.ranges.is_empty() {
            phases.push(RevealPhase::Ranges);
        }
        if !config.pointers.is_empty() {
            phases.push(RevealPhase::Pointers);
        }
        if config.annotation_count > 0 {
            phases.push(RevealPhase::Annotations);
        }

        Self::new(phases)
    }

    pub fn windows(&self) -> &[PhaseWindow] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, phase: RevealPhase) -> bool {
        self.windows.iter().any(|w| w.phase == phase)
    }
}

/// The progress of every phase, `1` meaning fully revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealProgress {
    pub axis_line: f64,
    pub ticks_and_labels: f64,
    pub ranges: f64,
    pub pointers: f64,
    pub annotations: f64,
}

impl Default for RevealProgress {
    fn default() -> Self {
        Self {
            axis_line: 1.0,
            ticks_and_labels: 1.0,
            ranges: 1.0,
            pointers: 1.0,
            annotations: 1.0,
        }
    }
}

impl RevealProgress {
    pub fn get(&self, phase: RevealPhase) -> f64 {
        match phase {
            RevealPhase::AxisLine => self.axis_line,
            RevealPhase::TicksAndLabels => self.ticks_and_labels,
            RevealPhase::Ranges => self.ranges,
            RevealPhase::Pointers => self.pointers,
            RevealPhase::Annotations => self.annotations,
        }
    }

    pub fn set(&mut self, phase: RevealPhase, progress: f64) {
        let slot = match phase {
            RevealPhase::AxisLine => &mut self.axis_line,
            RevealPhase::TicksAndLabels => &mut self.ticks_and_labels,
            RevealPhase::Ranges => &mut self.ranges,
            RevealPhase::Pointers => &mut self.pointers,
            RevealPhase::Annotations => &mut self.annotations,
        };
        *slot = progress;
    }

    pub fn is_complete(&self) -> bool {
        *self == Self::default()
    }
}

/// The value a pointer shows at `progress` while it sweeps up from the axis
/// minimum.
pub fn pointer_value(minimum: f64, target: f64, progress: f64) -> f64 {
    minimum + (target - minimum) * progress
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum AnimationState {
    #[default]
    Idle,
    Running {
        /// Seconds since the animation started.
        elapsed: f64,
    },
}

/// Plays an [`AnimationPlan`] over a duration.
#[derive(Debug, Default, Clone)]
pub struct RevealAnimator {
    plan: AnimationPlan,
    duration: f64,
    state: AnimationState,
    progress: RevealProgress,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts playing `plan` over `duration` seconds.
    ///
    /// A running animation is cancelled first. An empty plan or a duration
    /// that is not positive reveals everything at once.
    pub fn start(&mut self, plan: AnimationPlan, duration: f64) {
        if self.is_running() {
            log::debug!("restarting the reveal animation");
            self.cancel();
        }
        self.progress = RevealProgress::default();

        if plan.is_empty() || !duration.is_finite() || duration <= 0.0 {
            return;
        }

        for window in plan.windows() {
            self.progress.set(window.phase, 0.0);
        }

        log::debug!(
            "reveal animation started: {} phases over {duration}s",
            plan.windows().len()
        );

        self.plan = plan;
        self.duration = duration;
        self.state = AnimationState::Running { elapsed: 0.0 };
    }

    /// Stops the animation where it is.
    ///
    /// The progress reached so far is kept, so whatever was revealed stays
    /// on screen. Use [`RevealAnimator::finish`] to reveal everything.
    pub fn cancel(&mut self) {
        if self.is_running() {
            log::debug!("reveal animation cancelled");
        }
        self.state = AnimationState::Idle;
        self.plan = AnimationPlan::default();
    }

    /// Stops the animation and reveals everything.
    pub fn finish(&mut self) {
        self.cancel();
        self.progress = RevealProgress::default();
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// `on_progress` is called for every phase whose progress changed.
    /// Returns `true` while the animation keeps running.
    pub fn tick(&mut self, dt: f64, mut on_progress: impl FnMut(RevealPhase, f64)) -> bool {
        let AnimationState::Running { elapsed } = &mut self.state else {
            return false;
        };

        if dt.is_finite() && dt > 0.0 {
            *elapsed += dt;
        }
        let t = (*elapsed / self.duration).min(1.0);

        for window in self.plan.windows() {
            let local = window.local_progress(t);
            if local != self.progress.get(window.phase) {
                self.progress.set(window.phase, local);
                log::trace!("{:?} at {local:.3}", window.phase);
                on_progress(window.phase, local);
            }
        }

        if t >= 1.0 {
            log::debug!("reveal animation finished");
            self.state = AnimationState::Idle;
            self.plan = AnimationPlan::default();
            return false;
        }

        true
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn progress(&self) -> &RevealProgress {
        &self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PointerSpec, RangeSpec};
    use crate::color::Color;

    fn full_config() -> AxisConfig {
        let mut config = AxisConfig::new()
            .with_ranges([RangeSpec::new(0.0, 50.0, Color::BLACK)])
            .with_pointers([PointerSpec::new(70.0)]);
        config.annotation_count = 2;
        config
    }

    #[test]
    fn windows_are_contiguous_and_even() {
        let plan = AnimationPlan::for_config(&full_config());
        let windows = plan.windows();
        assert_eq!(windows.len(), 5);
        assert_eq!(windows[0].begin, 0.0);
        assert_eq!(windows[4].end, 1.0);
        for pair in windows.windows(2) {
            assert_eq!(pair[0].end, pair[1].begin);
            assert!((pair[0].end - pair[0].begin - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_phases_are_skipped() {
        let mut config = AxisConfig::new();
        config.show_axis_line = false;
        config.show_labels = false;
        let plan = AnimationPlan::for_config(&config);
        assert_eq!(plan.windows().len(), 1);
        assert_eq!(plan.windows()[0].phase, RevealPhase::TicksAndLabels);
        assert_eq!(plan.windows()[0].end, 1.0);
    }

    #[test]
    fn runs_to_idle() {
        let mut animator = RevealAnimator::new();
        animator.start(AnimationPlan::for_config(&full_config()), 1.0);
        assert!(animator.is_running());
        assert_eq!(animator.progress().axis_line, 0.0);

        let mut seen = Vec::new();
        assert!(animator.tick(0.1, |phase, p| seen.push((phase, p))));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, RevealPhase::AxisLine);
        assert!((seen[0].1 - 0.5).abs() < 1e-9);

        seen.clear();
        assert!(!animator.tick(5.0, |phase, p| seen.push((phase, p))));
        assert_eq!(seen.len(), 5);
        assert!(seen.iter().all(|(_, p)| *p == 1.0));
        assert_eq!(animator.state(), AnimationState::Idle);
        assert!(animator.progress().is_complete());

        assert!(!animator.tick(0.1, |_, _| panic!("idle animators do not report")));
    }

    #[test]
    fn restarting_cancels_the_running_animation() {
        let mut animator = RevealAnimator::new();
        animator.start(AnimationPlan::for_config(&full_config()), 1.0);
        animator.tick(0.5, |_, _| {});
        assert!(animator.progress().axis_line == 1.0);

        animator.start(AnimationPlan::for_config(&full_config()), 2.0);
        assert_eq!(animator.progress().axis_line, 0.0);
        assert_eq!(animator.state(), AnimationState::Running { elapsed: 0.0 });
    }

    #[test]
    fn cancel_keeps_the_progress_reached() {
        let mut animator = RevealAnimator::new();
        animator.start(AnimationPlan::for_config(&full_config()), 1.0);
        animator.tick(0.3, |_, _| {});
        let reached = *animator.progress();

        animator.cancel();
        assert!(!animator.is_running());
        assert_eq!(*animator.progress(), reached);
        assert_eq!(animator.progress().axis_line, 1.0);
        assert_eq!(animator.progress().pointers, 0.0);
        assert!(!animator.tick(0.1, |_, _| panic!("cancelled animators do not report")));
    }

    #[test]
    fn finish_reveals_everything() {
        let mut animator = RevealAnimator::new();
        animator.start(AnimationPlan::for_config(&full_config()), 1.0);
        animator.tick(0.3, |_, _| {});
        animator.finish();
        assert!(!animator.is_running());
        assert!(animator.progress().is_complete());
    }

    #[test]
    fn restarting_after_a_cancel_starts_from_scratch() {
        let mut animator = RevealAnimator::new();
        animator.start(AnimationPlan::for_config(&full_config()), 1.0);
        animator.tick(0.3, |_, _| {});
        animator.cancel();

        animator.start(AnimationPlan::for_config(&AxisConfig::new()), 0.0);
        assert!(animator.progress().is_complete());
    }

    #[test]
    fn zero_duration_is_instant() {
        let mut animator = RevealAnimator::new();
        animator.start(AnimationPlan::for_config(&full_config()), 0.0);
        assert!(!animator.is_running());
        assert!(animator.progress().is_complete());
    }

    #[test]
    fn pointers_sweep_from_the_minimum() {
        assert_eq!(pointer_value(0.0, 70.0, 0.0), 0.0);
        assert_eq!(pointer_value(0.0, 70.0, 0.5), 35.0);
        assert_eq!(pointer_value(-20.0, 70.0, 1.0), 70.0);
    }
}
