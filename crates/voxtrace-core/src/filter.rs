//! Interactive filter state.

use glam::Vec3;

use crate::config::{CutoffWindow, GradientSpec};
use crate::shading::ShadingContext;

/// Process-wide tunable shading parameters.
///
/// Cutoff and shadow mutations push straight into the shading context;
/// gradient changes only take effect when the color buffer is rebuilt, so
/// they mutate local state only.
#[derive(Debug, Clone)]
pub struct FilterState {
    cutoff_from: f32,
    cutoff_to: f32,
    gradient: GradientSpec,
    show_shadows: bool,
}

impl FilterState {
    /// Creates filter state from the configured window and gradient.
    #[must_use]
    pub fn new(cutoff: CutoffWindow, gradient: GradientSpec) -> Self {
        Self {
            cutoff_from: cutoff.from,
            cutoff_to: cutoff.to,
            gradient,
            show_shadows: true,
        }
    }

    /// Current cutoff bounds `(from, to)`.
    #[must_use]
    pub fn cutoff(&self) -> (f32, f32) {
        (self.cutoff_from, self.cutoff_to)
    }

    /// Current gradient endpoints.
    #[must_use]
    pub fn gradient(&self) -> GradientSpec {
        self.gradient
    }

    /// Whether shadow rays are enabled.
    #[must_use]
    pub fn show_shadows(&self) -> bool {
        self.show_shadows
    }

    /// Sets the cutoff window and pushes both bounds into the context.
    ///
    /// Values are passed through unclamped; callers are responsible for
    /// keeping programmatic values in range. The interactive steppers below
    /// never leave `[0, 255]`.
    pub fn set_cutoff<C>(&mut self, ctx: &mut C, from: f32, to: f32)
    where
        C: ShadingContext + ?Sized,
    {
        self.cutoff_from = from;
        self.cutoff_to = to;
        ctx.set_cutoff(self.cutoff_from, self.cutoff_to);
        log::info!("cutoff window from {} to {}", self.cutoff_from, self.cutoff_to);
    }

    /// Sets the gradient endpoints for the next color-buffer build.
    pub fn set_gradient(&mut self, begin: Vec3, end: Vec3) {
        self.gradient = GradientSpec::new(begin, end);
    }

    /// Steps the lower bound down by one, refusing to cross 0.
    pub fn decrease_cutoff_from<C>(&mut self, ctx: &mut C)
    where
        C: ShadingContext + ?Sized,
    {
        if self.cutoff_from > 0.0 {
            self.cutoff_from -= 1.0;
        }
        self.push_cutoff(ctx);
    }

    /// Steps the lower bound up by one, refusing to cross 255.
    pub fn increase_cutoff_from<C>(&mut self, ctx: &mut C)
    where
        C: ShadingContext + ?Sized,
    {
        if self.cutoff_from < 255.0 {
            self.cutoff_from += 1.0;
        }
        self.push_cutoff(ctx);
    }

    /// Steps the upper bound down by one, refusing to cross 0.
    pub fn decrease_cutoff_to<C>(&mut self, ctx: &mut C)
    where
        C: ShadingContext + ?Sized,
    {
        if self.cutoff_to > 0.0 {
            self.cutoff_to -= 1.0;
        }
        self.push_cutoff(ctx);
    }

    /// Steps the upper bound up by one, refusing to cross 255.
    pub fn increase_cutoff_to<C>(&mut self, ctx: &mut C)
    where
        C: ShadingContext + ?Sized,
    {
        if self.cutoff_to < 255.0 {
            self.cutoff_to += 1.0;
        }
        self.push_cutoff(ctx);
    }

    /// Flips the shadow flag and pushes it; returns the new value.
    pub fn toggle_shadows<C>(&mut self, ctx: &mut C) -> bool
    where
        C: ShadingContext + ?Sized,
    {
        self.show_shadows = !self.show_shadows;
        ctx.set_show_shadows(self.show_shadows);
        self.show_shadows
    }

    /// Pushes the current window and shadow flag into a fresh context.
    ///
    /// Used once at scene initialization so the first launch observes the
    /// configured values.
    pub fn push_all<C>(&self, ctx: &mut C)
    where
        C: ShadingContext + ?Sized,
    {
        ctx.set_cutoff(self.cutoff_from, self.cutoff_to);
        ctx.set_show_shadows(self.show_shadows);
    }

    fn push_cutoff<C>(&self, ctx: &mut C)
    where
        C: ShadingContext + ?Sized,
    {
        ctx.set_cutoff(self.cutoff_from, self.cutoff_to);
        log::info!("cutoff window from {} to {}", self.cutoff_from, self.cutoff_to);
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(CutoffWindow::full(), GradientSpec::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CameraBasis, LightRecord};

    #[derive(Default)]
    struct RecordingContext {
        cutoff: Option<(f32, f32)>,
        shadows: Option<bool>,
        pushes: usize,
    }

    impl ShadingContext for RecordingContext {
        fn set_cutoff(&mut self, from: f32, to: f32) {
            self.cutoff = Some((from, to));
            self.pushes += 1;
        }

        fn set_show_shadows(&mut self, show: bool) {
            self.shadows = Some(show);
            self.pushes += 1;
        }

        fn set_camera(&mut self, _basis: &CameraBasis) {}

        fn set_lights(&mut self, _lights: &[LightRecord]) {}
    }

    #[test]
    fn test_set_cutoff_pushes_immediately() {
        let mut ctx = RecordingContext::default();
        let mut filter = FilterState::default();
        filter.set_cutoff(&mut ctx, 12.0, 90.0);
        assert_eq!(ctx.cutoff, Some((12.0, 90.0)));
        assert_eq!(ctx.pushes, 1);
    }

    #[test]
    fn test_lower_bound_never_negative() {
        let mut ctx = RecordingContext::default();
        let mut filter = FilterState::new(CutoffWindow::new(0.0, 255.0), GradientSpec::default());
        for _ in 0..10 {
            filter.decrease_cutoff_from(&mut ctx);
        }
        assert_eq!(filter.cutoff().0, 0.0);
        assert_eq!(ctx.cutoff, Some((0.0, 255.0)));
    }

    #[test]
    fn test_upper_bound_never_exceeds_255() {
        let mut ctx = RecordingContext::default();
        let mut filter = FilterState::new(CutoffWindow::new(0.0, 255.0), GradientSpec::default());
        for _ in 0..10 {
            filter.increase_cutoff_to(&mut ctx);
        }
        assert_eq!(filter.cutoff().1, 255.0);
    }

    #[test]
    fn test_stepping_moves_by_one() {
        let mut ctx = RecordingContext::default();
        let mut filter = FilterState::new(CutoffWindow::new(10.0, 200.0), GradientSpec::default());
        filter.increase_cutoff_from(&mut ctx);
        filter.decrease_cutoff_to(&mut ctx);
        assert_eq!(filter.cutoff(), (11.0, 199.0));
        assert_eq!(ctx.cutoff, Some((11.0, 199.0)));
    }

    #[test]
    fn test_toggle_shadows_round_trips() {
        let mut ctx = RecordingContext::default();
        let mut filter = FilterState::default();
        let initial = filter.show_shadows();
        assert_eq!(filter.toggle_shadows(&mut ctx), !initial);
        assert_eq!(ctx.shadows, Some(!initial));
        assert_eq!(filter.toggle_shadows(&mut ctx), initial);
        assert_eq!(ctx.shadows, Some(initial));
    }

    #[test]
    fn test_gradient_change_does_not_push() {
        let mut ctx = RecordingContext::default();
        let mut filter = FilterState::default();
        filter.set_gradient(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ctx.pushes, 0);
        assert_eq!(filter.gradient().begin, Vec3::ONE);
    }
}
