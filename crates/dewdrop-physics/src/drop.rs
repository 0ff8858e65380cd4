//! Drag, idle and settling behavior of the liquid drop.

use std::time::Duration;

use dewdrop_core::{DropSize, PointerEvent, PointerId, PointerKind, Vec2, Viewport};

use crate::spring::Spring;

/// Quiet time after a release before the drop starts flowing downward.
pub const IDLE_DELAY: Duration = Duration::from_millis(3000);

/// Downward drift of the target per frame once idle (~60px/s at 60Hz).
pub const GRAVITY_PER_FRAME: f32 = 1.0;

/// Vertical position the drop appears at when shown.
pub const SPAWN_TOP: f32 = 100.0;

/// Vertical velocity above which hitting the floor halves it.
const FLOOR_BOUNCE_THRESHOLD: f32 = 1.0;
const FLOOR_BOUNCE_DAMPING: f32 = 0.5;

/// Visual squeeze while the drop is held.
const GRAB_SCALE: f32 = 0.95;

/// What the drop is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPhase {
    /// Free; may be waiting out the idle delay or flowing down.
    Idle,
    /// Held by a pointer.
    Dragging,
    /// Flowing has brought the target to rest against the floor.
    Settled,
}

/// Which pointer is moving the drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grab {
    /// Only events from this pointer are honored until it is released.
    Exclusive(PointerId),
    /// Capture unavailable: any pointer moves or releases the drop.
    Shared,
}

/// The drop overlay's physics state.
///
/// Position never follows input directly: pointer events and gravity move
/// the target, and every [`step`](Self::step) pulls the position toward it
/// with a [`Spring`].
#[derive(Debug, Clone)]
pub struct DropSimulator {
    position: Vec2,
    target: Vec2,
    velocity: Vec2,
    /// Pointer position minus drop position at grab time.
    grab_offset: Vec2,
    grab: Option<Grab>,
    /// Whether pointer capture is available to the host.
    exclusive_capture: bool,
    /// Simulation time accumulated from frame deltas.
    clock: Duration,
    /// Clock reading at the last release; `None` if never dragged.
    last_release: Option<Duration>,
    size: DropSize,
    viewport: Viewport,
    spring: Spring,
}

impl DropSimulator {
    /// A drop centered horizontally, [`SPAWN_TOP`] pixels from the top, at rest.
    pub fn new(size: DropSize, viewport: Viewport) -> Self {
        let start = Self::spawn_point(size, viewport);
        Self {
            position: start,
            target: start,
            velocity: Vec2::ZERO,
            grab_offset: Vec2::ZERO,
            grab: None,
            exclusive_capture: true,
            clock: Duration::ZERO,
            last_release: None,
            size,
            viewport,
            spring: Spring::default(),
        }
    }

    /// Discard all drag and settle state and start over as if newly shown.
    pub fn reset(&mut self, size: DropSize, viewport: Viewport) {
        let exclusive_capture = self.exclusive_capture;
        *self = Self::new(size, viewport);
        self.exclusive_capture = exclusive_capture;
    }

    fn spawn_point(size: DropSize, viewport: Viewport) -> Vec2 {
        Vec2::new(viewport.width / 2.0 - size.px() / 2.0, SPAWN_TOP)
    }

    /// Tell the simulator whether the host can capture pointers exclusively.
    ///
    /// Without capture a drag follows every pointer instead of failing.
    pub fn set_exclusive_capture(&mut self, exclusive: bool) {
        self.exclusive_capture = exclusive;
    }

    /// New viewport size. Limits are enforced from the next frame on.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// New overlay size, applied live without resetting.
    pub fn set_size(&mut self, size: DropSize) {
        self.size = size;
    }

    /// Dispatch a pointer event. Returns `true` if the drop consumed it.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event.id, event.position),
            PointerKind::Move => self.on_pointer_move(event.id, event.position),
            PointerKind::Up => self.on_pointer_up(event.id, event.position),
        }
    }

    /// Start a drag if `at` is on the drop and no other pointer holds it.
    pub fn on_pointer_down(&mut self, id: PointerId, at: Vec2) -> bool {
        if self.grab.is_some() || !self.hit_test(at) {
            return false;
        }
        self.grab = Some(if self.exclusive_capture {
            Grab::Exclusive(id)
        } else {
            Grab::Shared
        });
        self.grab_offset = at - self.position;
        tracing::debug!(pointer = id.0, x = at.x, y = at.y, "drop grabbed");
        true
    }

    /// Move the target along with the holding pointer.
    pub fn on_pointer_move(&mut self, id: PointerId, at: Vec2) -> bool {
        if !self.holds(id) {
            return false;
        }
        self.target = at - self.grab_offset;
        true
    }

    /// Release the drop and start the idle countdown.
    pub fn on_pointer_up(&mut self, id: PointerId, at: Vec2) -> bool {
        if !self.holds(id) {
            return false;
        }
        self.grab = None;
        self.last_release = Some(self.clock);
        tracing::debug!(pointer = id.0, x = at.x, y = at.y, "drop released");
        true
    }

    fn holds(&self, id: PointerId) -> bool {
        match self.grab {
            Some(Grab::Exclusive(owner)) => owner == id,
            Some(Grab::Shared) => true,
            None => false,
        }
    }

    /// Whether `at` falls on the drop's bounding square.
    pub fn hit_test(&self, at: Vec2) -> bool {
        let size = self.size.px();
        (self.position.x..=self.position.x + size).contains(&at.x)
            && (self.position.y..=self.position.y + size).contains(&at.y)
    }

    /// Advance one frame that took `dt` of wall-clock time.
    ///
    /// Does nothing while the viewport has no area.
    pub fn step(&mut self, dt: Duration) {
        if self.viewport.is_empty() {
            return;
        }
        self.clock += dt;

        let flowing = self.is_flowing();
        if flowing {
            self.apply_gravity();
        }

        let before = self.position;
        self.spring
            .integrate(&mut self.position, &mut self.velocity, self.target);
        if flowing {
            self.contain(before);
        }
    }

    /// Whether gravity currently drives the target.
    fn is_flowing(&self) -> bool {
        if self.grab.is_some() {
            return false;
        }
        self.last_release
            .is_none_or(|released| self.clock.saturating_sub(released) >= IDLE_DELAY)
    }

    fn apply_gravity(&mut self) {
        let bottom = self.bottom_limit();
        let right = self.right_limit();

        // A drop left above the top edge flows from the edge, not from outside.
        self.target.y = self.target.y.max(0.0);
        if self.target.y < bottom {
            self.target.y = (self.target.y + GRAVITY_PER_FRAME).min(bottom);
        } else {
            self.target.y = bottom;
            if self.velocity.y > FLOOR_BOUNCE_THRESHOLD {
                self.velocity.y *= FLOOR_BOUNCE_DAMPING;
            }
        }
        self.target.x = self.target.x.clamp(0.0, right);
    }

    /// Stop a flowing drop at the floor and side walls.
    ///
    /// Only crossings from inside are caught, so a drop released out of
    /// bounds still springs back in before it is held there.
    fn contain(&mut self, before: Vec2) {
        let bottom = self.bottom_limit();
        let right = self.right_limit();
        if before.y <= bottom && self.position.y > bottom {
            self.position.y = bottom;
            self.velocity.y = self.velocity.y.min(0.0);
        }
        if before.x >= 0.0 && self.position.x < 0.0 {
            self.position.x = 0.0;
            self.velocity.x = self.velocity.x.max(0.0);
        } else if before.x <= right && self.position.x > right {
            self.position.x = right;
            self.velocity.x = self.velocity.x.min(0.0);
        }
    }

    /// Lowest allowed target y.
    pub fn bottom_limit(&self) -> f32 {
        (self.viewport.height - self.size.px()).max(0.0)
    }

    /// Rightmost allowed target x.
    pub fn right_limit(&self) -> f32 {
        (self.viewport.width - self.size.px()).max(0.0)
    }

    /// Top-left translation at which to draw the drop this frame.
    pub fn offset(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn size(&self) -> DropSize {
        self.size
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn phase(&self) -> DropPhase {
        if self.grab.is_some() {
            DropPhase::Dragging
        } else if self.is_flowing() && self.target.y >= self.bottom_limit() {
            DropPhase::Settled
        } else {
            DropPhase::Idle
        }
    }

    /// Render scale: squeezed slightly while held.
    pub fn scale(&self) -> f32 {
        if self.is_dragging() { GRAB_SCALE } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);
    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn size() -> DropSize {
        DropSize::new(100)
    }

    fn sim() -> DropSimulator {
        DropSimulator::new(size(), VIEWPORT)
    }

    fn run(sim: &mut DropSimulator, frames: usize) {
        for _ in 0..frames {
            sim.step(FRAME);
        }
    }

    /// Grab the drop at its center and drag it to `to` (pointer coordinates).
    fn drag(sim: &mut DropSimulator, id: u32, to: Vec2) {
        let grab_at = sim.offset() + Vec2::new(50.0, 50.0);
        assert!(sim.handle(&PointerEvent::down(id, grab_at.x, grab_at.y)));
        assert!(sim.handle(&PointerEvent::moved(id, to.x, to.y)));
    }

    #[test]
    fn test_spawns_centered_at_rest() {
        let sim = sim();
        assert_eq!(sim.offset(), Vec2::new(350.0, 100.0));
        assert_eq!(sim.target(), sim.offset());
        assert_eq!(sim.velocity(), Vec2::ZERO);
        assert!(!sim.is_dragging());
        assert_eq!(sim.scale(), 1.0);
    }

    #[test]
    fn test_drag_moves_target_not_position() {
        let mut sim = sim();
        drag(&mut sim, 1, Vec2::new(250.0, 350.0));

        assert_eq!(sim.phase(), DropPhase::Dragging);
        assert_eq!(sim.target(), Vec2::new(200.0, 300.0));
        assert_eq!(sim.offset(), Vec2::new(350.0, 100.0));
        assert_eq!(sim.scale(), GRAB_SCALE);

        run(&mut sim, 120);
        assert!((sim.offset() - sim.target()).length() < 1.0);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut sim = sim();
        assert!(!sim.handle(&PointerEvent::down(1, 10.0, 10.0)));
        assert!(!sim.handle(&PointerEvent::moved(1, 500.0, 500.0)));
        assert!(!sim.is_dragging());
        assert_eq!(sim.target(), Vec2::new(350.0, 100.0));
    }

    #[test]
    fn test_only_capturing_pointer_is_honored() {
        let mut sim = sim();
        drag(&mut sim, 1, Vec2::new(400.0, 150.0));

        // A second pointer can neither grab, move nor release.
        assert!(!sim.handle(&PointerEvent::down(2, 400.0, 150.0)));
        assert!(!sim.handle(&PointerEvent::moved(2, 0.0, 0.0)));
        assert!(!sim.handle(&PointerEvent::up(2, 0.0, 0.0)));
        assert!(sim.is_dragging());
        assert_eq!(sim.target(), Vec2::new(350.0, 100.0));

        assert!(sim.handle(&PointerEvent::up(1, 400.0, 150.0)));
        assert!(!sim.is_dragging());
    }

    #[test]
    fn test_without_capture_any_pointer_tracks() {
        let mut sim = sim();
        sim.set_exclusive_capture(false);
        drag(&mut sim, 1, Vec2::new(400.0, 150.0));

        assert!(sim.handle(&PointerEvent::moved(7, 150.0, 250.0)));
        assert_eq!(sim.target(), Vec2::new(100.0, 200.0));
        assert!(sim.handle(&PointerEvent::up(7, 150.0, 250.0)));
        assert!(!sim.is_dragging());
    }

    #[test]
    fn test_no_drift_before_idle_delay() {
        let mut sim = sim();
        drag(&mut sim, 1, Vec2::new(400.0, 250.0));
        sim.handle(&PointerEvent::up(1, 400.0, 250.0));
        let released_target = sim.target();

        // 2999ms of 1ms frames: target must not move.
        for _ in 0..2999 {
            sim.step(Duration::from_millis(1));
            assert_eq!(sim.target(), released_target);
        }
        assert_eq!(sim.phase(), DropPhase::Idle);

        // The frame that reaches 3000ms drifts by one unit.
        sim.step(Duration::from_millis(1));
        assert_eq!(sim.target().y, released_target.y + GRAVITY_PER_FRAME);

        sim.step(FRAME);
        assert_eq!(sim.target().y, released_target.y + 2.0 * GRAVITY_PER_FRAME);
    }

    #[test]
    fn test_drift_rate_is_per_frame_not_per_time() {
        let mut sim = sim();
        let start = sim.target().y;
        // Never dragged: already past the idle window.
        sim.step(Duration::from_millis(100));
        sim.step(Duration::from_millis(1));
        assert_eq!(sim.target().y, start + 2.0);
    }

    #[test]
    fn test_gravity_keeps_drop_in_bounds() {
        let mut sim = sim();
        drag(&mut sim, 1, Vec2::new(-300.0, -200.0));
        run(&mut sim, 30);
        sim.handle(&PointerEvent::up(1, -300.0, -200.0));
        run(&mut sim, 180);

        let (right, bottom) = (sim.right_limit(), sim.bottom_limit());
        let mut last_target_y = f32::MIN;
        for _ in 0..2000 {
            sim.step(FRAME);
            let t = sim.target();
            assert!((0.0..=right).contains(&t.x), "target x {t:?}");
            assert!((0.0..=bottom).contains(&t.y), "target y {t:?}");
            assert!(t.y >= last_target_y);
            last_target_y = t.y;
        }
        let p = sim.offset();
        assert!(p.x.abs() < 0.5, "position {p:?}");
        assert!((p.y - bottom).abs() < 0.5, "position {p:?}");
        assert_eq!(sim.phase(), DropPhase::Settled);
    }

    #[test]
    fn test_flowing_drop_never_passes_floor() {
        let mut sim = sim();
        let bottom = sim.bottom_limit();
        for frame in 0..1500 {
            sim.step(FRAME);
            let p = sim.offset();
            assert!(p.y <= bottom, "frame {frame}: {p:?}");
        }
        assert_eq!(sim.target().y, bottom);
        assert_eq!(sim.offset().y, bottom);
        assert!(sim.velocity().y <= 0.0);
    }

    #[test]
    fn test_flowing_drop_stays_inside_side_walls() {
        let mut sim = sim();
        // Released just inside the right wall while swinging toward it.
        drag(&mut sim, 1, Vec2::new(795.0, 150.0));
        run(&mut sim, 120);
        sim.handle(&PointerEvent::up(1, 795.0, 150.0));
        sim.clock += IDLE_DELAY;
        sim.position.x = sim.right_limit() - 1.0;
        sim.velocity.x = 6.0;

        let right = sim.right_limit();
        for frame in 0..600 {
            sim.step(FRAME);
            let p = sim.offset();
            assert!((0.0..=right).contains(&p.x), "frame {frame}: {p:?}");
            assert!(p.y <= sim.bottom_limit(), "frame {frame}: {p:?}");
        }
    }

    #[test]
    fn test_drop_below_floor_springs_back_in() {
        let mut sim = sim();
        drag(&mut sim, 1, Vec2::new(400.0, 900.0));
        run(&mut sim, 120);
        sim.handle(&PointerEvent::up(1, 400.0, 900.0));
        let bottom = sim.bottom_limit();
        assert!(sim.offset().y > bottom);

        run(&mut sim, 400);
        // Back on the floor and held there.
        for _ in 0..200 {
            sim.step(FRAME);
            assert!(sim.offset().y <= bottom + 0.01);
        }
        assert!((sim.offset().y - bottom).abs() < 0.5);
    }

    #[test]
    fn test_floor_halves_fast_fall() {
        let mut sim = sim();
        drag(&mut sim, 1, Vec2::new(400.0, 700.0));
        sim.handle(&PointerEvent::up(1, 400.0, 700.0));
        sim.clock += IDLE_DELAY;

        // Target starts below the floor, so the first gravity frame clamps it
        // while the drop is still falling fast.
        sim.velocity = Vec2::new(0.0, 10.0);
        sim.apply_gravity();
        assert_eq!(sim.target().y, sim.bottom_limit());
        assert_eq!(sim.velocity().y, 5.0);
    }

    #[test]
    fn test_resize_applies_next_frame() {
        let mut sim = sim();
        run(&mut sim, 900);
        assert_eq!(sim.target().y, 500.0);

        sim.set_viewport(Viewport::new(400.0, 300.0));
        assert_eq!(sim.target().y, 500.0);
        sim.step(FRAME);
        assert_eq!(sim.target().y, 200.0);
        assert_eq!(sim.target().x, 300.0);
    }

    #[test]
    fn test_reset_discards_prior_state() {
        let mut sim = sim();
        sim.set_exclusive_capture(false);
        drag(&mut sim, 1, Vec2::new(100.0, 500.0));
        run(&mut sim, 40);

        sim.reset(DropSize::new(200), VIEWPORT);
        assert_eq!(sim.offset(), Vec2::new(300.0, SPAWN_TOP));
        assert_eq!(sim.target(), sim.offset());
        assert_eq!(sim.velocity(), Vec2::ZERO);
        assert!(!sim.is_dragging());
        assert!(!sim.exclusive_capture);
    }

    #[test]
    fn test_size_change_is_live() {
        let mut sim = sim();
        sim.set_size(DropSize::new(300));
        assert_eq!(sim.offset(), Vec2::new(350.0, 100.0));
        assert_eq!(sim.bottom_limit(), 300.0);
        assert!(sim.hit_test(Vec2::new(640.0, 390.0)));
    }

    #[test]
    fn test_empty_viewport_skips_work() {
        let mut sim = DropSimulator::new(size(), Viewport::new(0.0, 0.0));
        let before = sim.target();
        run(&mut sim, 10);
        assert_eq!(sim.target(), before);
        assert_eq!(sim.clock, Duration::ZERO);
    }
}
