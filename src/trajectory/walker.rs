//! Waypoint-following motion: advance a position toward the current target
//! point at fixed speed, wrapping the target index around the loop on
//! arrival.

use glam::Vec3;

use super::Trajectory;

/// Distance below which a walker counts as arrived at its target waypoint.
pub const ARRIVE_TOLERANCE: f32 = 0.05;

/// Per-object follower state: a position and the index of the waypoint it is
/// currently moving toward. The index is always a valid element index into
/// the trajectory (enforced by modulo wrap on advance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walker {
    position: Vec3,
    target: usize,
}

impl Walker {
    /// Start at the trajectory's first waypoint, targeting index 0.
    #[must_use]
    pub fn new(trajectory: &Trajectory) -> Self {
        Self {
            position: trajectory.point(0),
            target: 0,
        }
    }

    /// Current world-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Index of the waypoint currently being approached.
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Re-seat the walker on a (possibly different) trajectory: position
    /// snaps to the first waypoint and the target index resets to 0.
    pub fn reset(&mut self, trajectory: &Trajectory) {
        self.position = trajectory.point(0);
        self.target = 0;
    }

    /// Advance toward the current target by `speed * elapsed` world units.
    ///
    /// Within `tolerance` of the target (or exactly on it), the target index
    /// advances (wrapping) and the position is left unchanged this step —
    /// leftover motion budget is deliberately not carried into the next leg.
    /// A single-waypoint trajectory therefore pins the walker in place.
    pub fn step(
        &mut self,
        trajectory: &Trajectory,
        elapsed: f32,
        speed: f32,
        tolerance: f32,
    ) {
        let target = trajectory.point(self.target);
        let delta = target - self.position;
        let dist = delta.length();

        // dist == 0 makes normalization undefined; fold it into arrival.
        if dist < tolerance || dist <= f32::EPSILON {
            self.target = (self.target + 1) % trajectory.len();
            return;
        }

        self.position += delta / dist * speed * elapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point_line() -> Trajectory {
        Trajectory::new(vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]).unwrap()
    }

    #[test]
    fn moves_toward_target_at_fixed_speed() {
        // trajectory [(0,0,0),(1,0,0)], position (0,0,0), speed 1, dt 0.5:
        // target 0 is distance 0 away, so the first step only advances the
        // index; seat the walker off-target instead.
        let t = two_point_line();
        let mut w = Walker::new(&t);
        w.step(&t, 0.5, 1.0, ARRIVE_TOLERANCE); // arrive at point 0, index -> 1
        assert_eq!(w.target_index(), 1);

        w.step(&t, 0.5, 1.0, ARRIVE_TOLERANCE);
        assert!((w.position() - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
        assert_eq!(w.target_index(), 1);
    }

    #[test]
    fn arrival_advances_index_without_moving() {
        let t = two_point_line();
        let mut w = Walker::new(&t);
        w.position = Vec3::new(0.98, 0.0, 0.0);
        w.target = 1;

        // distance 0.02 < 0.05 tolerance: index wraps to 0, position holds
        w.step(&t, 0.5, 1.0, ARRIVE_TOLERANCE);
        assert_eq!(w.target_index(), 0);
        assert_eq!(w.position(), Vec3::new(0.98, 0.0, 0.0));
    }

    #[test]
    fn single_point_trajectory_pins_the_walker() {
        let t = Trajectory::new(vec![Vec3::new(1.0, 2.0, 3.0)]).unwrap();
        let mut w = Walker::new(&t);
        for _ in 0..100 {
            w.step(&t, 0.016, 2.0, ARRIVE_TOLERANCE);
            assert_eq!(w.target_index(), 0);
            assert_eq!(w.position(), Vec3::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn target_index_stays_in_bounds() {
        let t = Trajectory::square(Vec3::new(0.0, 0.0, -3.0), 2.0);
        let mut w = Walker::new(&t);
        for _ in 0..10_000 {
            w.step(&t, 0.016, 3.0, ARRIVE_TOLERANCE);
            assert!(w.target_index() < t.len());
        }
    }

    #[test]
    fn walker_converges_around_the_loop() {
        let t = Trajectory::square(Vec3::ZERO, 2.0);
        let mut w = Walker::new(&t);
        let mut visited = [false; 4];
        for _ in 0..20_000 {
            w.step(&t, 0.016, 1.0, ARRIVE_TOLERANCE);
            visited[w.target_index()] = true;
        }
        assert!(visited.iter().all(|&v| v), "walker never completed the loop");
    }

    #[test]
    fn reset_snaps_to_new_trajectory_start() {
        let t = two_point_line();
        let mut w = Walker::new(&t);
        w.step(&t, 1.0, 1.0, ARRIVE_TOLERANCE);
        w.step(&t, 1.0, 1.0, ARRIVE_TOLERANCE);

        let replacement =
            Trajectory::new(vec![Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO]).unwrap();
        w.reset(&replacement);
        assert_eq!(w.position(), Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(w.target_index(), 0);
    }
}
