//! Duck and head motion
//!
//! Steering strafes the duck along Y and rolls the head toward the turn; with
//! no steering the roll eases back to level. The head also bobs on a slow
//! sine cycle the whole time the round is active.

use glam::{Quat, Vec3};
use std::f32::consts::TAU;

use super::state::{Duck, Head};
use super::tick::TickInput;
use crate::settings::Settings;

/// Axis the head bobs around
const BOB_AXIS: Vec3 = Vec3::Y;
/// Axis the head rolls around when steering
const ROLL_AXIS: Vec3 = Vec3::Z;

/// Advance the bob cycle by `dt`, keeping the phase in [0, 1)
pub fn advance_wobble(head: &mut Head, dt: f32, period: f32) {
    head.wobble_phase += dt / period;
    head.wobble_phase -= head.wobble_phase.floor();
    // floor subtraction can round up to exactly 1.0 for tiny negatives
    if head.wobble_phase >= 1.0 {
        head.wobble_phase = 0.0;
    }
}

/// Head rotation for the current bob phase, before steering roll
pub fn bob_rotation(head: &Head, amplitude_degrees: f32) -> Quat {
    let angle = (amplitude_degrees * (head.wobble_phase * TAU).sin()).to_radians();
    head.base_rotation() * Quat::from_axis_angle(BOB_AXIS, angle)
}

/// Move `tilt` toward zero by `step` without crossing it
#[inline]
fn relax_toward_zero(tilt: f32, step: f32) -> f32 {
    if tilt > 0.0 {
        (tilt - step).max(0.0)
    } else {
        (tilt + step).min(0.0)
    }
}

/// Apply one tick of steering and head animation
pub fn update_actor(duck: &mut Duck, head: &mut Head, input: &TickInput, dt: f32, settings: &Settings) {
    advance_wobble(head, dt, settings.wobble_period);
    let bob = bob_rotation(head, settings.wobble_degrees);

    let turn = dt * settings.tilt_rate;
    let speed = if input.boost {
        settings.boost_speed
    } else {
        settings.steer_speed
    };
    let max_move = dt * speed;
    let max_tilt = settings.max_tilt_degrees;

    // y - min(max_move, y - bound) == max(y - max_move, bound); from outside
    // the lane the step is negative and pulls the duck onto the bound
    if input.steer_left {
        head.tilt_degrees = (head.tilt_degrees + turn).min(max_tilt);
        let mut y = duck.position.y - max_move;
        if settings.enforce_lane_bounds {
            y = y.max(settings.lane_min_y);
        }
        duck.position.y = y;
    }
    if input.steer_right {
        head.tilt_degrees = (head.tilt_degrees - turn).max(-max_tilt);
        let mut y = duck.position.y + max_move;
        if settings.enforce_lane_bounds {
            y = y.min(settings.lane_max_y);
        }
        duck.position.y = y;
    }
    if !input.steer_left && !input.steer_right {
        head.tilt_degrees = relax_toward_zero(head.tilt_degrees, turn);
    }

    head.rotation = bob * Quat::from_axis_angle(ROLL_AXIS, head.tilt_degrees.to_radians());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn left() -> TickInput {
        TickInput {
            steer_left: true,
            ..Default::default()
        }
    }

    fn right() -> TickInput {
        TickInput {
            steer_right: true,
            ..Default::default()
        }
    }

    fn actors() -> (Duck, Head) {
        (Duck::new(Vec3::ZERO), Head::new(Quat::IDENTITY))
    }

    #[test]
    fn test_wobble_wraps() {
        let mut head = Head::new(Quat::IDENTITY);
        advance_wobble(&mut head, 3.0, 6.0);
        assert!((head.wobble_phase - 0.5).abs() < 1e-6);
        advance_wobble(&mut head, 4.5, 6.0);
        assert!((head.wobble_phase - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_tilt_clamps_at_limit() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();

        // 500 deg/s at 10 ms per tick reaches 50 degrees after 10 ticks
        for _ in 0..20 {
            update_actor(&mut duck, &mut head, &left(), 0.01, &settings);
            assert!(head.tilt_degrees <= 50.0);
        }
        assert_eq!(head.tilt_degrees, 50.0);

        for _ in 0..20 {
            update_actor(&mut duck, &mut head, &right(), 0.01, &settings);
        }
        assert_eq!(head.tilt_degrees, -50.0);
    }

    #[test]
    fn test_tilt_relaxes_without_overshoot() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();
        head.tilt_degrees = 12.0;

        update_actor(&mut duck, &mut head, &TickInput::default(), 0.01, &settings);
        assert!((head.tilt_degrees - 7.0).abs() < 1e-4);
        update_actor(&mut duck, &mut head, &TickInput::default(), 0.1, &settings);
        assert_eq!(head.tilt_degrees, 0.0);

        head.tilt_degrees = -3.0;
        update_actor(&mut duck, &mut head, &TickInput::default(), 0.1, &settings);
        assert_eq!(head.tilt_degrees, 0.0);
    }

    #[test]
    fn test_steering_moves_duck() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();

        update_actor(&mut duck, &mut head, &left(), 0.1, &settings);
        assert!((duck.position.y + 1.0).abs() < 1e-5);

        let boosted = TickInput {
            steer_right: true,
            boost: true,
            ..Default::default()
        };
        update_actor(&mut duck, &mut head, &boosted, 0.1, &settings);
        assert!((duck.position.y - 2.0).abs() < 1e-5);
        assert_eq!(duck.position.x, 0.0);
        assert_eq!(duck.position.z, 0.0);
    }

    #[test]
    fn test_both_held_cancels() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();
        let both = TickInput {
            steer_left: true,
            steer_right: true,
            ..Default::default()
        };
        update_actor(&mut duck, &mut head, &both, 0.05, &settings);
        assert!(duck.position.y.abs() < 1e-5);
        assert!(head.tilt_degrees.abs() < 1e-4);
    }

    #[test]
    fn test_lane_bounds_hold() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();

        for _ in 0..100 {
            update_actor(&mut duck, &mut head, &left(), 0.1, &settings);
        }
        assert_eq!(duck.position.y, settings.lane_min_y);

        for _ in 0..100 {
            update_actor(&mut duck, &mut head, &right(), 0.1, &settings);
        }
        assert_eq!(duck.position.y, settings.lane_max_y);
    }

    #[test]
    fn test_steering_from_outside_lane_lands_on_bound() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();

        duck.position.y = -10.0;
        update_actor(&mut duck, &mut head, &left(), 0.1, &settings);
        assert_eq!(duck.position.y, -6.0);

        duck.position.y = 10.0;
        update_actor(&mut duck, &mut head, &right(), 0.1, &settings);
        assert_eq!(duck.position.y, 6.0);

        // Steering away from the far bound is a normal step
        duck.position.y = 10.0;
        update_actor(&mut duck, &mut head, &left(), 0.1, &settings);
        assert!((duck.position.y - 9.0).abs() < 1e-5);

        // No steering leaves it where it is
        duck.position.y = -10.0;
        update_actor(&mut duck, &mut head, &TickInput::default(), 0.1, &settings);
        assert_eq!(duck.position.y, -10.0);
    }

    #[test]
    fn test_negative_dt_keeps_wobble_in_range() {
        let mut head = Head::new(Quat::IDENTITY);
        advance_wobble(&mut head, -1e-9, 6.0);
        assert!((0.0..1.0).contains(&head.wobble_phase));
        advance_wobble(&mut head, -2.0, 6.0);
        assert!((0.0..1.0).contains(&head.wobble_phase));
    }

    #[test]
    fn test_unbounded_lane() {
        let settings = Settings {
            enforce_lane_bounds: false,
            ..Default::default()
        };
        let (mut duck, mut head) = actors();
        for _ in 0..100 {
            update_actor(&mut duck, &mut head, &left(), 0.1, &settings);
        }
        assert!(duck.position.y < settings.lane_min_y);
    }

    #[test]
    fn test_level_head_is_pure_bob() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();
        update_actor(&mut duck, &mut head, &TickInput::default(), 1.5, &settings);

        // Quarter cycle: peak bob of 7 degrees about Y
        let expected = Quat::from_axis_angle(Vec3::Y, 7.0_f32.to_radians());
        assert!(head.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_roll_follows_tilt() {
        let settings = Settings::default();
        let (mut duck, mut head) = actors();
        // Land on phase 0.5 where sin is ~0, so only the roll remains
        update_actor(&mut duck, &mut head, &left(), 3.0, &settings);
        assert_eq!(head.tilt_degrees, 50.0);
        let expected = Quat::from_axis_angle(Vec3::Z, 50.0_f32.to_radians());
        assert!(head.rotation.abs_diff_eq(expected, 1e-4));
    }

    proptest! {
        #[test]
        fn prop_tilt_and_wobble_stay_in_range(
            steps in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), 0.0001f32..0.5), 1..300),
        ) {
            let settings = Settings::default();
            let (mut duck, mut head) = actors();
            for (steer_left, steer_right, boost, dt) in steps {
                let input = TickInput { steer_left, steer_right, boost, restart: false };
                update_actor(&mut duck, &mut head, &input, dt, &settings);
                prop_assert!((-50.0..=50.0).contains(&head.tilt_degrees));
                prop_assert!((0.0..1.0).contains(&head.wobble_phase));
                prop_assert!(duck.position.y >= settings.lane_min_y);
                prop_assert!(duck.position.y <= settings.lane_max_y);
            }
        }
    }
}
