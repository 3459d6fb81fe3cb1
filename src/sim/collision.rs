//! Duck vs obstacle proximity
//!
//! Obstacles are spheres; the duck is treated as a point. Clearance is the
//! signed distance from the duck to an obstacle's surface.

use glam::Vec3;

use super::state::Obstacle;

/// Signed distance from `p` to a sphere
#[inline]
pub fn sd_sphere(p: Vec3, center: Vec3, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Smallest clearance between the duck and any obstacle, if there are any
pub fn min_clearance(duck_pos: Vec3, obstacles: &[Obstacle]) -> Option<f32> {
    obstacles
        .iter()
        .map(|o| sd_sphere(duck_pos, o.position, o.radius()))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Clearance below `threshold`, if the duck is hit
pub fn check_hit(duck_pos: Vec3, obstacles: &[Obstacle], threshold: f32) -> Option<f32> {
    min_clearance(duck_pos, obstacles).filter(|&clearance| clearance < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sd_sphere() {
        assert!((sd_sphere(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO, 1.0) - 4.0).abs() < 1e-6);
        assert!(sd_sphere(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), 1.0) < 0.0);
    }

    #[test]
    fn test_min_clearance_picks_nearest() {
        let obstacles = [
            Obstacle::new(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(1.0)),
            Obstacle::new(Vec3::new(0.0, 4.0, 0.0), Vec3::splat(0.5)),
            Obstacle::new(Vec3::new(-6.0, 0.0, 0.0), Vec3::splat(2.0)),
        ];
        let clearance = min_clearance(Vec3::ZERO, &obstacles).unwrap();
        assert!((clearance - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_field_has_no_clearance() {
        assert_eq!(min_clearance(Vec3::ZERO, &[]), None);
        assert_eq!(check_hit(Vec3::ZERO, &[], 1.0), None);
    }

    #[test]
    fn test_hit_threshold_is_strict() {
        // Clearance exactly at the threshold is not a hit
        let obstacles = [Obstacle::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(1.0))];
        assert_eq!(check_hit(Vec3::ZERO, &obstacles, 1.0), None);

        let obstacles = [Obstacle::new(Vec3::new(1.9, 0.0, 0.0), Vec3::splat(1.0))];
        assert!(check_hit(Vec3::ZERO, &obstacles, 1.0).is_some());
    }

    #[test]
    fn test_zero_scale_close_obstacle_hits() {
        let obstacles = [Obstacle::new(Vec3::new(0.0, 0.5, 0.0), Vec3::ZERO)];
        let clearance = check_hit(Vec3::ZERO, &obstacles, 1.0).unwrap();
        assert!((clearance - 0.5).abs() < 1e-6);
    }
}
