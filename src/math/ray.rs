use glam::Vec3;

/// Slab test against an axis-aligned box, returns distance or -1.0 on miss
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> f32 {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero components so the inverse stays finite
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.x) } else { 1.0 / ray_dir.x },
        if ray_dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.y) } else { 1.0 / ray_dir.y },
        if ray_dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.z) } else { 1.0 / ray_dir.z },
    );

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return -1.0;
    }

    if t_near < 0.0 {
        if t_far > 0.001 {
            t_far
        } else {
            -1.0
        }
    } else {
        t_near
    }
}

/// Nearest positive hit against a sphere
pub fn intersect_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let half_b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    [(-half_b - sqrt_d) / a, (-half_b + sqrt_d) / a]
        .into_iter()
        .find(|&t| t > 1e-4)
}

/// Outward normal of a box face at a point given in box-local space
pub fn box_normal(local_point: Vec3, half_size: Vec3) -> Vec3 {
    let d = (local_point / half_size.max(Vec3::splat(1e-6))).abs();
    if d.x >= d.y && d.x >= d.z {
        Vec3::new(local_point.x.signum(), 0.0, 0.0)
    } else if d.y >= d.z {
        Vec3::new(0.0, local_point.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, local_point.z.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_aabb_hit() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, 2.0, 2.0),
            Vec3::new(10.0, 3.0, 3.0),
        );
        assert!(t < 0.0);
    }

    #[test]
    fn test_intersect_aabb_inside() {
        let t = intersect_aabb(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::X,
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_sphere_front() {
        let t = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersect_sphere_behind_misses() {
        assert!(intersect_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    }

    #[test]
    fn test_box_normal_picks_dominant_face() {
        let half = Vec3::new(1.0, 2.0, 1.0);
        assert_eq!(box_normal(Vec3::new(0.2, 2.0, 0.1), half), Vec3::Y);
        assert_eq!(box_normal(Vec3::new(-1.0, 0.5, 0.1), half), Vec3::NEG_X);
    }
}
