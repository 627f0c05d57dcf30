use na::{Matrix4, Point3, Rotation3, Unit, Vector3};

pub type Fp = f64;
pub type Vec3f = Vector3<Fp>;
pub type Point3f = Point3<Fp>;
pub type Mat4f = Matrix4<Fp>;

// All three compose on the right, so the new step acts in the local frame
// set up by whatever was already on the matrix.

pub fn translate(transform: &Mat4f, offset: &Vec3f) -> Mat4f {
    transform * Mat4f::new_translation(offset)
}

pub fn scale(transform: &Mat4f, factors: &Vec3f) -> Mat4f {
    transform * Mat4f::new_nonuniform_scaling(factors)
}

/// Returns `None` only for a zero or non-finite axis; any other length is
/// normalized.
pub fn rotate(transform: &Mat4f, angle_rad: Fp, axis: &Vec3f) -> Option<Mat4f> {
    let norm = axis.norm();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    let axis = Unit::new_unchecked(axis / norm);
    Some(transform * Rotation3::from_axis_angle(&axis, angle_rad).to_homogeneous())
}

pub fn transform_point(transform: &Mat4f, point: &Point3f) -> Point3f {
    transform.transform_point(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translate_then_scale_applies_scale_first() {
        let moved = translate(&Mat4f::identity(), &Vec3f::new(1.0, 0.0, 0.0));
        let m = scale(&moved, &Vec3f::repeat(2.0));
        assert_relative_eq!(
            transform_point(&m, &Point3f::origin()),
            Point3f::new(1.0, 0.0, 0.0)
        );
        assert_relative_eq!(
            transform_point(&m, &Point3f::new(1.0, 0.0, 0.0)),
            Point3f::new(3.0, 0.0, 0.0)
        );
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let m = rotate(&Mat4f::identity(), std::f64::consts::FRAC_PI_2, &Vec3f::z()).unwrap();
        assert_relative_eq!(
            transform_point(&m, &Point3f::new(1.0, 0.0, 0.0)),
            Point3f::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotate_normalizes_axis() {
        let a = rotate(&Mat4f::identity(), 0.3, &Vec3f::new(0.0, 0.0, 5.0)).unwrap();
        let b = rotate(&Mat4f::identity(), 0.3, &Vec3f::z()).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn rotate_accepts_tiny_axis() {
        let a = rotate(&Mat4f::identity(), 0.3, &Vec3f::new(0.0, 0.0, 1e-6)).unwrap();
        let b = rotate(&Mat4f::identity(), 0.3, &Vec3f::z()).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn rotate_rejects_zero_axis() {
        assert!(rotate(&Mat4f::identity(), 1.0, &Vec3f::zeros()).is_none());
        assert!(rotate(&Mat4f::identity(), 1.0, &Vec3f::new(Fp::NAN, 0.0, 1.0)).is_none());
    }

    #[test]
    fn composition_does_not_touch_input() {
        let original = Mat4f::identity();
        let moved = translate(&original, &Vec3f::new(0.0, 2.0, 0.0));
        assert_eq!(original, Mat4f::identity());
        assert_ne!(moved, original);
    }
}
