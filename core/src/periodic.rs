//! Periodic boundary conditions and the minimum image convention.
//!
//! Every function here is pure and is called for each particle pair on every
//! step, so nothing allocates.

use na::Vector3;

/// Maps `x` into `[0, length)`.
///
/// Uses euclidean remainder, so negative coordinates wrap from the upper face.
/// A tiny negative `x` can round up to exactly `length`, which is folded back to `0.0`.
#[inline]
pub fn wrap_coordinate(x: f64, length: f64) -> f64 {
    let wrapped = x.rem_euclid(length);
    if wrapped >= length {
        wrapped - length
    } else {
        wrapped
    }
}

/// Maps every coordinate of `position` into the box `[0, L_k)`.
///
/// # Examples
///
/// ```
/// # use nalgebra::Vector3;
/// # use nvekin_core::periodic::wrap;
/// let bb = Vector3::new(10.0, 10.0, 10.0);
/// let p = wrap(&Vector3::new(-1.0, 12.5, 3.0), &bb);
/// assert_eq!(p, Vector3::new(9.0, 2.5, 3.0));
/// ```
#[inline]
pub fn wrap(position: &Vector3<f64>, boundary_box: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        wrap_coordinate(position.x, boundary_box.x),
        wrap_coordinate(position.y, boundary_box.y),
        wrap_coordinate(position.z, boundary_box.z),
    )
}

/// Signed displacement from `a` to `b` along one periodic axis, choosing the
/// closer of the two periodic images.
///
/// When both images are exactly `length / 2` away the forward (positive)
/// displacement is returned.
#[inline]
pub fn minimum_image_delta(a: f64, b: f64, length: f64) -> f64 {
    let forward = (b - a).rem_euclid(length);
    let backward = (a - b).rem_euclid(length);
    if forward <= backward {
        forward
    } else {
        -backward
    }
}

/// Per-axis [minimum_image_delta], the displacement vector pointing from `a` to `b`.
#[inline]
pub fn minimum_image_vector(a: &Vector3<f64>, b: &Vector3<f64>,
                            boundary_box: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        minimum_image_delta(a.x, b.x, boundary_box.x),
        minimum_image_delta(a.y, b.y, boundary_box.y),
        minimum_image_delta(a.z, b.z, boundary_box.z),
    )
}

#[inline]
pub fn minimum_image_distance(a: &Vector3<f64>, b: &Vector3<f64>,
                              boundary_box: &Vector3<f64>) -> f64 {
    minimum_image_vector(a, b, boundary_box).magnitude()
}
