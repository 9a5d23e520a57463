//! Vector helpers and geographic coordinates
//!
//! Points are plain `glam::DVec3` values. The helpers here add the few sphere
//! operations the mesh needs on top of what glam already provides
//! (`length`, `distance`, `distance_squared`).

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Push `v` out (or in) along its own direction so it sits on a sphere of `radius`,
/// then scale by `percent` clamped to `[0, 1]`
///
/// A zero vector has no direction and is returned unchanged.
#[inline]
pub fn project_to_radius(v: DVec3, radius: f64, percent: f64) -> DVec3 {
    let length = v.length();
    if length == 0.0 {
        return v;
    }
    let percent = percent.clamp(0.0, 1.0);
    v * (radius / length * percent)
}

/// Centroid of a triangle
#[inline]
pub fn centroid(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (a + b + c) / 3.0
}

/// Linear blend between `from` (at 0.0) and `to` (at 1.0)
#[inline]
pub fn blend(from: DVec3, to: DVec3, t: f64) -> DVec3 {
    from * (1.0 - t) + to * t
}

/// Split the segment `a → b` into `count` equal steps
///
/// Returns `count + 1` positions: `a`, the interior steps, then `b`. The end
/// points are copied through untouched so they compare equal to their sources.
pub fn subdivide_segment(a: DVec3, b: DVec3, count: usize) -> Vec<DVec3> {
    let mut segment = Vec::with_capacity(count + 1);
    segment.push(a);
    for i in 1..count {
        segment.push(blend(a, b, i as f64 / count as f64));
    }
    if count > 0 {
        segment.push(b);
    }
    segment
}

/// Unit normal of the plane through three points, following the right-hand rule
#[inline]
pub fn plane_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Latitude/longitude of a point on the sphere, in degrees
///
/// `+y` is the north pole. Longitude zero faces `+z` and increases toward `+x`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Degrees north of the equator, in `[-90, 90]`
    pub latitude: f64,
    /// Degrees east of the prime meridian, in `[-180, 180)`
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate from explicit degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert a position to latitude/longitude
    ///
    /// The polar angle is measured from `+y`; the azimuth is `atan2(x, z)`.
    /// Only the direction of `position` matters.
    pub fn from_position(position: DVec3) -> Self {
        let length = position.length();
        if length == 0.0 {
            return Self::new(0.0, 0.0);
        }

        let polar = (position.y / length).clamp(-1.0, 1.0).acos();
        let azimuth = position.x.atan2(position.z);

        let latitude = 90.0 - polar.to_degrees();
        let longitude = (azimuth.to_degrees() + 180.0).rem_euclid(360.0) - 180.0;

        Self::new(latitude, longitude)
    }

    /// Unit vector pointing at this coordinate (inverse of `from_position`)
    pub fn to_unit_vector(self) -> DVec3 {
        let polar = (90.0 - self.latitude).to_radians();
        let azimuth = self.longitude.to_radians();
        DVec3::new(
            polar.sin() * azimuth.sin(),
            polar.cos(),
            polar.sin() * azimuth.cos(),
        )
    }
}
