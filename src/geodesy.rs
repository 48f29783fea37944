// Geodesy module - WGS84 coordinate conversion and frame rotations
//
// Provides the conversions the aeronautical state factory depends on:
// - LLH (Latitude/Longitude/Height) to ECEF (Earth-Centered Earth-Fixed)
// - NED (North-East-Down) to ECEF rotation matrix
// - Body to NED rotation matrix
//
// Uses WGS84 ellipsoid model for Earth

use nalgebra::Matrix3;
use std::f64::consts::PI;

/// Degrees to radians conversion factor
const DTOR: f64 = PI / 180.0;

/// WGS84 ellipsoid semi-major axis (equatorial radius) in meters
pub const WGS84_A: f64 = 6378137.0;

/// WGS84 ellipsoid flattening factor
pub const WGS84_F: f64 = 1.0 / 298.257223563;

/// WGS84 ellipsoid semi-minor axis (polar radius) in meters
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

/// WGS84 ellipsoid eccentricity squared
pub const WGS84_ECC_SQ: f64 = 1.0 - (WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);

/// Converts from WGS84 lat/lon/height to ellipsoid-earth ECEF coordinates
///
/// # Arguments
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees
/// * `alt` - Altitude in meters above WGS84 ellipsoid
///
/// # Returns
/// ECEF coordinates [x, y, z] in meters
pub fn llh2ecef(lat: f64, lon: f64, alt: f64) -> [f64; 3] {
    let lat_rad = lat * DTOR;
    let lon_rad = lon * DTOR;

    let slat = lat_rad.sin();
    let slon = lon_rad.sin();
    let clat = lat_rad.cos();
    let clon = lon_rad.cos();

    // Radius of curvature in prime vertical
    let d = (1.0 - (slat * slat * WGS84_ECC_SQ)).sqrt();
    let rn = WGS84_A / d;

    [
        (rn + alt) * clat * clon,
        (rn + alt) * clat * slon,
        (rn * (1.0 - WGS84_ECC_SQ) + alt) * slat,
    ]
}

/// Builds the NED->ECEF rotation matrix for a geodetic point
///
/// # Arguments
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees
pub fn ned_to_ecef_matrix(lat: f64, lon: f64) -> Matrix3<f64> {
    let lat_rad = lat * DTOR;
    let lon_rad = lon * DTOR;

    let slat = lat_rad.sin();
    let slon = lon_rad.sin();
    let clat = lat_rad.cos();
    let clon = lon_rad.cos();

    Matrix3::new(
        -slat * clon, -slat * slon, clat,
        -slon,        clon,         0.0,
        -clat * clon, -clat * slon, -slat,
    )
}

/// Builds the Body->NED rotation matrix from a roll/pitch/yaw attitude
///
/// # Arguments
/// * `roll`, `pitch`, `yaw` - Euler angles in radians
pub fn body_to_ned_matrix(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let cr = roll.cos();
    let sr = roll.sin();
    let cp = pitch.cos();
    let sp = pitch.sin();
    let cy = yaw.cos();
    let sy = yaw.sin();

    Matrix3::new(
        cy * cp, -sy * cr + cy * sp * sr, sy * sr + cy * sp * cr,
        sy * cp, cy * cr + sy * sp * sr,  -cy * sr + sy * sp * cr,
        -sp,     cp * sr,                 cp * cr,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_llh2ecef_equator() {
        // Point on equator at prime meridian
        let [x, y, z] = llh2ecef(0.0, 0.0, 0.0);

        // Should be approximately (WGS84_A, 0, 0)
        assert!((x - WGS84_A).abs() < EPSILON);
        assert!(y.abs() < EPSILON);
        assert!(z.abs() < EPSILON);
    }

    #[test]
    fn test_llh2ecef_north_pole() {
        let [x, y, z] = llh2ecef(90.0, 0.0, 0.0);

        // Should be approximately (0, 0, WGS84_B)
        assert!(x.abs() < EPSILON);
        assert!(y.abs() < EPSILON);
        assert!((z - WGS84_B).abs() < 1.0); // Within 1 meter
    }

    #[test]
    fn test_llh2ecef_altitude_adds_radially_at_equator() {
        let [x, y, z] = llh2ecef(0.0, 0.0, 1000.0);
        assert!((x - (WGS84_A + 1000.0)).abs() < EPSILON);
        assert!(y.abs() < EPSILON);
        assert!(z.abs() < EPSILON);
    }

    #[test]
    fn test_ned_to_ecef_is_rotation() {
        // M * M^T == I for any lat/lon
        let test_points = vec![(0.0, 0.0), (51.5, -0.1), (-33.9, 18.4), (89.0, 170.0)];
        for (lat, lon) in test_points {
            let m = ned_to_ecef_matrix(lat, lon);
            let prod = m * m.transpose();
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!(
                        (prod[(i, j)] - expected).abs() < EPSILON,
                        "lat={} lon={} ({},{}) = {}",
                        lat, lon, i, j, prod[(i, j)]
                    );
                }
            }
        }
    }

    #[test]
    fn test_ned_to_ecef_row_structure_at_origin() {
        // At lat=0, lon=0 the rows reduce to (0,0,1), (0,1,0), (-1,0,0)
        let m = ned_to_ecef_matrix(0.0, 0.0);
        let north = m * Vector3::new(1.0, 0.0, 0.0);
        let east = m * Vector3::new(0.0, 1.0, 0.0);

        assert!((north - Vector3::new(0.0, 0.0, -1.0)).norm() < EPSILON);
        assert!((east - Vector3::new(0.0, 1.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn test_body_to_ned_identity_at_zero_attitude() {
        let m = body_to_ned_matrix(0.0, 0.0, 0.0);
        let ident: Matrix3<f64> = Matrix3::identity();
        for i in 0..3 {
            for j in 0..3 {
                assert!((m[(i, j)] - ident[(i, j)]).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_body_to_ned_yaw_quarter_turn() {
        // 90 degree yaw turns the body x axis (forward) to east
        let m = body_to_ned_matrix(0.0, 0.0, PI / 2.0);
        let forward = m * Vector3::new(1.0, 0.0, 0.0);
        assert!((forward - Vector3::new(0.0, 1.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn test_body_to_ned_is_rotation() {
        let m = body_to_ned_matrix(0.3, -0.7, 2.1);
        let prod = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod[(i, j)] - expected).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_constants() {
        assert!((WGS84_A - 6378137.0).abs() < EPSILON);
        assert!((WGS84_F - 1.0 / 298.257223563).abs() < 1e-15);

        let expected_b = WGS84_A * (1.0 - WGS84_F);
        assert!((WGS84_B - expected_b).abs() < EPSILON);

        // Eccentricity matches the original constant e = 8.1819190842622e-2
        assert!((WGS84_ECC_SQ.sqrt() - 8.1819190842622e-2).abs() < 1e-10);
    }
}
