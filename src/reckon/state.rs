// Kinematic entity state in the ECEF frame

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geodesy;

/// Kinematic state of a single entity, all vectors in a right-handed
/// ECEF frame.
///
/// Plain value type: freely copyable, never mutated in place. The
/// default value is the all-zero state, which the reckoners also use as
/// the "no sample ingested yet" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// ECEF position vector (x, y, z) (m)
    pub location: [f64; 3],
    /// ECEF orientation vector (roll, pitch, yaw) (radians)
    pub orientation: [f64; 3],
    /// ECEF linear velocity vector (x, y, z) (m/s)
    pub linear_velocity: [f64; 3],
    /// ECEF linear acceleration vector (x, y, z) (m/s^2)
    pub linear_acceleration: [f64; 3],
    /// ECEF angular velocity vector (roll rate, pitch rate, yaw rate) (radians/s)
    pub angular_velocity: [f64; 3],
}

impl KinematicState {
    /// Creates a `KinematicState` from common aeronautical parameters.
    ///
    /// Converts the geodetic position to ECEF over the WGS84 ellipsoid,
    /// then rotates the NED-frame vectors (orientation, linear
    /// velocity) through the NED->ECEF matrix and the body-frame
    /// vectors (linear acceleration, angular velocity) through the
    /// composed Body->ECEF matrix.
    ///
    /// Warning: accelerometers and IMUs typically report PROPER
    /// acceleration. Callers must convert to body acceleration by
    /// subtracting the free-fall vector (0, 0, -9.80665) before calling
    /// this; no gravity compensation is performed here.
    ///
    /// # Arguments
    /// * `lat_lon_alt` - geodetic position (latitude in degrees,
    ///   longitude in degrees, altitude in m above the WGS84 ellipsoid)
    /// * `orientation_ned` - attitude in the NED frame (roll, pitch, yaw) (radians)
    /// * `linear_velocity_ned` - velocity in the NED frame (north, east, down) (m/s)
    /// * `linear_acceleration_body` - acceleration in the body frame (x, y, z) (m/s^2)
    /// * `angular_velocity_body` - angular velocity in the body frame
    ///   (roll rate, pitch rate, yaw rate) (radians/s)
    pub fn from_aeronautical_frame(
        lat_lon_alt: [f64; 3],
        orientation_ned: [f64; 3],
        linear_velocity_ned: [f64; 3],
        linear_acceleration_body: [f64; 3],
        angular_velocity_body: [f64; 3],
    ) -> Self {
        let [lat, lon, alt] = lat_lon_alt;
        let [roll, pitch, yaw] = orientation_ned;

        let location = geodesy::llh2ecef(lat, lon, alt);

        let ned_to_ecef = geodesy::ned_to_ecef_matrix(lat, lon);
        let body_to_ned = geodesy::body_to_ned_matrix(roll, pitch, yaw);
        let body_to_ecef = ned_to_ecef * body_to_ned;

        KinematicState {
            location,
            orientation: (ned_to_ecef * Vector3::from(orientation_ned)).into(),
            linear_velocity: (ned_to_ecef * Vector3::from(linear_velocity_ned)).into(),
            linear_acceleration: (body_to_ecef * Vector3::from(linear_acceleration_body)).into(),
            angular_velocity: (body_to_ecef * Vector3::from(angular_velocity_body)).into(),
        }
    }
}
