//! Read-only access to the observer's position

use crate::core::types::GeoPoint;

/// Source of the device's last known position
///
/// `None` means no fix is available.
pub trait LocationProvider {
    fn last_location(&self) -> Option<GeoPoint>;
}

/// Provider pinned to a fixed position, or to no fix at all
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocationProvider {
    location: Option<GeoPoint>,
}

impl FixedLocationProvider {
    pub fn new(location: GeoPoint) -> Self {
        Self { location: Some(location) }
    }

    /// Provider that never has a fix
    pub fn no_fix() -> Self {
        Self { location: None }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn last_location(&self) -> Option<GeoPoint> {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_provider_reports_its_position() {
        let here = GeoPoint::new(40.4168, -3.7038);
        assert_eq!(FixedLocationProvider::new(here).last_location(), Some(here));
    }

    #[test]
    fn test_no_fix_reports_none() {
        assert_eq!(FixedLocationProvider::no_fix().last_location(), None);
        assert_eq!(FixedLocationProvider::default().last_location(), None);
    }
}
