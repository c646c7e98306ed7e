// crates/fixoo-core/src/location.rs

use crate::geo::Coordinate;

/// Outcome of a single geolocation request.
///
/// Delivered once per request, no streaming updates assumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationFix {
    Granted(Coordinate),
    /// The user declined the permission prompt.
    PermissionDenied,
    /// The environment has no location capability at all.
    Unavailable,
}

/// Injected asynchronous-in-spirit geolocation capability.
///
/// Modeled as a trait rather than an ambient global so it can be mocked
/// deterministically in tests. A provider is asked once per finder session;
/// until it is consulted the session stays in [`LocationState::Pending`].
pub trait LocationProvider {
    fn request_location(&self) -> LocationFix;
}

/// A provider that always answers with a fixed coordinate.
/// Used by the CLI's `--near` flag and by tests.
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn request_location(&self) -> LocationFix {
        LocationFix::Granted(self.0)
    }
}

/// A provider for environments without location services.
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn request_location(&self) -> LocationFix {
        LocationFix::Unavailable
    }
}

/// Session-level location state.
///
/// `Pending` and the two degraded outcomes are distinct, stable states;
/// ranking proceeds on the no-coordinate branch for all three, so a slow
/// or refused provider never blocks search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Pending,
    Granted(Coordinate),
    Denied,
    Unavailable,
}

impl LocationState {
    /// The resolved coordinate, if any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LocationState::Granted(pos) => Some(*pos),
            _ => None,
        }
    }

    /// True for the denied/unavailable outcomes, the states a UI may
    /// surface as an informational, non-blocking banner.
    pub fn is_degraded(&self) -> bool {
        matches!(self, LocationState::Denied | LocationState::Unavailable)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LocationState::Pending)
    }
}

impl From<LocationFix> for LocationState {
    fn from(fix: LocationFix) -> Self {
        match fix {
            LocationFix::Granted(pos) => LocationState::Granted(pos),
            LocationFix::PermissionDenied => LocationState::Denied,
            LocationFix::Unavailable => LocationState::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_maps_into_state() {
        let pos = Coordinate::new(31.6295, -7.9811);
        assert_eq!(
            LocationState::from(LocationFix::Granted(pos)),
            LocationState::Granted(pos)
        );
        assert_eq!(
            LocationState::from(LocationFix::PermissionDenied),
            LocationState::Denied
        );
        assert_eq!(
            LocationState::from(LocationFix::Unavailable),
            LocationState::Unavailable
        );
    }

    #[test]
    fn pending_is_the_default_and_has_no_coordinate() {
        let state = LocationState::default();
        assert!(state.is_pending());
        assert!(state.coordinate().is_none());
        assert!(!state.is_degraded());
    }

    #[test]
    fn degraded_states_are_stable_non_errors() {
        assert!(LocationState::Denied.is_degraded());
        assert!(LocationState::Unavailable.is_degraded());
        assert!(LocationState::Denied.coordinate().is_none());
    }
}
