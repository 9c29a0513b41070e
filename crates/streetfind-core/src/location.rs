// crates/streetfind-core/src/location.rs
use crate::error::LocationError;
use crate::model::Coord;

/// Answer to a location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Device position source.
///
/// Both calls are best-effort; the pipeline treats any failure as
/// "no reference location".
pub trait LocationProvider {
    fn request_permission(&self) -> Permission;
    fn current_position(&self) -> Result<Coord, LocationError>;
}

impl<L: LocationProvider + ?Sized> LocationProvider for &L {
    fn request_permission(&self) -> Permission {
        (**self).request_permission()
    }

    fn current_position(&self) -> Result<Coord, LocationError> {
        (**self).current_position()
    }
}

/// A position known up front, e.g. passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coord);

impl LocationProvider for FixedLocation {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coord, LocationError> {
        Ok(self.0)
    }
}

/// No positioning hardware: permission is moot, the position never resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<Coord, LocationError> {
        Err(LocationError::Unavailable("no position source".into()))
    }
}

/// The user refused location access.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    fn current_position(&self) -> Result<Coord, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// Asks for permission, then for the position.
///
/// Every failure is logged and turned into `None`. The position is not
/// queried when permission is denied.
pub fn acquire_reference<L: LocationProvider + ?Sized>(provider: &L) -> Option<Coord> {
    if provider.request_permission() == Permission::Denied {
        tracing::warn!("location permission denied, searching without reference location");
        return None;
    }
    match provider.current_position() {
        Ok(coord) if coord.is_finite() => {
            tracing::debug!(%coord, "reference location acquired");
            Some(coord)
        }
        Ok(coord) => {
            tracing::warn!(?coord, "location provider returned a non-finite position");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not get current position");
            None
        }
    }
}
