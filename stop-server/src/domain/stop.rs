//! Stop identifiers, coordinates and the cached stop record.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{DomainError, StopField, Timestamp};

/// Externally assigned stop identifier (the upstream HAFAS station id).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StopId(i64);

impl StopId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StopId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Latitude in degrees, guaranteed to lie within `-90..=90`.
///
/// # Examples
///
/// ```
/// use stop_server::domain::Latitude;
///
/// assert!(Latitude::new(-33.918859).is_ok());
/// assert!(Latitude::new(90.5).is_err());
/// assert!(Latitude::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Latitude(f64);

impl Latitude {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;

    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(DomainError::InvalidValue {
                field: StopField::Latitude,
                reason: "must be between -90 and 90",
            })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Longitude in degrees, guaranteed to lie within `-180..=180`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Longitude(f64);

impl Longitude {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;

    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(DomainError::InvalidValue {
                field: StopField::Longitude,
                reason: "must be between -180 and 180",
            })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// A text value that contains at least one non-whitespace character.
///
/// The original text is kept as given; only the blank check trims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonBlank(String);

impl NonBlank {
    /// Validate `text` for `field`.
    pub fn parse(field: StopField, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field,
                reason: "cannot be blank",
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A cached stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub stop_id: StopId,
    pub name: Option<String>,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub last_updated: Timestamp,
    pub next_departure: Option<String>,
}

impl StopRecord {
    /// A freshly synchronised stop without departure information.
    pub fn new(
        stop_id: StopId,
        name: Option<String>,
        latitude: Latitude,
        longitude: Longitude,
        last_updated: Timestamp,
    ) -> Self {
        Self {
            stop_id,
            name,
            latitude,
            longitude,
            last_updated,
            next_departure: None,
        }
    }
}
