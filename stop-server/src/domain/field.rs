//! The enumerated set of stop fields.
//!
//! The same set bounds both partial updates and the `include` projection
//! on reads.

use std::collections::BTreeSet;
use std::fmt;

use super::DomainError;

/// A client-visible stop field other than `stop_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StopField {
    LastUpdated,
    Name,
    Latitude,
    Longitude,
    NextDeparture,
}

impl StopField {
    pub const ALL: [StopField; 5] = [
        StopField::LastUpdated,
        StopField::Name,
        StopField::Latitude,
        StopField::Longitude,
        StopField::NextDeparture,
    ];

    /// Parse the wire name of a field.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StopField::LastUpdated => "last_updated",
            StopField::Name => "name",
            StopField::Latitude => "latitude",
            StopField::Longitude => "longitude",
            StopField::NextDeparture => "next_departure",
        }
    }
}

impl fmt::Display for StopField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which fields a read should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// No filter given: every field.
    All,
    /// An explicit, non-empty subset.
    Only(BTreeSet<StopField>),
}

impl FieldSelection {
    /// Parse a comma-separated `include` filter.
    ///
    /// A missing or empty filter selects everything. Any unknown name
    /// rejects the whole filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_server::domain::{FieldSelection, StopField};
    ///
    /// let sel = FieldSelection::parse(Some("name,latitude")).unwrap();
    /// assert!(sel.includes(StopField::Name));
    /// assert!(!sel.includes(StopField::NextDeparture));
    ///
    /// assert_eq!(FieldSelection::parse(None).unwrap(), FieldSelection::All);
    /// assert!(FieldSelection::parse(Some("name,platform")).is_err());
    /// ```
    pub fn parse(include: Option<&str>) -> Result<Self, DomainError> {
        let Some(include) = include.filter(|s| !s.is_empty()) else {
            return Ok(FieldSelection::All);
        };

        let fields = include
            .split(',')
            .map(|name| {
                let name = name.trim();
                StopField::parse(name).ok_or_else(|| DomainError::InvalidField(name.to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(FieldSelection::Only(fields))
    }

    pub fn includes(&self, field: StopField) -> bool {
        match self {
            FieldSelection::All => true,
            FieldSelection::Only(fields) => fields.contains(&field),
        }
    }
}
