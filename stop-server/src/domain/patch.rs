//! Typed partial updates of a stop.

use serde_json::Value;

use super::{DomainError, Latitude, Longitude, NonBlank, StopField, Timestamp};

/// A validated partial update: one optional slot per updatable field.
///
/// A patch that exists is valid; every slot has already passed its own
/// constructor checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopPatch {
    pub name: Option<NonBlank>,
    pub latitude: Option<Latitude>,
    pub longitude: Option<Longitude>,
    pub last_updated: Option<Timestamp>,
    pub next_departure: Option<NonBlank>,
}

impl StopPatch {
    /// The write-back of a departure refresh.
    pub fn departure(next_departure: NonBlank, at: Timestamp) -> Self {
        Self {
            next_departure: Some(next_departure),
            last_updated: Some(at),
            ..Self::default()
        }
    }

    /// Build a patch from a JSON request body.
    ///
    /// Keys are checked before values: a body with any unknown key fails
    /// with [`DomainError::InvalidField`] whatever its values are.
    pub fn from_json(body: &Value) -> Result<Self, DomainError> {
        let object = match body {
            Value::Object(map) if !map.is_empty() => map,
            _ => return Err(DomainError::EmptyPatch),
        };

        let fields = object
            .iter()
            .map(|(key, value)| {
                StopField::parse(key)
                    .map(|field| (field, value))
                    .ok_or_else(|| DomainError::InvalidField(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut patch = Self::default();
        for (field, value) in fields {
            match field {
                StopField::Name => {
                    patch.name = Some(NonBlank::parse(field, expect_str(field, value)?)?);
                }
                StopField::LastUpdated => {
                    let raw = expect_str(field, value)?;
                    let ts = Timestamp::parse(raw)
                        .map_err(|_| DomainError::InvalidFormat { field })?;
                    patch.last_updated = Some(ts);
                }
                StopField::Latitude => {
                    patch.latitude = Some(Latitude::new(expect_f64(field, value)?)?);
                }
                StopField::Longitude => {
                    patch.longitude = Some(Longitude::new(expect_f64(field, value)?)?);
                }
                StopField::NextDeparture => {
                    patch.next_departure =
                        Some(NonBlank::parse(field, expect_str(field, value)?)?);
                }
            }
        }

        Ok(patch)
    }
}

fn expect_str(field: StopField, value: &Value) -> Result<&str, DomainError> {
    value.as_str().ok_or(DomainError::InvalidValue {
        field,
        reason: "must be a string",
    })
}

fn expect_f64(field: StopField, value: &Value) -> Result<f64, DomainError> {
    value.as_f64().ok_or(DomainError::InvalidValue {
        field,
        reason: "must be a number",
    })
}
