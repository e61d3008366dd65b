//! Departures and next-departure selection.

use std::fmt;

/// One upcoming departure at a stop, reduced to the fields the cache uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Departure {
    /// Headsign of the departing service
    pub direction: Option<String>,
    /// Departure platform
    pub platform: Option<String>,
    /// Name of the operating company
    pub operator: Option<String>,
}

/// The departure summary written into a stop's `next_departure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    pub platform: String,
    pub direction: String,
}

impl fmt::Display for NextDeparture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Platform {} towards {}", self.platform, self.direction)
    }
}

/// Pick the first departure, in board order, that has both a direction
/// and a platform.
pub fn select_next_departure(departures: &[Departure]) -> Option<NextDeparture> {
    departures.iter().find_map(|d| {
        Some(NextDeparture {
            platform: d.platform.clone()?,
            direction: d.direction.clone()?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(direction: Option<&str>, platform: Option<&str>) -> Departure {
        Departure {
            direction: direction.map(String::from),
            platform: platform.map(String::from),
            operator: None,
        }
    }

    #[test]
    fn skips_incomplete_entries() {
        let board = vec![dep(None, None), dep(Some("X"), Some("4"))];
        let next = select_next_departure(&board).unwrap();
        assert_eq!(next.to_string(), "Platform 4 towards X");
    }

    #[test]
    fn needs_both_fields_on_the_same_entry() {
        let board = vec![dep(Some("Erfurt Hbf"), None), dep(None, Some("7"))];
        assert_eq!(select_next_departure(&board), None);
    }

    #[test]
    fn first_complete_entry_wins() {
        let board = vec![
            dep(Some("Sollstedt"), Some("4 A-C")),
            dep(Some("Kassel"), Some("2")),
        ];
        let next = select_next_departure(&board).unwrap();
        assert_eq!(next.direction, "Sollstedt");
        assert_eq!(next.platform, "4 A-C");
    }

    #[test]
    fn empty_board() {
        assert_eq!(select_next_departure(&[]), None);
    }
}
