//! Derived next/previous stop relationships.

use super::StopId;

/// The stops adjacent to a given id in ascending id order.
///
/// Neighbors are computed from the ids cached at read time and are never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    /// Least cached id greater than the subject.
    pub next: Option<StopId>,
    /// Greatest cached id less than the subject.
    pub prev: Option<StopId>,
}

impl Neighbors {
    /// Find the neighbors of `id` among `ids`.
    ///
    /// `ids` need not be sorted and need not contain `id` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use stop_server::domain::{Neighbors, StopId};
    ///
    /// let ids = [3, 7, 9].map(StopId::new);
    /// let n = Neighbors::around(&ids, StopId::new(7));
    /// assert_eq!(n.next, Some(StopId::new(9)));
    /// assert_eq!(n.prev, Some(StopId::new(3)));
    /// ```
    pub fn around(ids: &[StopId], id: StopId) -> Self {
        Self {
            next: ids.iter().copied().filter(|&other| other > id).min(),
            prev: ids.iter().copied().filter(|&other| other < id).max(),
        }
    }
}
