//! Park types and the park-side aggregate queries

use crate::error::Result;
use crate::limits::validate_park_name;
use crate::registry::Registry;
use crate::trip::Trip;
use crate::visitor::VisitorId;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParkId(pub Ulid);

impl ParkId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_string(s: &str) -> std::result::Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for ParkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A national park
///
/// Parks only come into existence through [`Registry::add_park`], and their
/// name is fixed from then on.
#[derive(Debug, Clone, Serialize)]
pub struct Park {
    id: ParkId,
    name: String,
}

impl Park {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_park_name(&name)?;
        Ok(Self {
            id: ParkId::new(),
            name,
        })
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All trips to this park, in registry order
    pub fn trips<'r>(&self, registry: &'r Registry) -> Vec<&'r Trip> {
        registry
            .trips()
            .iter()
            .filter(|t| t.park() == self.id)
            .collect()
    }

    /// Distinct visitors of this park, in order of their first trip
    pub fn visitors(&self, registry: &Registry) -> Vec<VisitorId> {
        self.visit_counts(registry)
            .into_iter()
            .map(|(visitor, _)| visitor)
            .collect()
    }

    /// Number of trips to this park
    pub fn total_visits(&self, registry: &Registry) -> usize {
        self.trips(registry).len()
    }

    /// Trips per distinct visitor, in order of each visitor's first trip
    pub fn visit_counts(&self, registry: &Registry) -> Vec<(VisitorId, usize)> {
        let mut counts: Vec<(VisitorId, usize)> = Vec::new();
        for trip in self.trips(registry) {
            match counts.iter_mut().find(|(v, _)| *v == trip.visitor()) {
                Some((_, n)) => *n += 1,
                None => counts.push((trip.visitor(), 1)),
            }
        }
        counts
    }

    /// The visitor with the most trips here; ties go to whoever visited first
    pub fn best_visitor(&self, registry: &Registry) -> Option<VisitorId> {
        tracing::trace!("Computing best visitor for park {}", self.name);

        let mut best: Option<(VisitorId, usize)> = None;
        for (visitor, count) in self.visit_counts(registry) {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((visitor, count));
            }
        }
        best.map(|(visitor, _)| visitor)
    }
}
