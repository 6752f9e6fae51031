//! Visitor types and the visitor-side aggregate queries

use crate::error::Result;
use crate::limits::validate_visitor_name;
use crate::park::{Park, ParkId};
use crate::registry::Registry;
use crate::trip::Trip;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitorId(pub Ulid);

impl VisitorId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who takes trips to parks
///
/// Visitors are owned by the caller and are never registered; a registry
/// only learns about a visitor through the trips that reference it. Identity
/// is the [`VisitorId`], so two visitors sharing a name are still distinct.
#[derive(Debug, Clone, Serialize)]
pub struct Visitor {
    id: VisitorId,
    name: String,
}

impl Visitor {
    /// Create a new visitor
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_visitor_name(&name)?;
        Ok(Self {
            id: VisitorId::new(),
            name,
        })
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the visitor; the previous name is kept if validation fails
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_visitor_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// All trips taken by this visitor, in registry order
    pub fn trips<'r>(&self, registry: &'r Registry) -> Vec<&'r Trip> {
        registry
            .trips()
            .iter()
            .filter(|t| t.visitor() == self.id)
            .collect()
    }

    /// Distinct parks this visitor has been to, in order of first visit
    pub fn national_parks<'r>(&self, registry: &'r Registry) -> Vec<&'r Park> {
        self.park_counts(registry)
            .into_iter()
            .map(|(park, _)| park)
            .collect()
    }

    /// Number of trips this visitor made to `park`
    pub fn total_visits_at_park(&self, registry: &Registry, park: &Park) -> usize {
        self.trips(registry)
            .iter()
            .filter(|t| t.park() == park.id())
            .count()
    }

    /// Trips per distinct park, in order of first visit
    pub fn park_counts<'r>(&self, registry: &'r Registry) -> Vec<(&'r Park, usize)> {
        let mut counts: Vec<(ParkId, usize)> = Vec::new();
        for trip in self.trips(registry) {
            match counts.iter_mut().find(|(p, _)| *p == trip.park()) {
                Some((_, n)) => *n += 1,
                None => counts.push((trip.park(), 1)),
            }
        }
        counts
            .into_iter()
            .filter_map(|(id, n)| registry.park(&id).map(|park| (park, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_creation() {
        let visitor = Visitor::new("Ana").unwrap();
        assert_eq!(visitor.name(), "Ana");
    }

    #[test]
    fn test_visitor_name_bounds() {
        assert!(Visitor::new("A").is_ok());
        assert!(Visitor::new("ABCDEFGHIJKLMNO").is_ok());
        assert!(Visitor::new("").is_err());
        assert!(Visitor::new("ABCDEFGHIJKLMNOP").is_err());
    }

    #[test]
    fn test_set_name_keeps_previous_on_error() {
        let mut visitor = Visitor::new("Ana").unwrap();

        visitor.set_name("Anabel").unwrap();
        assert_eq!(visitor.name(), "Anabel");

        assert!(visitor.set_name("").is_err());
        assert!(visitor.set_name("x".repeat(16)).is_err());
        assert_eq!(visitor.name(), "Anabel");
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut registry = Registry::new();
        let park = registry.add_park("Zion").unwrap();
        let mut visitor = Visitor::new("Ana").unwrap();
        registry.add_trip(&visitor, park, "June 1st", "June 5th").unwrap();

        visitor.set_name("Anna").unwrap();
        assert_eq!(visitor.trips(&registry).len(), 1);
    }

    #[test]
    fn test_national_parks_are_distinct() {
        let mut registry = Registry::new();
        let zion = registry.add_park("Zion").unwrap();
        let arches = registry.add_park("Arches").unwrap();
        let visitor = Visitor::new("Ana").unwrap();

        registry.add_trip(&visitor, zion, "June 1st", "June 5th").unwrap();
        registry.add_trip(&visitor, arches, "July 1st", "July 5th").unwrap();
        registry.add_trip(&visitor, zion, "August 1st", "August 5th").unwrap();

        let parks: Vec<ParkId> = visitor
            .national_parks(&registry)
            .into_iter()
            .map(Park::id)
            .collect();
        assert_eq!(parks, vec![zion, arches]);
    }

    #[test]
    fn test_total_visits_at_park() {
        let mut registry = Registry::new();
        let zion = registry.add_park("Zion").unwrap();
        let arches = registry.add_park("Arches").unwrap();
        let ana = Visitor::new("Ana").unwrap();
        let bo = Visitor::new("Bo").unwrap();

        registry.add_trip(&ana, zion, "June 1st", "June 5th").unwrap();
        registry.add_trip(&ana, zion, "July 1st", "July 5th").unwrap();
        registry.add_trip(&bo, arches, "July 1st", "July 5th").unwrap();

        let zion = registry.park(&zion).unwrap();
        let arches = registry.park(&arches).unwrap();
        assert_eq!(ana.total_visits_at_park(&registry, zion), 2);
        assert_eq!(ana.total_visits_at_park(&registry, arches), 0);
        assert_eq!(bo.total_visits_at_park(&registry, zion), 0);

        let expected = ana
            .trips(&registry)
            .iter()
            .filter(|t| t.park() == zion.id())
            .count();
        assert_eq!(ana.total_visits_at_park(&registry, zion), expected);
    }

    #[test]
    fn test_visitor_without_trips() {
        let registry = Registry::new();
        let visitor = Visitor::new("Ana").unwrap();

        assert!(visitor.trips(&registry).is_empty());
        assert!(visitor.national_parks(&registry).is_empty());
    }
}
