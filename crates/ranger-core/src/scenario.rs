//! Declarative scenarios: parks, visitors and trips described as data
//!
//! A [`Scenario`] names each park and visitor with a key and refers to them
//! from trips by that key. Loading it replays the declarations, in order,
//! against a fresh [`Registry`].

use crate::error::{Error, Result};
use crate::park::{Park, ParkId};
use crate::registry::Registry;
use crate::visitor::{Visitor, VisitorId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A park declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkSpec {
    /// Lookup key for trips (defaults to the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

impl ParkSpec {
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }
}

/// A visitor declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorSpec {
    /// Lookup key for trips (defaults to the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

impl VisitorSpec {
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }
}

/// A trip declaration, referring to a visitor and a park by key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSpec {
    pub visitor: String,
    pub park: String,
    pub start_date: String,
    pub end_date: String,
}

/// Parks, visitors and trips to load into a registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub parks: Vec<ParkSpec>,
    #[serde(default)]
    pub visitors: Vec<VisitorSpec>,
    #[serde(default)]
    pub trips: Vec<TripSpec>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a scenario from JSON
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_park(mut self, name: impl Into<String>) -> Self {
        self.parks.push(ParkSpec {
            key: None,
            name: name.into(),
        });
        self
    }

    pub fn with_visitor(mut self, name: impl Into<String>) -> Self {
        self.visitors.push(VisitorSpec {
            key: None,
            name: name.into(),
        });
        self
    }

    pub fn with_trip(
        mut self,
        visitor: impl Into<String>,
        park: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        self.trips.push(TripSpec {
            visitor: visitor.into(),
            park: park.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        });
        self
    }

    /// Build a world from the declarations
    ///
    /// Fails on the first invalid field, duplicate key or unknown reference.
    pub fn load(&self) -> Result<World> {
        let mut world = World::default();

        let mut seen = HashSet::new();
        for spec in &self.parks {
            if !seen.insert(spec.key()) {
                return Err(Error::DuplicateKey {
                    kind: "park",
                    key: spec.key().to_string(),
                });
            }
            let id = world.registry.add_park(spec.name.as_str())?;
            world.parks.push((spec.key().to_string(), id));
        }

        let mut seen = HashSet::new();
        for spec in &self.visitors {
            if !seen.insert(spec.key()) {
                return Err(Error::DuplicateKey {
                    kind: "visitor",
                    key: spec.key().to_string(),
                });
            }
            let visitor = Visitor::new(spec.name.as_str())?;
            world.visitors.push((spec.key().to_string(), visitor));
        }

        for spec in &self.trips {
            let visitor = world
                .visitor(&spec.visitor)
                .ok_or_else(|| Error::UnknownReference {
                    kind: "visitor",
                    key: spec.visitor.clone(),
                })?
                .clone();
            let park = world
                .park_id(&spec.park)
                .ok_or_else(|| Error::UnknownReference {
                    kind: "park",
                    key: spec.park.clone(),
                })?;
            world.registry.add_trip(
                &visitor,
                park,
                spec.start_date.as_str(),
                spec.end_date.as_str(),
            )?;
        }

        tracing::debug!(
            "Loaded scenario: {} parks, {} visitors, {} trips",
            world.registry.parks().len(),
            world.visitors.len(),
            world.registry.trips().len()
        );

        Ok(world)
    }
}

/// A loaded scenario: the registry plus the caller-side visitor roster
#[derive(Debug, Clone, Default)]
pub struct World {
    pub registry: Registry,
    parks: Vec<(String, ParkId)>,
    visitors: Vec<(String, Visitor)>,
}

impl World {
    fn park_id(&self, key: &str) -> Option<ParkId> {
        self.parks.iter().find(|(k, _)| k == key).map(|(_, id)| *id)
    }

    /// Look up a park by its scenario key
    pub fn park(&self, key: &str) -> Option<&Park> {
        self.park_id(key).and_then(|id| self.registry.park(&id))
    }

    /// Look up a visitor by its scenario key
    pub fn visitor(&self, key: &str) -> Option<&Visitor> {
        self.visitors.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn visitor_by_id(&self, id: &VisitorId) -> Option<&Visitor> {
        self.visitors
            .iter()
            .map(|(_, v)| v)
            .find(|v| v.id() == *id)
    }

    /// Visitors with their keys, in declaration order
    pub fn visitors(&self) -> impl Iterator<Item = (&str, &Visitor)> {
        self.visitors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parks with their keys, in declaration order
    pub fn parks(&self) -> impl Iterator<Item = (&str, &Park)> {
        self.parks
            .iter()
            .filter_map(|(k, id)| self.registry.park(id).map(|p| (k.as_str(), p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::ValidationError;

    fn sample() -> Scenario {
        Scenario::new()
            .with_park("Yellowstone")
            .with_park("Yosemite")
            .with_visitor("Ana")
            .with_visitor("Bo")
            .with_trip("Ana", "Yellowstone", "June 1st", "June 5th")
            .with_trip("Ana", "Yellowstone", "July 1st", "July 3rd")
            .with_trip("Bo", "Yosemite", "August 1st", "August 9th")
    }

    #[test]
    fn test_load_scenario() {
        let world = sample().load().unwrap();

        assert_eq!(world.registry.parks().len(), 2);
        assert_eq!(world.registry.trips().len(), 3);
        assert_eq!(world.visitors().count(), 2);

        let yellowstone = world.park("Yellowstone").unwrap();
        let ana = world.visitor("Ana").unwrap();
        assert_eq!(yellowstone.total_visits(&world.registry), 2);
        assert_eq!(yellowstone.best_visitor(&world.registry), Some(ana.id()));
        assert_eq!(
            world.registry.most_visited().map(Park::id),
            Some(yellowstone.id())
        );
    }

    #[test]
    fn test_keys_default_to_names() {
        let json = r#"{
            "parks": [{ "key": "ys", "name": "Yellowstone" }],
            "visitors": [{ "name": "Ana" }],
            "trips": [
                { "visitor": "Ana", "park": "ys", "start_date": "June 1st", "end_date": "June 5th" }
            ]
        }"#;
        let world = Scenario::from_json_str(json).unwrap().load().unwrap();

        assert!(world.park("ys").is_some());
        assert!(world.park("Yellowstone").is_none());
        let ana = world.visitor("Ana").unwrap();
        assert_eq!(world.visitor_by_id(&ana.id()).unwrap().name(), "Ana");
    }

    #[test]
    fn test_unknown_reference() {
        let err = sample()
            .with_trip("Cy", "Yosemite", "May 1st", "May 2nd")
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownReference { kind: "visitor", .. }));

        let err = sample()
            .with_trip("Bo", "Zion", "May 1st", "May 2nd")
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownReference { kind: "park", .. }));
    }

    #[test]
    fn test_duplicate_key() {
        let err = sample().with_visitor("Ana").load().unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { kind: "visitor", .. }));
    }

    #[test]
    fn test_invalid_field() {
        let err = sample().with_park("Yo").load().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::ParkNameTooShort { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Scenario::from_json_str("{ parks: ").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
