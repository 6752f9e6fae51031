//! The registry owning every park and trip
//!
//! Both collections are append-only. Every relationship query scans the
//! trip list on demand, so answers always reflect the latest trips.

use crate::error::{Error, Result};
use crate::park::{Park, ParkId};
use crate::trip::{Trip, TripId};
use crate::visitor::Visitor;

/// Parks and trips, in registration order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    parks: Vec<Park>,
    trips: Vec<Trip>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Parks
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a park and register it
    pub fn add_park(&mut self, name: impl Into<String>) -> Result<ParkId> {
        let park = Park::new(name)?;
        let id = park.id();
        tracing::debug!("Registered park {} ({})", park.name(), id);
        self.parks.push(park);
        Ok(id)
    }

    pub fn park(&self, id: &ParkId) -> Option<&Park> {
        self.parks.iter().find(|p| p.id() == *id)
    }

    /// Every registered park, in registration order
    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    /// The park with the most trips
    ///
    /// Returns `None` when there are no parks or none has been visited. Ties
    /// go to the park registered first.
    pub fn most_visited(&self) -> Option<&Park> {
        tracing::trace!("Computing most visited park over {} parks", self.parks.len());

        let mut best: Option<(&Park, usize)> = None;
        for park in &self.parks {
            let visits = park.total_visits(self);
            if best.map_or(true, |(_, top)| visits > top) {
                best = Some((park, visits));
            }
        }

        match best {
            Some((park, visits)) if visits > 0 => Some(park),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Trips
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a trip and register it
    ///
    /// The park must already be registered here. Nothing is registered if
    /// any check fails.
    pub fn add_trip(
        &mut self,
        visitor: &Visitor,
        park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<TripId> {
        self.require_park(&park)?;
        let trip = Trip::new(visitor, park, start_date, end_date)?;
        let id = trip.id();
        tracing::debug!(
            "Registered trip {}: {} -> {} ({} to {})",
            id,
            visitor.name(),
            park,
            trip.start_date(),
            trip.end_date()
        );
        self.trips.push(trip);
        Ok(id)
    }

    pub fn trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id() == *id)
    }

    /// Mutable access to a trip's visitor and dates
    pub fn trip_mut(&mut self, id: &TripId) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id() == *id)
    }

    /// Every registered trip, in registration order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Point a trip at a different registered park
    pub fn set_trip_park(&mut self, trip: &TripId, park: ParkId) -> Result<()> {
        self.require_park(&park)?;
        let trip = self
            .trip_mut(trip)
            .ok_or_else(|| Error::TripNotFound(trip.to_string()))?;
        trip.set_park(park);
        Ok(())
    }

    fn require_park(&self, id: &ParkId) -> Result<()> {
        match self.park(id) {
            Some(_) => Ok(()),
            None => Err(Error::ParkNotFound(id.to_string())),
        }
    }
}
