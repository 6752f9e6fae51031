//! CLI command implementations

pub mod completions;
pub mod park;
pub mod summary;
pub mod visitor;

use ranger_core::{ParkId, Trip, VisitorId, World};
use serde::Serialize;

/// A trip with its references resolved to names
#[derive(Debug, Serialize)]
pub struct TripRow {
    pub visitor: String,
    pub park: String,
    pub start_date: String,
    pub end_date: String,
}

impl TripRow {
    pub fn new(trip: &Trip, world: &World) -> Self {
        Self {
            visitor: visitor_name(world, &trip.visitor()),
            park: park_name(world, &trip.park()),
            start_date: trip.start_date().to_string(),
            end_date: trip.end_date().to_string(),
        }
    }
}

impl std::fmt::Display for TripRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} ({} - {})",
            self.visitor, self.park, self.start_date, self.end_date
        )
    }
}

pub fn visitor_name(world: &World, id: &VisitorId) -> String {
    world
        .visitor_by_id(id)
        .map(|v| v.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn park_name(world: &World, id: &ParkId) -> String {
    world
        .registry
        .park(id)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| id.to_string())
}
