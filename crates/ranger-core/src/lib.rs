//! Ranger Core - Parks, visitors and the trips between them
//!
//! This crate provides the entity types, the explicit [`Registry`] that owns
//! every registered park and trip, and the aggregate queries that answer
//! relationship questions by scanning the trip registry.

pub mod error;
pub mod limits;
pub mod park;
pub mod registry;
pub mod scenario;
pub mod trip;
pub mod visitor;

pub use error::{Error, Result};
pub use limits::{DateField, ValidationError};
pub use park::{Park, ParkId};
pub use registry::Registry;
pub use scenario::{ParkSpec, Scenario, TripSpec, VisitorSpec, World};
pub use trip::{Trip, TripId};
pub use visitor::{Visitor, VisitorId};
