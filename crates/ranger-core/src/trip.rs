//! Trip (join) types linking one visitor to one park

use crate::error::Result;
use crate::limits::{validate_date, DateField};
use crate::park::ParkId;
use crate::visitor::{Visitor, VisitorId};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(pub Ulid);

impl TripId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visit of a visitor to a park
///
/// Dates are opaque labels in the form "September 1st"; they are never
/// parsed or compared.
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    id: TripId,
    visitor: VisitorId,
    park: ParkId,
    start_date: String,
    end_date: String,
}

impl Trip {
    pub(crate) fn new(
        visitor: &Visitor,
        park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self> {
        let start_date = start_date.into();
        let end_date = end_date.into();
        validate_date(DateField::Start, &start_date)?;
        validate_date(DateField::End, &end_date)?;

        Ok(Self {
            id: TripId::new(),
            visitor: visitor.id(),
            park,
            start_date,
            end_date,
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn visitor(&self) -> VisitorId {
        self.visitor
    }

    pub fn park(&self) -> ParkId {
        self.park
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn set_visitor(&mut self, visitor: &Visitor) {
        self.visitor = visitor.id();
    }

    // Callers go through Registry::set_trip_park so the park is known to exist.
    pub(crate) fn set_park(&mut self, park: ParkId) {
        self.park = park;
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) -> Result<()> {
        let date = date.into();
        validate_date(DateField::Start, &date)?;
        self.start_date = date;
        Ok(())
    }

    pub fn set_end_date(&mut self, date: impl Into<String>) -> Result<()> {
        let date = date.into();
        validate_date(DateField::End, &date)?;
        self.end_date = date;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::limits::ValidationError;

    #[test]
    fn test_trip_creation() {
        let visitor = Visitor::new("Ana").unwrap();
        let park = ParkId::new();
        let trip = Trip::new(&visitor, park, "September 1st", "September 9th").unwrap();

        assert_eq!(trip.visitor(), visitor.id());
        assert_eq!(trip.park(), park);
        assert_eq!(trip.start_date(), "September 1st");
        assert_eq!(trip.end_date(), "September 9th");
    }

    #[test]
    fn test_trip_rejects_short_dates() {
        let visitor = Visitor::new("Ana").unwrap();
        let park = ParkId::new();

        let err = Trip::new(&visitor, park, "May 1", "May 9th").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DateTooShort {
                field: DateField::Start,
                ..
            })
        ));

        let err = Trip::new(&visitor, park, "May 1st", "May 9").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DateTooShort {
                field: DateField::End,
                ..
            })
        ));
    }

    #[test]
    fn test_date_setters_keep_previous_on_error() {
        let visitor = Visitor::new("Ana").unwrap();
        let mut trip = Trip::new(&visitor, ParkId::new(), "June 1st", "June 5th").unwrap();

        trip.set_start_date("June 2nd").unwrap();
        trip.set_end_date("June 6th").unwrap();
        assert_eq!(trip.start_date(), "June 2nd");
        assert_eq!(trip.end_date(), "June 6th");

        assert!(trip.set_start_date("Jun 3").is_err());
        assert!(trip.set_end_date("").is_err());
        assert_eq!(trip.start_date(), "June 2nd");
        assert_eq!(trip.end_date(), "June 6th");
    }

    #[test]
    fn test_set_visitor() {
        let ana = Visitor::new("Ana").unwrap();
        let bo = Visitor::new("Bo").unwrap();
        let mut trip = Trip::new(&ana, ParkId::new(), "June 1st", "June 5th").unwrap();

        trip.set_visitor(&bo);
        assert_eq!(trip.visitor(), bo.id());
    }
}
