//! Visitor command

use std::fmt;

use clap::Args;
use serde::Serialize;

use super::TripRow;
use crate::output::print_output;
use crate::AppContext;

#[derive(Args)]
pub struct VisitorArgs {
    /// Visitor key from the scenario
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct ParkVisits {
    pub park: String,
    pub visits: usize,
}

#[derive(Debug, Serialize)]
pub struct VisitorReport {
    pub name: String,
    pub parks: Vec<ParkVisits>,
    pub trips: Vec<TripRow>,
}

impl fmt::Display for VisitorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} trips)", self.name, self.trips.len())?;
        if self.parks.is_empty() {
            return write!(f, "  (no trips)");
        }
        writeln!(f, "  Parks:")?;
        for p in &self.parks {
            writeln!(f, "    {} x{}", p.park, p.visits)?;
        }
        write!(f, "  Trips:")?;
        for trip in &self.trips {
            write!(f, "\n    {}", trip)?;
        }
        Ok(())
    }
}

pub fn run(args: &VisitorArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let world = &ctx.world;
    let registry = &world.registry;

    let Some(visitor) = world.visitor(&args.key) else {
        anyhow::bail!("Visitor '{}' not found in scenario", args.key);
    };

    tracing::info!("Reporting on visitor {}", visitor.name());

    let report = VisitorReport {
        name: visitor.name().to_string(),
        parks: visitor
            .park_counts(registry)
            .into_iter()
            .map(|(park, visits)| ParkVisits {
                park: park.name().to_string(),
                visits,
            })
            .collect(),
        trips: visitor
            .trips(registry)
            .into_iter()
            .map(|t| TripRow::new(t, world))
            .collect(),
    };
    print_output(&report, ctx.format);
    Ok(())
}
