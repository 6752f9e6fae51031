//! Park command

use std::fmt;

use clap::Args;
use serde::Serialize;

use super::{visitor_name, TripRow};
use crate::output::print_output;
use crate::AppContext;

#[derive(Args)]
pub struct ParkArgs {
    /// Park key from the scenario
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct VisitorVisits {
    pub visitor: String,
    pub visits: usize,
}

#[derive(Debug, Serialize)]
pub struct ParkReport {
    pub name: String,
    pub total_visits: usize,
    pub best_visitor: Option<String>,
    pub visitors: Vec<VisitorVisits>,
    pub trips: Vec<TripRow>,
}

impl fmt::Display for ParkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} visits)", self.name, self.total_visits)?;
        match &self.best_visitor {
            Some(name) => writeln!(f, "  best visitor: {}", name)?,
            None => writeln!(f, "  best visitor: (none)")?,
        }
        if self.visitors.is_empty() {
            write!(f, "  (no trips)")
        } else {
            writeln!(f, "  Visitors:")?;
            for v in &self.visitors {
                writeln!(f, "    {} x{}", v.visitor, v.visits)?;
            }
            write!(f, "  Trips:")?;
            for trip in &self.trips {
                write!(f, "\n    {}", trip)?;
            }
            Ok(())
        }
    }
}

pub fn run(args: &ParkArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let world = &ctx.world;
    let registry = &world.registry;

    let Some(park) = world.park(&args.key) else {
        anyhow::bail!("Park '{}' not found in scenario", args.key);
    };

    tracing::info!("Reporting on park {}", park.name());

    let report = ParkReport {
        name: park.name().to_string(),
        total_visits: park.total_visits(registry),
        best_visitor: park
            .best_visitor(registry)
            .map(|id| visitor_name(world, &id)),
        visitors: park
            .visit_counts(registry)
            .into_iter()
            .map(|(id, visits)| VisitorVisits {
                visitor: visitor_name(world, &id),
                visits,
            })
            .collect(),
        trips: park
            .trips(registry)
            .into_iter()
            .map(|t| TripRow::new(t, world))
            .collect(),
    };
    print_output(&report, ctx.format);
    Ok(())
}
