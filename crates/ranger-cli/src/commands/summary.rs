//! Scenario-wide commands: summary, most-visited and validate

use std::fmt;

use serde::Serialize;

use super::visitor_name;
use crate::output::print_output;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct ParkLine {
    pub key: String,
    pub name: String,
    pub total_visits: usize,
    pub best_visitor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub parks: Vec<ParkLine>,
    pub trips: usize,
    pub most_visited: Option<String>,
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parks ({}), {} trips:", self.parks.len(), self.trips)?;
        for line in &self.parks {
            let best = line.best_visitor.as_deref().unwrap_or("-");
            writeln!(
                f,
                "  {}  visits: {}  best visitor: {}",
                line.name, line.total_visits, best
            )?;
        }
        match &self.most_visited {
            Some(name) => write!(f, "Most visited: {}", name),
            None => write!(f, "Most visited: (none)"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MostVisitedReport {
    pub park: Option<String>,
    pub total_visits: usize,
}

impl fmt::Display for MostVisitedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.park {
            Some(name) => write!(f, "{} ({} visits)", name, self.total_visits),
            None => write!(f, "No park has been visited"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub parks: usize,
    pub visitors: usize,
    pub trips: usize,
}

impl fmt::Display for ValidateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scenario valid: {} parks, {} visitors, {} trips",
            self.parks, self.visitors, self.trips
        )
    }
}

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let world = &ctx.world;
    let registry = &world.registry;

    let parks: Vec<ParkLine> = world
        .parks()
        .map(|(key, park)| ParkLine {
            key: key.to_string(),
            name: park.name().to_string(),
            total_visits: park.total_visits(registry),
            best_visitor: park
                .best_visitor(registry)
                .map(|id| visitor_name(world, &id)),
        })
        .collect();

    tracing::info!("Summarised {} parks", parks.len());

    let report = SummaryReport {
        parks,
        trips: registry.trips().len(),
        most_visited: registry.most_visited().map(|p| p.name().to_string()),
    };
    print_output(&report, ctx.format);
    Ok(())
}

pub fn run_most_visited(ctx: &AppContext) -> anyhow::Result<()> {
    let registry = &ctx.world.registry;
    let most = registry.most_visited();

    let report = MostVisitedReport {
        park: most.map(|p| p.name().to_string()),
        total_visits: most.map_or(0, |p| p.total_visits(registry)),
    };
    print_output(&report, ctx.format);
    Ok(())
}

pub fn run_validate(ctx: &AppContext) -> anyhow::Result<()> {
    let world = &ctx.world;
    let report = ValidateReport {
        parks: world.registry.parks().len(),
        visitors: world.visitors().count(),
        trips: world.registry.trips().len(),
    };
    print_output(&report, ctx.format);
    Ok(())
}
