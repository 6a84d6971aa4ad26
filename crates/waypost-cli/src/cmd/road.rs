//! `waypost road` — open and close individual roads.
//!
//! Subcommands:
//! - `waypost road add <from> <to> --distance <km> --min-speed <kmh> --max-speed <kmh>`
//! - `waypost road rm <from> <to>`
//!
//! A new road goes through the same checks as a loaded one; a rejected
//! road leaves the file untouched.

use clap::{Args, Subcommand};
use serde::Serialize;

use waypost_core::model::{Road, RoadRecord, format_hours};

use super::Context;
use crate::output::render;

#[derive(Args, Debug)]
pub struct RoadArgs {
    #[command(subcommand)]
    pub command: RoadCommand,
}

#[derive(Subcommand, Debug)]
pub enum RoadCommand {
    #[command(
        about = "Open a one-way road between two network points",
        after_help = "EXAMPLES:\n    waypost road add \"Sé\" \"Monte Brasil\" --distance 3 --min-speed 30 --max-speed 50"
    )]
    Add(RoadAddArgs),

    #[command(
        visible_alias = "remove",
        about = "Close the road FROM -> TO",
        after_help = "EXAMPLES:\n    waypost road rm \"Sé\" \"Monte Brasil\""
    )]
    Rm(RoadRmArgs),
}

#[derive(Args, Debug)]
pub struct RoadAddArgs {
    pub from: String,
    pub to: String,

    /// Road length in kilometers.
    #[arg(long, allow_negative_numbers = true)]
    pub distance: f64,

    #[arg(long, value_name = "KMH", allow_negative_numbers = true)]
    pub min_speed: f64,

    #[arg(long, value_name = "KMH", allow_negative_numbers = true)]
    pub max_speed: f64,
}

#[derive(Args, Debug)]
pub struct RoadRmArgs {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
struct RoadOutput {
    ok: bool,
    start: String,
    end: String,
    distance_km: f64,
    walk_time_hours: f64,
    drive_time_hours: f64,
}

pub fn run_road(ctx: &mut Context, args: &RoadArgs) -> anyhow::Result<()> {
    let (result, verb) = match &args.command {
        RoadCommand::Add(add) => {
            let road = ctx.network.add_road(RoadRecord {
                start: add.from.clone(),
                end: add.to.clone(),
                distance_km: add.distance,
                min_speed_kmh: add.min_speed,
                max_speed_kmh: add.max_speed,
            })?;
            (output_for(road), "opened")
        }
        RoadCommand::Rm(rm) => {
            let road = ctx.network.remove_road(&rm.from, &rm.to)?;
            (output_for(&road), "closed")
        }
    };
    ctx.save()?;

    render(ctx.output, &result, |r, w| {
        writeln!(
            w,
            "✓ {verb} road: {} -> {}  {:.2} km  walk {}  drive {}",
            r.start,
            r.end,
            r.distance_km,
            format_hours(r.walk_time_hours),
            format_hours(r.drive_time_hours),
        )
    })
}

fn output_for(road: &Road) -> RoadOutput {
    RoadOutput {
        ok: true,
        start: road.start().to_string(),
        end: road.end().to_string(),
        distance_km: road.distance_km(),
        walk_time_hours: road.walk_time_hours,
        drive_time_hours: road.drive_time_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(subcommand)]
        cmd: RoadCommand,
    }

    #[test]
    fn add_parses_speeds() {
        let w = Wrapper::parse_from([
            "test", "add", "Sé", "Monte Brasil", "--distance", "3", "--min-speed", "30",
            "--max-speed", "50",
        ]);
        let RoadCommand::Add(a) = w.cmd else {
            panic!("expected Add");
        };
        assert_eq!((a.from.as_str(), a.to.as_str()), ("Sé", "Monte Brasil"));
        assert!((a.distance - 3.0).abs() < f64::EPSILON);
        assert!((a.max_speed - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_accepts_negative_speed_for_validation() {
        let w = Wrapper::parse_from([
            "test", "add", "A", "B", "--distance", "3", "--min-speed", "-1", "--max-speed", "50",
        ]);
        let RoadCommand::Add(a) = w.cmd else {
            panic!("expected Add");
        };
        assert!((a.min_speed + 1.0).abs() < f64::EPSILON);
    }
}
