//! `waypost point` — register, edit and rate points of interest.
//!
//! Subcommands:
//! - `waypost point add <name> --lat <deg> --lon <deg> --category <c>`
//! - `waypost point update <name> [--category <c>] [--accessibility <notes>]`
//! - `waypost point rate <name> <1-4>`
//!
//! Every successful change is written back to the network file.

use clap::{Args, Subcommand};
use serde::Serialize;

use waypost_core::geo::Coordinates;
use waypost_core::model::{Category, PointOfInterest};
use waypost_core::{EntityKind, NetworkError};

use super::Context;
use crate::output::render;

// ---------------------------------------------------------------------------
// Clap types
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct PointArgs {
    #[command(subcommand)]
    pub command: PointCommand,
}

#[derive(Subcommand, Debug)]
pub enum PointCommand {
    #[command(
        about = "Register a new point of interest",
        after_help = "EXAMPLES:\n    waypost point add \"Sé\" --lat 38.6558 --lon -27.2186 --category culture"
    )]
    Add(PointAddArgs),

    #[command(
        about = "Change a point's category or accessibility notes",
        after_help = "EXAMPLES:\n    waypost point update \"Sé\" --accessibility \"step-free entrance\""
    )]
    Update(PointUpdateArgs),

    #[command(
        about = "Record a visit with a rating from 1 to 4",
        after_help = "EXAMPLES:\n    waypost point rate \"Monte Brasil\" 4"
    )]
    Rate(PointRateArgs),
}

#[derive(Args, Debug)]
pub struct PointAddArgs {
    /// Unique point name.
    pub name: String,

    /// Latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// nature, culture or gastronomy.
    #[arg(short, long)]
    pub category: Category,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub accessibility: String,

    /// Free-form list of things to do there.
    #[arg(long, default_value = "")]
    pub activities: String,
}

#[derive(Args, Debug)]
pub struct PointUpdateArgs {
    pub name: String,

    /// New category. Unchanged when omitted.
    #[arg(short, long)]
    pub category: Option<Category>,

    /// New accessibility notes. Unchanged when omitted.
    #[arg(long)]
    pub accessibility: Option<String>,
}

#[derive(Args, Debug)]
pub struct PointRateArgs {
    pub name: String,

    /// Satisfaction from 1 (not satisfied) to 4 (very satisfied).
    pub rating: u8,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PointOutput<'a> {
    ok: bool,
    name: &'a str,
    category: Category,
    accessibility: &'a str,
}

#[derive(Debug, Serialize)]
struct RateOutput<'a> {
    ok: bool,
    name: &'a str,
    rating: u8,
    visits: u32,
    average_rating: f64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn run_point(ctx: &mut Context, args: &PointArgs) -> anyhow::Result<()> {
    match &args.command {
        PointCommand::Add(add) => run_add(ctx, add),
        PointCommand::Update(update) => run_update(ctx, update),
        PointCommand::Rate(rate) => run_rate(ctx, rate),
    }
}

fn run_add(ctx: &mut Context, args: &PointAddArgs) -> anyhow::Result<()> {
    let point = PointOfInterest {
        address: args.address.clone(),
        accessibility: args.accessibility.clone(),
        activities: args.activities.clone(),
        ..PointOfInterest::new(
            args.name.as_str(),
            Coordinates::new(args.lat, args.lon),
            args.category,
        )
    };
    ctx.network.add_point(point)?;
    ctx.save()?;

    let result = PointOutput {
        ok: true,
        name: &args.name,
        category: args.category,
        accessibility: &args.accessibility,
    };
    render(ctx.output, &result, |r, w| {
        writeln!(w, "✓ added point: {} ({})", r.name, r.category)
    })
}

fn run_update(ctx: &mut Context, args: &PointUpdateArgs) -> anyhow::Result<()> {
    let current = ctx
        .network
        .point(&args.name)
        .ok_or_else(|| NetworkError::not_found(EntityKind::Point, &args.name))?;
    let category = args.category.unwrap_or(current.category);
    let accessibility = args
        .accessibility
        .clone()
        .unwrap_or_else(|| current.accessibility.clone());

    ctx.network.update_point(&args.name, category, &accessibility)?;
    ctx.save()?;

    let result = PointOutput {
        ok: true,
        name: &args.name,
        category,
        accessibility: &accessibility,
    };
    render(ctx.output, &result, |r, w| {
        writeln!(w, "✓ updated point: {} ({})", r.name, r.category)?;
        if !r.accessibility.is_empty() {
            writeln!(w, "  accessibility: {}", r.accessibility)?;
        }
        Ok(())
    })
}

fn run_rate(ctx: &mut Context, args: &PointRateArgs) -> anyhow::Result<()> {
    ctx.network.record_visit(&args.name, args.rating)?;
    ctx.save()?;

    let point = ctx
        .network
        .point(&args.name)
        .ok_or_else(|| NetworkError::not_found(EntityKind::Point, &args.name))?;
    let result = RateOutput {
        ok: true,
        name: &point.name,
        rating: args.rating,
        visits: point.visits,
        average_rating: point.average_rating(),
    };
    render(ctx.output, &result, |r, w| {
        writeln!(
            w,
            "✓ rated {} {}/4 ({} visits, average {:.1}★)",
            r.name, r.rating, r.visits, r.average_rating
        )
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
