//! CLI for regular polygons inscribed in a circle.
//!
//! Provides:
//! - Properties of a single polygon
//! - Comparisons between two polygons
//! - Efficiency ratios and records of a polygon sequence

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use rpoly_core::{Input, Polygon, PolygonRecord, PolygonSequence, Properties, Property, PropertyValue, Shape, Slice};

#[derive(Parser)]
#[command(name = "rpoly")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RPOLY_BUILD_SHA"), ")"))]
#[command(about = "Regular polygons inscribed in a circle", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the properties of one polygon
    #[command(allow_negative_numbers = true)]
    Polygon {
        /// Number of edges (integer greater than 2)
        edges: Input,

        /// Radius of the circumscribed circle (integer of at least 1)
        circumradius: Input,

        /// Print only this property
        #[arg(short, long)]
        property: Option<String>,

        /// Emit JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compare two polygons
    #[command(allow_negative_numbers = true)]
    Compare {
        edges_1: Input,
        circumradius_1: Input,
        edges_2: Input,
        circumradius_2: Input,
    },

    /// Print area:perimeter ratios for polygons with 3 to MAX_EDGES edges
    #[command(allow_negative_numbers = true)]
    Sequence {
        /// Largest edge count in the sequence
        max_edges: Input,

        /// Radius of the common circumscribed circle
        circumradius: Input,

        /// Only print ratios selected by a start:stop[:step] slice, e.g. "::-1"
        #[arg(short, long, allow_hyphen_values = true)]
        slice: Option<Slice>,

        /// Also print every polygon's full record
        #[arg(short, long)]
        records: bool,

        /// Emit JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PolygonSummary {
    description: String,
    #[serde(flatten)]
    properties: Properties,
}

#[derive(Serialize)]
struct SequenceSummary<'a> {
    description: String,
    len: usize,
    max_efficiency_edges: u32,
    ratios: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [PolygonRecord]>,
}

fn init_logs(level: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if level.is_some() {
        let filter = rpoly_core::parse_log_level(level).map_err(anyhow::Error::msg)?;
        builder.filter_level(filter);
    }
    builder.init();
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn polygon(edges: Input, circumradius: Input, property: Option<String>, json: bool) -> Result<()> {
    let polygon = Polygon::new(edges, circumradius).context("invalid polygon")?;
    debug!("polygon: {:?}", polygon);
    if let Some(name) = property {
        let value: PropertyValue = polygon.get(&name)?;
        if json {
            print_json(&value)?;
        } else {
            println!("{}", value);
        }
        return Ok(());
    }
    if json {
        return print_json(&PolygonSummary {
            description: polygon.to_string(),
            properties: polygon.properties(),
        });
    }
    println!("{}", polygon);
    for property in Property::ALL {
        println!("  {:<15} {}", property, polygon.property(property));
    }
    Ok(())
}

fn compare(a: Polygon, b: Polygon) -> Result<()> {
    println!("a: {}", a);
    println!("b: {}", b);
    let b = Shape::from(b);
    println!("a == b: {}", a.try_eq(&b)?);
    println!("a >  b: {}", a.try_gt(&b)?);
    println!("a >= b: {}", a.try_ge(&b)?);
    println!("a <  b: {}", a.try_lt(&b)?);
    println!("a <= b: {}", a.try_le(&b)?);
    Ok(())
}

fn sequence(max_edges: Input, circumradius: Input, slice: Option<Slice>, records: bool, json: bool) -> Result<()> {
    let sequence = PolygonSequence::new(max_edges, circumradius).context("invalid polygon sequence")?;
    let slice = slice.unwrap_or_default();
    let ratios = sequence.ratios(slice)?;
    let max_efficiency_edges = sequence.max_efficiency_edges();
    if json {
        return print_json(&SequenceSummary {
            description: sequence.to_string(),
            len: sequence.len(),
            max_efficiency_edges,
            ratios,
            records: records.then_some(sequence.records()),
        });
    }
    println!("{}", sequence);
    println!("Length: {}", sequence.len());
    println!("Maximum efficiency is for polygon with {} edges", max_efficiency_edges);
    let (start, _, step) = slice.indices(sequence.len())?;
    for (n, ratio) in ratios.iter().enumerate() {
        let edges = rpoly_core::MIN_EDGES as isize + start + n as isize * step;
        println!("  Edges: {:<4} Efficiency: {}", edges, ratio);
    }
    if records {
        for record in sequence.records() {
            println!("{}", record);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logs(cli.log_level.as_deref())?;

    match cli.command {
        Commands::Polygon {
            edges,
            circumradius,
            property,
            json,
        } => polygon(edges, circumradius, property, json),
        Commands::Compare {
            edges_1,
            circumradius_1,
            edges_2,
            circumradius_2,
        } => {
            let a = Polygon::new(edges_1, circumradius_1).context("invalid first polygon")?;
            let b = Polygon::new(edges_2, circumradius_2).context("invalid second polygon")?;
            compare(a, b)
        }
        Commands::Sequence {
            max_edges,
            circumradius,
            slice,
            records,
            json,
        } => sequence(max_edges, circumradius, slice, records, json),
    }
}
