//! Geosketch - Entry Point
//!
//! Terminal front end for the sketching library. It wires a narrating
//! text renderer into the sketch manager and maps typed commands onto
//! the gesture protocol and the measurement menu.

use geosketch::command::{self, MenuCommand};
use geosketch::core::config::SketchConfig;
use geosketch::core::error::{Result, SketchError};
use geosketch::core::types::GeoPoint;
use geosketch::map::location::{FixedLocationProvider, LocationProvider};
use geosketch::map::render::MapRenderer;
use geosketch::sketch::manager::PolygonSketchManager;
use geosketch::sketch::state::{InteractionState, SketchEvent};

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

/// Interactive geographic polygon sketching
#[derive(Parser, Debug)]
#[command(name = "geosketch")]
#[command(about = "Sketch a polygon on the globe from the terminal and measure it")]
struct Args {
    /// Path to a TOML config file (closure tolerance, marker numbering)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observer position as "lat,lon" for the locate command
    #[arg(long)]
    location: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for logging
    let filter = if args.verbose { "geosketch=debug" } else { "geosketch=info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Geosketch starting...");

    let config = match &args.config {
        Some(path) => SketchConfig::load(path)?,
        None => SketchConfig::default(),
    };

    let provider = match &args.location {
        Some(text) => FixedLocationProvider::new(parse_lat_lon(text)?),
        None => FixedLocationProvider::no_fix(),
    };

    let mut sketch = PolygonSketchManager::with_config(TerminalRenderer, config);

    // Display welcome message
    println!("\n=== GEOSKETCH ===");
    println!("Sketch a polygon on the globe, then measure it");
    println!();
    println!("Commands:");
    println!("  mark <lat> <lon>  - Long-press: place the first point");
    println!("  tap <lat> <lon>   - Tap: extend the path, or close it near the start");
    println!("  close             - Close the ring without tapping");
    println!("  distance          - Distance from first to latest point (open sketch)");
    println!("  perimeter         - Ring length (closed sketch)");
    println!("  area              - Enclosed area (closed sketch)");
    println!("  locate            - Show the observer position");
    println!("  clear             - Discard the sketch and start over");
    println!("  quit / q          - Exit");
    println!();

    // Main interaction loop
    loop {
        display_status(&sketch);

        // Prompt for input
        print!("> ");
        io::stdout().flush()?;

        // Read input
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        // Handle empty input
        if input.is_empty() {
            continue;
        }

        // Handle quit command
        if input == "quit" || input == "q" {
            break;
        }

        // Handle gesture commands
        if let Some(rest) = input.strip_prefix("mark ") {
            match parse_lat_lon(rest) {
                Ok(point) => report(sketch.handle_long_press(point)),
                Err(_) => println!("Usage: mark <lat> <lon>"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("tap ") {
            match parse_lat_lon(rest) {
                Ok(point) => report(sketch.handle_tap(point)),
                Err(_) => println!("Usage: tap <lat> <lon>"),
            }
            continue;
        }

        if input == "close" {
            report(sketch.close_polygon());
            continue;
        }

        // Handle measurement menu commands
        if input == "distance" {
            println!("{}", command::execute(MenuCommand::Distance, &mut sketch));
            continue;
        }

        if input == "perimeter" {
            println!("{}", command::execute(MenuCommand::Perimeter, &mut sketch));
            continue;
        }

        if input == "area" {
            println!("{}", command::execute(MenuCommand::Area, &mut sketch));
            continue;
        }

        if input == "clear" {
            println!("{}", command::execute(MenuCommand::Clear, &mut sketch));
            continue;
        }

        // Handle locate command
        if input == "locate" {
            match provider.last_location() {
                Some(here) => println!(
                    "Current location: latitude {:.6}, longitude {:.6}",
                    here.lat, here.lon
                ),
                None => println!("Could not obtain the current location."),
            }
            continue;
        }

        println!(
            "Unknown command. Available: mark <lat> <lon>, tap <lat> <lon>, close, \
             distance, perimeter, area, locate, clear, quit"
        );
    }

    let (state, points) = status_parts(&sketch);
    println!("\nGoodbye! Final sketch: {} with {} points.", state, points);
    Ok(())
}

/// Renderer that narrates drawing operations to the terminal
struct TerminalRenderer;

impl MapRenderer for TerminalRenderer {
    fn add_marker(&mut self, point: GeoPoint, label: &str) {
        println!("[map] marker \"{}\" at {:.5}, {:.5}", label, point.lat, point.lon);
    }

    fn add_line(&mut self, positions: &[GeoPoint]) {
        println!("[map] line through {} points", positions.len());
    }

    fn add_filled_polygon(&mut self, positions: &[GeoPoint]) {
        println!("[map] filled polygon with {} vertices", positions.len() - 1);
    }

    fn clear(&mut self) {
        println!("[map] cleared");
    }
}

/// Print the advisory for a gesture outcome, if it has one
fn report(event: SketchEvent) {
    if let Some(advisory) = event.advisory() {
        println!("{}", advisory);
    }
}

/// Parse "lat,lon" or "lat lon" into a point
fn parse_lat_lon(text: &str) -> Result<GeoPoint> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(SketchError::InvalidCoordinate(format!(
            "expected \"lat,lon\", got \"{}\"",
            text
        )));
    }

    let lat: f64 = parts[0]
        .parse()
        .map_err(|_| SketchError::InvalidCoordinate(parts[0].to_string()))?;
    let lon: f64 = parts[1]
        .parse()
        .map_err(|_| SketchError::InvalidCoordinate(parts[1].to_string()))?;
    Ok(GeoPoint::new(lat, lon))
}

fn status_parts<R: MapRenderer>(sketch: &PolygonSketchManager<R>) -> (&'static str, usize) {
    match sketch.state() {
        InteractionState::Empty => ("empty", 0),
        InteractionState::Open => ("open", sketch.positions().len()),
        // The stored ring repeats the first point; report distinct vertices
        InteractionState::Closed => ("closed", sketch.positions().len() - 1),
    }
}

/// Display a brief status line between prompts
fn display_status<R: MapRenderer>(sketch: &PolygonSketchManager<R>) {
    let (state, points) = status_parts(sketch);
    println!();
    println!("--- Sketch: {} | {} points ---", state, points);
}
