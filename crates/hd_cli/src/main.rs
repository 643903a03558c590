use std::fmt::Display;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hd_chart::{
    ActivationSet, CenterSet, Channel, CompositeChart, CompositeDisplay, GATE_OFFSET_DEG, encode,
};
use hd_config::Settings;
use hd_ephem::{ALL_BODIES, Body, Ephemeris};
use hd_search::{BirthData, ChartEngine, ChartReport, Deadline, DesignMoment, find_design_instant};
use hd_time::CivilTime;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hd", about = "Human Design chart calculator")]
struct Cli {
    /// Settings file (default: $HD_CONFIG, then ./hd.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gate, line, color, tone and base of a tropical longitude
    Gate {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Longitude and gate of one body at a birth instant
    Longitude {
        /// Body name (sun, earth, north-node, moon, ...)
        #[arg(long)]
        body: String,
        /// Local date-time (RFC 3339, or YYYY-MM-DDThh:mm[:ss] with --offset)
        #[arg(long)]
        date: String,
        /// UTC offset for a naive --date (e.g. +05:30)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
    },
    /// Design instant for a birth
    Design {
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Full individual chart
    Chart {
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
        /// Birth latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Birth longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Composite of two births
    Composite {
        /// First birth date-time
        #[arg(long)]
        a: String,
        /// Second birth date-time
        #[arg(long)]
        b: String,
        #[arg(long, allow_hyphen_values = true)]
        a_offset: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        b_offset: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective settings as TOML
    Config,
}

/// JSON shape of the `composite` command.
#[derive(Serialize)]
struct CompositeOutput<'a> {
    first: &'a ChartReport,
    second: &'a ChartReport,
    composite: CompositeDisplay<'a>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(context: &str, err: impl Display) -> ! {
    eprintln!("{context}: {err}");
    std::process::exit(1);
}

fn load_settings(path: Option<&Path>) -> Settings {
    Settings::discover(path).unwrap_or_else(|e| exit_with("Failed to load settings", e))
}

fn load_engine(settings: &Settings) -> ChartEngine {
    settings
        .build_engine()
        .unwrap_or_else(|e| exit_with("Failed to build engine", e))
}

fn parse_birth(
    date: &str,
    offset: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<BirthData, String> {
    let civil = match offset {
        Some(offset) => CivilTime::from_parts(date, offset),
        None => date.parse::<CivilTime>(),
    }
    .map_err(|e| format!("invalid date {date}: {e}"))?;
    let birth = match (lat, lon) {
        (Some(lat), Some(lon)) => BirthData::new(civil).with_location(lat, lon),
        (None, None) => BirthData::new(civil),
        _ => return Err("--lat and --lon must be given together".to_string()),
    };
    birth.validate().map_err(|e| e.to_string())?;
    Ok(birth)
}

fn require_birth(
    date: &str,
    offset: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> BirthData {
    parse_birth(date, offset, lat, lon).unwrap_or_else(|e| exit_with("Invalid birth data", e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => exit_with("Failed to encode JSON", e),
    }
}

fn join_centers(set: CenterSet) -> String {
    if set.is_empty() {
        return "none".to_string();
    }
    set.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
}

fn join_channels(channels: &[Channel]) -> String {
    if channels.is_empty() {
        return "none".to_string();
    }
    channels
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn print_design(moment: &DesignMoment) {
    println!("JD (TT):       {:.6}", moment.jd_tt);
    println!("Sun:           {:.6} deg", moment.sun_longitude_deg);
    println!("Target:        {:.6} deg", moment.target_longitude_deg);
    println!("Error:         {:.6} deg", moment.error_deg);
    println!("Samples:       {}", moment.samples_evaluated);
    println!("Method:        {}", moment.method.name());
}

fn print_activations(personality: &ActivationSet, design: &ActivationSet) {
    println!("{:<11} {:>12} {:>12}", "", "Personality", "Design");
    for body in ALL_BODIES {
        println!(
            "{:<11} {:>12} {:>12}",
            body.name(),
            personality.get(body).coordinate.gate_line(),
            design.get(body).coordinate.gate_line()
        );
    }
}

fn print_chart(report: &ChartReport) {
    let c = &report.chart;
    println!("Birth (UTC):   {}", report.birth_utc);
    println!(
        "Design (UTC):  {} ({}, error {:.4} deg)",
        report.design_utc,
        report.design.method.name(),
        report.design.error_deg
    );
    println!("Type:          {}", c.chart_type);
    println!("Strategy:      {}", c.strategy);
    println!("Signature:     {}", c.signature);
    println!("Not-self:      {}", c.not_self_theme);
    println!("Authority:     {}", c.authority);
    println!("Definition:    {}", c.definition);
    println!("Profile:       {}", c.profile);
    println!("Cross:         {}", c.incarnation_cross);
    println!("Defined:       {}", join_centers(c.defined_centers));
    println!("Open:          {}", join_centers(c.open_centers));
    println!("Channels:      {}", join_channels(&c.channels));
    let hanging: Vec<String> = c.hanging_gates.iter().map(|g| g.to_string()).collect();
    println!("Hanging gates: {}", hanging.join(", "));
    println!();
    print_activations(&c.personality, &c.design);
}

fn print_composite(composite: &CompositeChart) {
    println!("Connection:    {}", composite.connection_theme);
    println!("Definition:    {}", composite.definition);
    println!("Defined:       {}", join_centers(composite.defined_centers));
    println!("Open:          {}", join_centers(composite.open_centers));
    println!("Companionship: {}", join_channels(&composite.companionship));
    println!(
        "Dominance:     {} ({} total)",
        join_channels(composite.dominance_display()),
        composite.dominance.len()
    );
    println!(
        "Compromise:    {} ({} total)",
        join_channels(composite.compromise_display()),
        composite.compromise.len()
    );
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref());
    debug!(?settings, "effective settings");

    match cli.command {
        Commands::Gate { lon } => {
            if !lon.is_finite() {
                exit_with("Invalid longitude", lon);
            }
            let g = encode(lon);
            println!("{g}");
            println!("(wheel offset {GATE_OFFSET_DEG} deg)");
        }

        Commands::Longitude { body, date, offset } => {
            let body: Body = body
                .parse()
                .unwrap_or_else(|e| exit_with(&format!("Unknown body {body}"), e));
            let birth = require_birth(&date, offset.as_deref(), None, None);
            let jd_tt = birth
                .jd_tt()
                .unwrap_or_else(|e| exit_with("Invalid date", e));
            let eph = Ephemeris::analytic(settings.node_mode());
            let lon = eph
                .longitude(body, jd_tt)
                .unwrap_or_else(|e| exit_with("Longitude failed", e));
            println!("{}: {lon:.6} deg", body.name());
            println!("{}", encode(lon));
        }

        Commands::Design { date, offset, json } => {
            let engine = load_engine(&settings);
            let birth = require_birth(&date, offset.as_deref(), None, None);
            let jd_tt = birth
                .jd_tt()
                .unwrap_or_else(|e| exit_with("Invalid date", e));
            let sun = engine
                .ephemeris()
                .longitude(Body::Sun, jd_tt)
                .unwrap_or_else(|e| exit_with("Sun longitude failed", e));
            let moment = find_design_instant(
                engine.ephemeris(),
                jd_tt,
                sun,
                engine.design_config(),
                Deadline::after(settings.timeout()),
            )
            .unwrap_or_else(|e| exit_with("Design search failed", e));
            if json {
                print_json(&moment);
            } else {
                println!("Birth JD (TT): {jd_tt:.6}");
                println!("Birth Sun:     {sun:.6} deg");
                print_design(&moment);
            }
        }

        Commands::Chart {
            date,
            offset,
            lat,
            lon,
            json,
        } => {
            let engine = load_engine(&settings);
            let birth = require_birth(&date, offset.as_deref(), lat, lon);
            let report = engine
                .compute_report(&birth)
                .unwrap_or_else(|e| exit_with("Chart failed", e));
            if json {
                print_json(&report);
            } else {
                print_chart(&report);
            }
        }

        Commands::Composite {
            a,
            b,
            a_offset,
            b_offset,
            json,
        } => {
            let engine = load_engine(&settings);
            let first = require_birth(&a, a_offset.as_deref(), None, None);
            let second = require_birth(&b, b_offset.as_deref(), None, None);
            let report = engine
                .compute_composite_for(&first, &second)
                .unwrap_or_else(|e| exit_with("Composite failed", e));
            if json {
                print_json(&CompositeOutput {
                    first: &report.first,
                    second: &report.second,
                    composite: report.composite.display(),
                });
            } else {
                println!("== A ==");
                print_chart(&report.first);
                println!();
                println!("== B ==");
                print_chart(&report.second);
                println!();
                println!("== Composite ==");
                print_composite(&report.composite);
            }
        }

        Commands::Config => match settings.to_toml_string() {
            Ok(s) => print!("{s}"),
            Err(e) => exit_with("Failed to render settings", e),
        },
    }
}
