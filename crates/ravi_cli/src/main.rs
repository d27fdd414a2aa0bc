use std::error::Error;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use ravi_search::{
    Cancellation, IngressConfig, IngressEvent, ScanConfig, ScanStep, cardinal_points,
    find_longitude_ranges, next_ingress, next_specific_ingress, prev_ingress,
    prev_specific_ingress, search_ingresses, sign_durations,
};
use ravi_solar::{solar_longitude_for, solar_speed};
use ravi_time::{PrecisionWarning, UtcTime};
use ravi_zodiac::{
    ALL_SIGNS, ZodiacPosition, ZodiacSign, deg_to_dms, zodiac_position, zodiac_position_for_date,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ravi", about = "Solar longitude and zodiac calendar CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apparent solar longitude at an instant
    Longitude {
        /// Instant (YYYY-MM-DD[Thh:mm[:ss]][Z]); defaults to now
        #[arg(long, value_parser = parse_utc)]
        date: Option<UtcTime>,
    },
    /// Zodiac sign, degree and decan of the Sun at an instant
    Zodiac {
        /// Instant (YYYY-MM-DD[Thh:mm[:ss]][Z]); defaults to now
        #[arg(long, value_parser = parse_utc)]
        date: Option<UtcTime>,
    },
    /// Zodiac decomposition of an ecliptic longitude
    ZodiacLon {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Apparent solar speed in degrees per day
    Speed {
        /// Instant (YYYY-MM-DD[Thh:mm[:ss]][Z]); defaults to now
        #[arg(long, value_parser = parse_utc)]
        date: Option<UtcTime>,
    },
    /// Date ranges in a year when the Sun is at a target longitude
    Search {
        /// Target longitude in degrees [0, 360)
        #[arg(long)]
        target: f64,
        /// Calendar year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Equinoxes and solstices of a year (hourly by default)
    Cardinal {
        /// Calendar year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Days the Sun spends in each sign, starting in a year
    Durations {
        /// Calendar year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Next (or previous) sign ingress from an instant
    Ingress {
        /// Instant (YYYY-MM-DD[Thh:mm[:ss]][Z]); defaults to now
        #[arg(long, value_parser = parse_utc)]
        date: Option<UtcTime>,
        /// Search backward
        #[arg(long)]
        prev: bool,
        /// Only this sign (e.g. leo)
        #[arg(long, value_parser = parse_sign)]
        sign: Option<ZodiacSign>,
    },
    /// All sign ingresses between two instants
    Ingresses {
        /// Window start (YYYY-MM-DD[Thh:mm[:ss]][Z])
        #[arg(long, value_parser = parse_utc)]
        start: UtcTime,
        /// Window end (YYYY-MM-DD[Thh:mm[:ss]][Z])
        #[arg(long, value_parser = parse_utc)]
        end: UtcTime,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

#[derive(Args)]
struct ScanArgs {
    /// Sampling step: daily, hourly, or minutes as e.g. 30m
    #[arg(long, value_parser = parse_step)]
    step: Option<ScanStep>,
    /// Match tolerance in degrees
    #[arg(long, default_value_t = ravi_search::DEFAULT_TOLERANCE_DEG)]
    tolerance: f64,
    /// Disable the thread pool
    #[arg(long)]
    sequential: bool,
    /// Abort the scan after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl ScanArgs {
    fn config(&self, default_step: ScanStep) -> ScanConfig {
        let mut config = ScanConfig::daily()
            .with_step(self.step.unwrap_or(default_step))
            .with_tolerance(self.tolerance);
        if self.sequential {
            config = config.sequential();
        }
        if let Some(ms) = self.timeout_ms {
            let cancel = Cancellation::none().with_timeout(Duration::from_millis(ms));
            config = config.with_cancellation(cancel);
        }
        config
    }
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    let utc: UtcTime = s.parse().map_err(|e| format!("{e}"))?;
    utc.validate().map_err(|e| format!("{e}"))?;
    Ok(utc)
}

fn now() -> UtcTime {
    UtcTime::from(chrono::Utc::now())
}

fn parse_step(s: &str) -> Result<ScanStep, String> {
    match s.to_ascii_lowercase().as_str() {
        "daily" | "day" | "1d" => Ok(ScanStep::Daily),
        "hourly" | "hour" | "1h" => Ok(ScanStep::Hourly),
        other => {
            let minutes = other
                .strip_suffix('m')
                .ok_or_else(|| format!("expected daily, hourly or <n>m, got {s}"))?;
            let n: u32 = minutes.parse().map_err(|e| format!("{e}"))?;
            if !(1..=1440).contains(&n) {
                return Err(format!("minutes must be in 1..=1440, got {n}"));
            }
            Ok(ScanStep::Minutes(n))
        }
    }
}

fn parse_sign(s: &str) -> Result<ZodiacSign, String> {
    ALL_SIGNS
        .iter()
        .copied()
        .find(|sign| sign.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown sign: {s}"))
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_position(p: &ZodiacPosition) {
    println!(
        "{} {} ({:.4} deg in sign, lon {:.4} deg)",
        p.sign.display_name(),
        p.dms,
        p.degree_in_sign,
        p.absolute_longitude_deg
    );
    println!(
        "  Element: {}  Modality: {}  Ruler: {}",
        p.sign.element().name(),
        p.sign.modality().name(),
        p.sign.ruler()
    );
    println!("  Decan {} ruled by {}", p.decan, p.decan_ruler);
    println!("  Keywords: {}", p.keywords.join(", "));
    print_warning(p.warning);
}

fn print_warning(warning: Option<PrecisionWarning>) {
    if let Some(w) = warning {
        println!("  Warning: {w}");
    }
}

fn print_ingress(label: &str, ev: &IngressEvent) {
    println!(
        "{label}: {} at {:.0} deg",
        ev.sign.display_name(),
        ev.target_longitude_deg
    );
    println!("  Time: {}  (JD {:.6})", ev.instant, ev.jd);
    print_warning(ev.warning);
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    match cli.command {
        Commands::Longitude { date } => {
            let date = date.unwrap_or_else(now);
            let sl = solar_longitude_for(&date)?;
            if json {
                return print_json(&sl);
            }
            println!("Apparent longitude: {:.6} deg", sl.apparent_longitude_deg);
            println!("  Mean longitude:      {:.6} deg", sl.mean_longitude_deg);
            println!(
                "  Equation of center:  {:+.6} deg",
                sl.correction.equation_of_center_deg
            );
            println!("  Aberration:          {:+.6} deg", sl.correction.aberration_deg);
            println!("  JD {:.6}  T {:+.9}", sl.moment.julian_day, sl.moment.centuries);
            print_warning(sl.warning);
        }

        Commands::Zodiac { date } => {
            let date = date.unwrap_or_else(now);
            let p = zodiac_position_for_date(&date)?;
            if json {
                return print_json(&p);
            }
            print_position(&p);
        }

        Commands::ZodiacLon { lon } => {
            if !lon.is_finite() {
                return Err(format!("longitude must be finite, got {lon}").into());
            }
            let p = zodiac_position(lon);
            if json {
                return print_json(&p);
            }
            print_position(&p);
        }

        Commands::Speed { date } => {
            let date = date.unwrap_or_else(now);
            let speed = solar_speed(&date)?;
            if json {
                return print_json(&speed);
            }
            println!("Solar speed: {:.6} deg/day", speed.deg_per_day);
            println!("  Mean anomaly: {:.4} deg", speed.mean_anomaly_deg);
            print_warning(speed.warning);
        }

        Commands::Search { target, year, scan } => {
            let config = scan.config(ScanStep::Daily);
            let ranges = find_longitude_ranges(target, year, &config)?;
            if json {
                return print_json(&ranges);
            }
            if ranges.is_empty() {
                println!("No ranges found for {target} deg in {year}; try a wider --tolerance");
            }
            for r in &ranges {
                println!("{} .. {}  ({:.1} h)", r.start, r.end, r.duration_hours());
            }
            print_warning(ranges.iter().find_map(|r| r.warning));
        }

        Commands::Cardinal { year, scan } => {
            let config = scan.config(ScanStep::Hourly);
            let points = cardinal_points(year, &config)?;
            if json {
                return print_json(&points);
            }
            println!("Cardinal points {year}:");
            for p in points.as_array() {
                println!(
                    "  {:<16} {}  lon {:.4} deg  (off {:.4})",
                    p.kind.name(),
                    p.instant,
                    p.longitude_deg,
                    p.distance_deg
                );
            }
            print_warning(points.warning);
        }

        Commands::Durations { year, scan } => {
            let config = scan.config(ScanStep::Daily);
            let table = sign_durations(year, &config)?;
            if json {
                return print_json(&table);
            }
            println!("Sign durations from {year}:");
            for (sign, days) in table.iter() {
                match days {
                    Some(d) => println!("  {:<12} {d:.2} days", sign.display_name()),
                    None => println!("  {:<12} (no crossing found)", sign.display_name()),
                }
            }
            if let Some(total) = table.total_days() {
                println!("  Total        {total:.2} days");
            }
            print_warning(table.warning);
        }

        Commands::Ingress { date, prev, sign } => {
            let date = date.unwrap_or_else(now);
            let config = IngressConfig::default();
            let event = match (sign, prev) {
                (Some(s), false) => next_specific_ingress(&date, s, &config)?,
                (Some(s), true) => prev_specific_ingress(&date, s, &config)?,
                (None, false) => next_ingress(&date, &config)?,
                (None, true) => prev_ingress(&date, &config)?,
            };
            if json {
                return print_json(&event);
            }
            let label = if prev { "Previous ingress" } else { "Next ingress" };
            match event {
                Some(ev) => print_ingress(label, &ev),
                None => println!("No ingress found within search range"),
            }
        }

        Commands::Ingresses { start, end } => {
            let events = search_ingresses(&start, &end, &IngressConfig::default())?;
            if json {
                return print_json(&events);
            }
            println!("Found {} ingresses", events.len());
            print_warning(events.iter().find_map(|ev| ev.warning));
            for ev in &events {
                println!("  {:<12} {}", ev.sign.display_name(), ev.instant);
            }
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            if json {
                return print_json(&dms);
            }
            println!("{dms}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(json = cli.json, "starting");

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn step_parsing() {
        assert_eq!(parse_step("daily"), Ok(ScanStep::Daily));
        assert_eq!(parse_step("Hourly"), Ok(ScanStep::Hourly));
        assert_eq!(parse_step("15m"), Ok(ScanStep::Minutes(15)));
        assert!(parse_step("0m").is_err());
        assert!(parse_step("weekly").is_err());
    }

    #[test]
    fn sign_parsing() {
        assert_eq!(parse_sign("LEO"), Ok(ZodiacSign::Leo));
        assert!(parse_sign("ophiuchus").is_err());
    }

    #[test]
    fn utc_parsing_validates() {
        assert!(parse_utc("2024-07-23").is_ok());
        assert!(parse_utc("2024-02-30").is_err());
    }

    #[test]
    fn now_is_valid() {
        assert!(now().validate().is_ok());
    }

    #[test]
    fn date_defaults_to_none() {
        let cli = Cli::try_parse_from(["ravi", "zodiac"]).unwrap();
        assert!(matches!(cli.command, Commands::Zodiac { date: None }));
    }

    #[test]
    fn search_args_parse() {
        let cli = Cli::try_parse_from([
            "ravi", "--json", "search", "--target", "90", "--year", "2024", "--step", "hourly",
            "--sequential",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Search { target, year, scan } => {
                assert_eq!(target, 90.0);
                assert_eq!(year, 2024);
                let c = scan.config(ScanStep::Daily);
                assert_eq!(c.step, ScanStep::Hourly);
                assert!(!c.parallel);
            }
            _ => panic!("expected search"),
        }
    }
}
