use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use configuration::{Config, FallbackSummary, OutputFormat, init_tracing, load_config, load_config_from};
use core_types::{NeedleCoordinate, SeriesSummary};
use engine::{GaugeEngine, GaugeReport};
use std::path::PathBuf;

/// The main entry point for the FX gauge.
fn main() -> Result<()> {
    // FXGAUGE_* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;

    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Evaluate(args) => handle_evaluate(args, config),
        Commands::Config => {
            log_warnings(&config);
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Emits the non-fatal configuration warnings; only meaningful once tracing is installed.
fn log_warnings(config: &Config) {
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Classifies an exchange rate against its long-window average and lays out the gauge.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of ./config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a snapshot and print the zone, thresholds and needle placements.
    Evaluate(EvaluateArgs),
    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Parser)]
struct EvaluateArgs {
    /// The latest observed rate.
    #[arg(long, requires = "mean", allow_negative_numbers = true)]
    current: Option<f64>,

    /// The long-window average rate.
    #[arg(long, requires = "current")]
    mean: Option<f64>,

    /// A comma-separated close series, oldest first, reduced to current and mean.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["current", "mean"]
    )]
    closes: Vec<f64>,

    /// Override `signal.margin` for this run (e.g. 0.07 for 7%).
    #[arg(long)]
    margin: Option<f64>,

    /// Override `gauge.spread` for this run (e.g. 0.15 for +/- 15%).
    #[arg(long)]
    spread: Option<f64>,

    /// Override `output.format` for this run.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Evaluate Command Logic
// ==============================================================================

fn handle_evaluate(args: EvaluateArgs, config: Config) -> Result<()> {
    let config = apply_overrides(&args, config)?;
    log_warnings(&config);
    let format = args.format.unwrap_or(config.output.format);

    let summary = resolve_summary(&args, &config.fallback)?;
    let engine = GaugeEngine::from_config(&config)?;
    let report = engine.evaluate(&summary)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&report),
    }
    Ok(())
}

/// Applies the per-run `--margin`/`--spread` overrides and re-validates the result.
fn apply_overrides(args: &EvaluateArgs, mut config: Config) -> Result<Config> {
    if let Some(margin) = args.margin {
        config.signal.margin = margin;
    }
    if let Some(spread) = args.spread {
        config.gauge.spread = spread;
    }
    config.validate().context("Invalid command-line override")?;
    Ok(config)
}

/// Picks the snapshot to evaluate: an explicit close series, then an explicit
/// current/mean pair, then the configured fallback.
fn resolve_summary(args: &EvaluateArgs, fallback: &FallbackSummary) -> Result<SeriesSummary> {
    if !args.closes.is_empty() {
        return SeriesSummary::from_closes(&args.closes).context("Invalid close series");
    }

    match (args.current, args.mean) {
        (Some(current), Some(mean)) => {
            SeriesSummary::new(current, mean).context("Invalid snapshot")
        }
        _ => {
            tracing::warn!(
                current = fallback.current,
                mean = fallback.mean,
                "No snapshot supplied; using the configured fallback"
            );
            fallback.to_summary().context("Invalid fallback snapshot")
        }
    }
}

fn print_report(report: &GaugeReport) {
    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);
    summary.add_row(vec!["Zone".to_string(), report.zone.to_string()]);
    summary.add_row(vec!["Current".to_string(), format!("{:.2}", report.summary.current())]);
    summary.add_row(vec!["Average".to_string(), format!("{:.2}", report.thresholds.average())]);
    summary.add_row(vec!["Limit".to_string(), format!("{:.2}", report.thresholds.limit())]);
    summary.add_row(vec![
        "Vs average".to_string(),
        format!("{:+.2}%", report.premium_over_average_pct()),
    ]);
    summary.add_row(vec![
        "Display range".to_string(),
        format!(
            "{:.2} .. {:.2}",
            report.display_range.min_scale(),
            report.display_range.max_scale()
        ),
    ]);
    summary.add_row(vec![
        "Updated".to_string(),
        report.generated_at.format("%Y-%m-%d %H:%M").to_string(),
    ]);

    let mut needles = Table::new();
    needles
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Needle", "Value", "Angle", "Tip x", "Tip y"]);
    let rows: [(&str, f64, &NeedleCoordinate); 3] = [
        ("current", report.summary.current(), &report.needles.current),
        ("average", report.thresholds.average(), &report.needles.average),
        ("limit", report.thresholds.limit(), &report.needles.limit),
    ];
    for (name, value, needle) in rows {
        needles.add_row(vec![
            name.to_string(),
            format!("{value:.2}"),
            format!("{:.1}°", needle.angle_degrees),
            format!("{:.4}", needle.tip_x),
            format!("{:.4}", needle.tip_y),
        ]);
    }

    println!("{summary}");
    println!("{needles}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_args(argv: &[&str]) -> EvaluateArgs {
        let mut full = vec!["fx-gauge", "evaluate"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Evaluate(args) => args,
            Commands::Config => panic!("expected the evaluate command"),
        }
    }

    #[test]
    fn explicit_pair_wins_over_fallback() {
        let args = evaluate_args(&["--current", "1400", "--mean", "1350"]);
        let summary = resolve_summary(&args, &FallbackSummary::default()).unwrap();
        assert_eq!(summary.current(), 1400.0);
        assert_eq!(summary.mean(), 1350.0);
    }

    #[test]
    fn closes_are_reduced() {
        let args = evaluate_args(&["--closes", "1300,1400"]);
        let summary = resolve_summary(&args, &FallbackSummary::default()).unwrap();
        assert_eq!(summary.current(), 1400.0);
        assert_eq!(summary.mean(), 1350.0);
    }

    #[test]
    fn missing_snapshot_uses_fallback() {
        let args = evaluate_args(&[]);
        let summary = resolve_summary(&args, &FallbackSummary::default()).unwrap();
        assert_eq!(summary.current(), 1447.0);
        assert_eq!(summary.mean(), 1370.3);
    }

    #[test]
    fn current_without_mean_is_rejected() {
        assert!(Cli::try_parse_from(["fx-gauge", "evaluate", "--current", "1400"]).is_err());
        assert!(
            Cli::try_parse_from([
                "fx-gauge", "evaluate", "--current", "1", "--mean", "1", "--closes", "1,2"
            ])
            .is_err()
        );
    }

    #[test]
    fn closes_may_start_or_end_negative() {
        let args = evaluate_args(&["--closes", "-10,40,-3", "--format", "json"]);
        assert_eq!(args.closes, vec![-10.0, 40.0, -3.0]);
        assert_eq!(args.format, Some(OutputFormat::Json));

        let summary = resolve_summary(&args, &FallbackSummary::default()).unwrap();
        assert_eq!(summary.current(), -3.0);
        assert_eq!(summary.mean(), 9.0);
    }

    #[test]
    fn margin_override_surfaces_a_warning() {
        let args = evaluate_args(&["--margin", "1.5"]);
        let config = apply_overrides(&args, Config::default()).unwrap();
        assert_eq!(config.signal.margin, 1.5);
        assert_eq!(config.warnings().len(), 1);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = evaluate_args(&["--spread", "1.2"]);
        assert!(apply_overrides(&args, Config::default()).is_err());
    }

    #[test]
    fn format_override_parses() {
        let args = evaluate_args(&["--format", "json", "--margin", "0.05"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.margin, Some(0.05));
    }
}
