use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Parser, Subcommand};
use fleetsave_cli::config::{self, ConfigMerger, FleetOverrides, OutputFormat};
use fleetsave_cli::explain::{RESTRICTION_REGISTRY, list_restriction_keys, lookup_restriction};
use fleetsave_domain::{RestrictionSelector, SavingsEngine, validate_assumptions, validate_draft};
use fleetsave_render::{
    render_breakdown_md, render_breakdown_text, render_options_text, render_report_json,
    render_restrictions_text,
};
use fleetsave_types::country::{BELGIUM, CountryCode, EURO_COUNTRIES};
use fleetsave_types::report::{SavingsReport, ToolInfo};
use fleetsave_types::restriction::RestrictionKind;
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fleetsave",
    version,
    about = "Estimate yearly savings from fleet charging restrictions."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the savings estimate for a fleet.
    Compute(ComputeArgs),
    /// Show which restrictions can be selected next, and the inputs they need.
    Options(OptionsArgs),
    /// Explain what a restriction does and how its savings are computed.
    Explain(ExplainArgs),
    /// List all restrictions.
    ListRestrictions(ListArgs),
    /// List the countries a fleet may be restricted to.
    ListCountries,
}

#[derive(Debug, Parser)]
struct ComputeArgs {
    /// Directory searched for fleetsave.toml (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Explicit config file (skips discovery).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Number of cars in the fleet.
    #[arg(long)]
    cars: Option<u32>,

    /// Yearly distance allowed per car.
    #[arg(long)]
    mileage: Option<f64>,

    /// Restriction to apply (repeatable; replaces the config file list).
    #[arg(long = "restriction")]
    restrictions: Vec<RestrictionKind>,

    /// Country where charging is allowed (repeatable; replaces the config file list).
    #[arg(long = "country")]
    countries: Vec<CountryCode>,

    /// Monthly charging budget per car, in EUR.
    #[arg(long)]
    monthly_budget: Option<f64>,

    /// Maximum price per kWh, in EUR.
    #[arg(long)]
    kwh_price_cap: Option<f64>,

    /// Output format (default: from config, else text).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the output to a file instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

impl ComputeArgs {
    fn overrides(&self) -> FleetOverrides {
        FleetOverrides {
            cars: self.cars,
            mileage: self.mileage,
            restrictions: self.restrictions.clone(),
            countries: self.countries.clone(),
            monthly_budget: self.monthly_budget,
            kwh_price_cap: self.kwh_price_cap,
            format: self.format,
        }
    }
}

#[derive(Debug, Parser)]
struct OptionsArgs {
    /// Currently selected restriction (repeatable).
    #[arg(long = "restriction")]
    restrictions: Vec<RestrictionKind>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: ListFormat,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Restriction key to explain (e.g., "monthly_budget", "price-cap").
    restriction: String,
}

#[derive(Debug, Parser)]
struct ListArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: ListFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(fleetsave_cli::exit_code(&e));
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compute(args) => cmd_compute(args),
        Command::Options(args) => cmd_options(args),
        Command::Explain(args) => cmd_explain(args),
        Command::ListRestrictions(args) => cmd_list_restrictions(args),
        Command::ListCountries => cmd_list_countries(),
    }
}

fn cmd_compute(args: ComputeArgs) -> anyhow::Result<()> {
    let file_config = config::resolve_config(&args.root, args.config.as_deref())
        .context("load fleetsave.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_compute_args(&args.overrides());

    debug!(
        "merged config: draft={:?}, format={:?}",
        merged.draft, merged.format
    );

    let mut selector = RestrictionSelector::new();
    let selection = selector.apply_selection(merged.draft.restrictions.clone());

    validate_assumptions(&merged.assumptions).context("invalid [assumptions] in config")?;
    validate_draft(&merged.draft, &merged.assumptions).context("invalid fleet configuration")?;

    let engine = SavingsEngine::with_assumptions(merged.assumptions);
    let breakdown = engine.evaluate_draft(&merged.draft);

    let rendered = match merged.format {
        OutputFormat::Text => render_breakdown_text(breakdown.as_ref()),
        OutputFormat::Markdown => render_breakdown_md(breakdown.as_ref()),
        OutputFormat::Json => {
            let mut report = SavingsReport::new(
                tool_info(),
                merged.draft,
                selection,
                merged.assumptions,
                breakdown,
            );
            report.generated_at = Some(Utc::now());
            render_report_json(&report).context("serialize report")?
        }
    };

    emit(args.out.as_deref(), &rendered)
}

fn emit(out: Option<&Utf8Path>, rendered: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
            }
            fs::write(path, rendered).with_context(|| format!("write {}", path))?;
            info!("wrote estimate to {}", path);
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "fleetsave".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

fn cmd_options(args: OptionsArgs) -> anyhow::Result<()> {
    let mut selector = RestrictionSelector::new();
    let outcome = selector.apply_selection(args.restrictions.into_iter().collect());

    match args.format {
        ListFormat::Text => print!("{}", render_options_text(&outcome)),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let Some(entry) = lookup_restriction(&args.restriction) else {
        let available = list_restriction_keys().join(", ");
        anyhow::bail!(
            "Unknown restriction: '{}'\n\nAvailable restrictions: {}",
            args.restriction,
            available
        );
    };

    println!("================================================================================");
    println!("RESTRICTION: {}", entry.title);
    println!("================================================================================");
    println!();
    println!("Key:       {}", entry.kind);
    if let Some(other) = entry.kind.conflicts_with() {
        println!("Excludes:  {}", other);
    }
    println!();

    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", entry.description);
    println!();

    println!("REQUIRED INPUT");
    println!("--------------------------------------------------------------------------------");
    println!("{}", entry.follow_up);
    println!();

    println!("YEARLY SAVINGS FORMULA");
    println!("--------------------------------------------------------------------------------");
    println!("{}", entry.formula);
    println!();

    Ok(())
}

fn cmd_list_restrictions(args: ListArgs) -> anyhow::Result<()> {
    match args.format {
        ListFormat::Text => {
            print!("{}", render_restrictions_text());
            println!();
            println!("Use 'fleetsave explain <key>' for details.");
        }
        ListFormat::Json => {
            let entries: Vec<_> = RESTRICTION_REGISTRY
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "key": e.kind.as_str(),
                        "title": e.title,
                        "excludes": e.kind.conflicts_with().map(|k| k.as_str()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

fn cmd_list_countries() -> anyhow::Result<()> {
    for code in EURO_COUNTRIES {
        if *code == BELGIUM {
            println!("{code}  (savings credited when it is the only country)");
        } else {
            println!("{code}");
        }
    }
    Ok(())
}
