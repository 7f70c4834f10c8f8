use anyhow::Context;
use clap::{Parser, Subcommand};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetDraft;
use fleetsave_types::report::{SavingsReport, ToolInfo};
use fleetsave_types::savings::SavingsBreakdown;
use fleetsave_types::selection::SelectionOutcome;
use fs_err as fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by fleetsave.
    PrintSchemas,
    /// Write a starter fleetsave.toml with every assumption spelled out.
    InitConfig {
        #[arg(long, default_value = "fleetsave.toml")]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print an empty report envelope (useful when wiring a host against the JSON shape).
    SampleReport,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", fleetsave_types::schema::FLEETSAVE_REPORT_V1);
        }
        Command::InitConfig { path, force } => init_config(&path, force)?,
        Command::SampleReport => {
            let report = sample_report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    let contents = starter_config()?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn starter_config() -> anyhow::Result<String> {
    let assumptions =
        toml::to_string(&Assumptions::default()).context("serialize default assumptions")?;

    let mut out = String::new();
    out.push_str("# fleetsave configuration. Command-line flags override these values.\n\n");
    out.push_str("[fleet]\n");
    out.push_str("car_count = 10\n");
    out.push_str("yearly_mileage_allowed = 20000\n");
    out.push_str("# monthly_budget | price_cap | country_restriction | fast_charging\n");
    out.push_str("restrictions = []\n");
    out.push_str("country_restrictions = []\n");
    out.push_str("# monthly_charging_budget = 50.0\n");
    out.push_str("# kwh_price_cap = 0.30\n\n");
    out.push_str("[assumptions]\n");
    out.push_str(&assumptions);
    out.push_str("\n[output]\n");
    out.push_str("format = \"text\"\n");
    Ok(out)
}

fn sample_report() -> SavingsReport {
    SavingsReport::new(
        ToolInfo {
            name: "fleetsave".to_string(),
            version: None,
        },
        FleetDraft::default(),
        SelectionOutcome {
            resolved: Default::default(),
            options: Default::default(),
            follow_ups: Vec::new(),
        },
        Assumptions::default(),
        Some(SavingsBreakdown::default()),
    )
}
