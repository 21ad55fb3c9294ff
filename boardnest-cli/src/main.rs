//! boardnest - CLI tool to nest a cut list onto stock sheets and export a
//! PDF layout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use boardnest_core::{generate_pdf, plan_layout, validate_layout, SheetConfig};

/// Nest a cut list onto stock sheets and export a printable PDF layout.
#[derive(Parser, Debug)]
#[command(name = "boardnest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input cut-list CSV with columns: Length (in), Height (in), Quantity
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stock sheet width in inches
    #[arg(long, default_value = "48")]
    sheet_width: f64,

    /// Stock sheet height in inches
    #[arg(long, default_value = "96")]
    sheet_height: f64,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the layout plan as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.sheet_width <= 0.0 || args.sheet_height <= 0.0 {
        anyhow::bail!(
            "Invalid sheet size {} x {}",
            args.sheet_width,
            args.sheet_height
        );
    }

    let config = SheetConfig::new(args.sheet_width, args.sheet_height);

    info!("Processing: {}", args.input.display());

    let plan = plan_layout(&args.input, &config)
        .with_context(|| format!("Failed to plan layout for {}", args.input.display()))?;

    info!(
        "Nested {} parts onto {} sheet(s)",
        plan.result.placement_count(),
        plan.report.total_sheets_used
    );

    // The rollover path can place a part out of bounds; surface it.
    let layout_check = validate_layout(&plan.result, &config);
    for warning in &layout_check.warnings {
        warn!("{}", warning);
    }
    for err in &layout_check.errors {
        error!("{}", err);
    }
    if !layout_check.passed {
        anyhow::bail!("Layout validation failed");
    }

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "Total {} x {} sheets required: {}",
        config.width, config.height, plan.report.total_sheets_used
    );
    println!("Material yield: {}", plan.report.yield_display());
    println!("Total cut length: {}", plan.report.cut_inches_display());

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let output_path = args.output.unwrap_or_else(|| {
        args.input
            .parent()
            .map(|p| p.join("layout.pdf"))
            .unwrap_or_else(|| PathBuf::from("layout.pdf"))
    });

    let pdf = generate_pdf(&plan.result, &config);
    std::fs::write(&output_path, &pdf)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
