use clap::Parser;
use fc_app::{export_csv, export_json, load_profile, summarize, AppResult, DEFAULT_LOG_NAME};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(about = "foamcheck CLI - solver-log residual convergence extractor", long_about = None)]
struct Cli {
    /// Path to the solver log
    #[arg(default_value = DEFAULT_LOG_NAME)]
    log_path: PathBuf,

    /// Output CSV file path (overwritten on each run)
    #[arg(short, long, default_value = fc_results::DEFAULT_CSV_NAME)]
    output: PathBuf,

    /// Also dump the aligned profile as pretty-printed JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let profile = load_profile(&cli.log_path)?;
    if profile.is_empty() {
        println!("No residual reports found in {}", cli.log_path.display());
    }

    export_csv(&profile, &cli.output)?;
    println!(
        "✓ Exported {} iterations to {}",
        profile.len(),
        cli.output.display()
    );

    if let Some(json_path) = &cli.json {
        export_json(&profile, json_path)?;
        println!("✓ Wrote JSON profile to {}", json_path.display());
    }

    let summary = summarize(&profile);
    if !summary.variables.is_empty() {
        println!("\nResidual summary:");
        println!("  Iterations: {}", summary.iterations);
        if let Some((t0, t1)) = summary.time_range {
            println!("  Time range: {:.3} - {:.3} s", t0, t1);
        }
        for var in &summary.variables {
            println!(
                "  {:>6}: first {:.3e}  last {:.3e}  min {:.3e}",
                var.name, var.first, var.last, var.min
            );
        }
    }

    Ok(())
}
