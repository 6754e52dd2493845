//! ACK API Extractor CLI
//!
//! Extracts the full operation set of one or more AWS services from their
//! Smithy models, cross-references each operation against the sibling ACK
//! controller checkout, and writes per-service JSON documents. Optionally
//! classifies unimplemented operations via an external oracle and derives a
//! least-privilege IAM policy covering the implemented subset.

use ack_api_extractor_analyzer::OperationExtractor;
use ack_api_extractor_common::ServiceOperationSet;
use ack_api_extractor_generator::{
    synthesize_policy, validate_policy, write_operations_json, write_policy_json,
};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ack-api-extractor")]
#[command(version, about = "Extract AWS API operation coverage from ACK controllers", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Operation coverage for one service\n  \
    ack-api-extractor --service dynamodb --output ./results\n\n  \
    # Several services, with oracle classification\n  \
    ack-api-extractor --service acm,dynamodb,lambda --output ./results --classify\n\n  \
    # Coverage plus a least-privilege IAM policy per service\n  \
    ack-api-extractor --service s3 --output ./results --generate-policy")]
struct Cli {
    /// AWS service name(s), comma-separated (e.g., acm,dynamodb,lambda)
    #[arg(short, long, value_delimiter = ',', required = true)]
    service: Vec<String>,

    /// Output directory for generated JSON files
    #[arg(short, long)]
    output: PathBuf,

    /// Classify unimplemented operations as control plane vs data plane
    #[arg(long)]
    classify: bool,

    /// Also derive a least-privilege IAM policy per service
    #[arg(long)]
    generate_policy: bool,

    /// Directory containing the sibling api-models-aws and controller checkouts
    #[arg(long, default_value = "..")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let services: Vec<String> = cli
        .service
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if services.is_empty() {
        anyhow::bail!("at least one service name is required (--service)");
    }

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory {}", cli.output.display())
    })?;

    if cli.classify {
        println!(
            "{} Generating JSON files with oracle classification for {} service(s)\n",
            "→".cyan(),
            services.len()
        );
    } else {
        println!(
            "{} Generating JSON files for {} service(s)\n",
            "→".cyan(),
            services.len()
        );
    }

    let extractor = OperationExtractor::new(&cli.root);

    let mut total_operations = 0;
    let mut successful_services = 0;

    for service in &services {
        match process_service(&extractor, service, &cli) {
            Ok(count) => {
                total_operations += count;
                successful_services += 1;
            }
            Err(e) => {
                eprintln!("{} {service}: {e:#}", "✗".red());
            }
        }
    }

    println!(
        "\n{} Generated JSON files for {successful_services}/{} services",
        "✓".green().bold(),
        services.len()
    );
    println!("Total operations extracted: {total_operations}");

    Ok(())
}

/// Run the pipeline for one service; returns its operation count
fn process_service(extractor: &OperationExtractor, service: &str, cli: &Cli) -> Result<usize> {
    let set = extractor
        .extract(service, cli.classify)
        .context("failed to extract operations")?;

    let operations_path = cli.output.join(format!("{service}-operations.json"));
    write_operations_json(&set, &operations_path)
        .with_context(|| format!("failed to write {}", operations_path.display()))?;

    println!(
        "{} {service}: {} operations → {}",
        "✓".green(),
        set.total_operations,
        operations_path.display()
    );
    if cli.verbose {
        print_summary(&set);
    }

    // Policy generation failures never unwind the operations document that
    // was just written.
    if cli.generate_policy {
        match generate_policy(service, &set, cli) {
            Ok(policy_path) => {
                println!("{} {service}: IAM policy → {}", "✓".green(), policy_path.display());
            }
            Err(e) => {
                eprintln!("{} {service}: failed to generate policy: {e:#}", "⚠".yellow());
            }
        }
    }

    Ok(set.total_operations)
}

fn generate_policy(service: &str, set: &ServiceOperationSet, cli: &Cli) -> Result<PathBuf> {
    let policy = synthesize_policy(&cli.root, service, &set.operations)?;
    validate_policy(&policy)?;

    let policy_path = cli.output.join(format!("{service}-policy.json"));
    write_policy_json(&policy, &policy_path)
        .with_context(|| format!("failed to write {}", policy_path.display()))?;

    Ok(policy_path)
}

fn print_summary(set: &ServiceOperationSet) {
    println!("  Supported: {}/{}", set.supported_operations, set.total_operations);
    println!("  Control plane: {}", set.control_plane_operations);
    println!(
        "  Supported control plane: {}",
        set.supported_control_plane_operations
    );
}
