//! CLI for the luxmatch substitution engine.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use luxmatch::engine::{SubstitutionEngine, DEFAULT_ALTERNATIVES};
use luxmatch::models::MatchResult;
use luxmatch::report;
use luxmatch::ScoringWeights;

#[derive(Parser)]
#[command(name = "luxmatch", version, about = "Intelligent product substitution for lighting BOQs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a BOQ file and match every line item
    Process {
        /// Path to the BOQ file (delimited text)
        boq_file: PathBuf,
        /// Output file path (.csv, .json, or text report)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path to the catalog file
        #[arg(short, long, env = "LUXMATCH_CATALOG")]
        catalog: PathBuf,
        /// Number of alternative matches to keep per item
        #[arg(long, default_value_t = DEFAULT_ALTERNATIVES)]
        alternatives: usize,
    },
    /// Match a single free-text description
    Query {
        /// Product description to match
        description: String,
        #[arg(short, long, env = "LUXMATCH_CATALOG")]
        catalog: PathBuf,
        #[arg(long, default_value_t = DEFAULT_ALTERNATIVES)]
        alternatives: usize,
    },
    /// Show catalog statistics
    Stats {
        #[arg(short, long, env = "LUXMATCH_CATALOG")]
        catalog: PathBuf,
    },
    /// Interactive query loop
    Interactive {
        #[arg(short, long, env = "LUXMATCH_CATALOG")]
        catalog: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Process {
            boq_file,
            output,
            catalog,
            alternatives,
        } => run_process(&boq_file, output.as_deref(), &catalog, alternatives),
        Command::Query {
            description,
            catalog,
            alternatives,
        } => run_query(&description, &catalog, alternatives),
        Command::Stats { catalog } => run_stats(&catalog),
        Command::Interactive { catalog } => run_interactive(&catalog),
    }
}

fn load_engine(catalog: &Path) -> anyhow::Result<SubstitutionEngine> {
    let mut engine = SubstitutionEngine::new(ScoringWeights::default());
    let count = engine
        .load_catalog(catalog)
        .with_context(|| format!("loading catalog {}", catalog.display()))?;
    println!("Catalog loaded: {count} variants");
    Ok(engine)
}

fn run_process(
    boq_file: &Path,
    output: Option<&Path>,
    catalog: &Path,
    alternatives: usize,
) -> anyhow::Result<()> {
    let engine = load_engine(catalog)?;
    println!("Processing BOQ file: {}", boq_file.display());

    let results = engine
        .process_file(boq_file, alternatives)
        .with_context(|| format!("processing {}", boq_file.display()))?;

    println!();
    println!("{}", "=".repeat(60));
    println!("PROCESSING COMPLETE");
    println!("{}", "=".repeat(60));
    println!("Total items processed: {}", results.len());
    println!(
        "High confidence matches (>85%): {}",
        results.iter().filter(|r| r.confidence >= 0.85).count()
    );
    println!(
        "Medium confidence (70-85%): {}",
        results
            .iter()
            .filter(|r| (0.70..0.85).contains(&r.confidence))
            .count()
    );
    println!(
        "Low confidence (<70%): {}",
        results.iter().filter(|r| r.confidence < 0.70).count()
    );
    println!(
        "Flagged for review: {}",
        results.iter().filter(|r| r.needs_review()).count()
    );

    if let Some(path) = output {
        report::write_results(&results, path)?;
        println!("\nResults written to: {}", path.display());
    } else {
        println!("\n{}", "-".repeat(60));
        for result in &results {
            print_brief(result);
        }
    }
    Ok(())
}

fn print_brief(result: &MatchResult) {
    let description: String = result.item.raw_description.chars().take(50).collect();
    println!("\nRow {}: {description}...", result.item.row_number);
    println!("  -> {}", result.variant.sku);
    println!(
        "     Confidence: {:.0}% ({})",
        result.confidence * 100.0,
        result.tier()
    );
    println!("     {}", result.justification);
    for warning in &result.warnings {
        println!("     WARNING: {warning}");
    }
}

fn run_query(description: &str, catalog: &Path, alternatives: usize) -> anyhow::Result<()> {
    let engine = load_engine(catalog)?;

    println!("\nSearching for: {description}");
    println!("{}", "-".repeat(60));

    let result = engine.match_description(description, alternatives)?;

    println!("\nBEST MATCH:");
    println!("  SKU: {}", result.variant.sku);
    println!("  Category: {}", result.variant.category);
    println!("  Price: {:.2}", result.variant.price);

    let mut specs = Vec::new();
    if let Some(power) = result.variant.power_w {
        specs.push(format!("{power}W"));
    }
    if let Some(lumen) = result.variant.lumen {
        specs.push(format!("{lumen:.0}lm"));
    }
    if let Some(ip) = &result.variant.ip_rating {
        specs.push(ip.to_string());
    }
    specs.push(result.variant.shape.to_string());
    println!("  Specs: {}", specs.join(" | "));

    println!(
        "\n  Confidence: {:.0}% ({})",
        result.confidence * 100.0,
        result.tier()
    );
    println!("  Justification: {}", result.justification);

    println!("\n  Score Breakdown:");
    let breakdown = &result.breakdown;
    for (label, criterion) in [
        ("IP Rating", &breakdown.ip),
        ("Shape", &breakdown.shape),
        ("Wattage", &breakdown.wattage),
        ("Lumens", &breakdown.lumens),
        ("Efficacy", &breakdown.efficacy),
        ("Features", &breakdown.features),
    ] {
        println!("    {label}: {:.1} - {}", criterion.score, criterion.reason);
    }

    if !result.warnings.is_empty() {
        println!("\n  WARNINGS:");
        for warning in &result.warnings {
            println!("    - {warning}");
        }
    }

    if !result.alternatives.is_empty() {
        println!("\nALTERNATIVES:");
        for (index, alt) in result.alternatives.iter().enumerate() {
            println!(
                "  {}. {} - {:.0}%",
                index + 1,
                alt.variant.sku,
                alt.confidence * 100.0
            );
            println!("     {}", alt.justification);
        }
    }
    Ok(())
}

fn run_stats(catalog: &Path) -> anyhow::Result<()> {
    let engine = load_engine(catalog)?;
    let stats = engine.stats()?;

    println!("{}", "=".repeat(60));
    println!("CATALOG STATISTICS");
    println!("{}", "=".repeat(60));
    println!("\nTotal Variants: {}", stats.catalog.total_variants);

    println!("\nShape Distribution:");
    for (shape, count) in &stats.catalog.shapes {
        println!("  {shape}: {count}");
    }

    println!("\nIP Rating Distribution:");
    for (ip, count) in &stats.catalog.ip_ratings {
        println!("  {ip}: {count}");
    }

    println!("\nWattage Distribution:");
    for (band, count) in &stats.catalog.wattage_bands {
        println!("  {band}: {count}");
    }

    println!("\nScoring Weights:");
    let weights = &stats.weights;
    println!("  ip_rating: {}", weights.ip_rating);
    println!("  shape: {}", weights.shape);
    println!("  wattage: {}", weights.wattage);
    println!("  lumens: {}", weights.lumens);
    println!("  efficacy_bonus: {}", weights.efficacy_bonus);
    Ok(())
}

fn run_interactive(catalog: &Path) -> anyhow::Result<()> {
    let engine = load_engine(catalog)?;

    println!("{}", "=".repeat(60));
    println!("INTERACTIVE PRODUCT SUBSTITUTION");
    println!("{}", "=".repeat(60));
    println!("Enter product descriptions to find matches.");
    println!("Type 'quit' or 'exit' to stop.\n");

    let stdin = std::io::stdin();
    loop {
        print!("Enter description: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let description = line.trim();

        if matches!(description.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }
        if description.is_empty() {
            continue;
        }

        match engine.match_description(description, 2) {
            Ok(result) => {
                println!("\n  Match: {}", result.variant.sku);
                println!("  Confidence: {:.0}%", result.confidence * 100.0);
                println!("  {}", result.justification);
                if !result.alternatives.is_empty() {
                    let skus: Vec<&str> = result
                        .alternatives
                        .iter()
                        .map(|alt| alt.variant.sku.as_str())
                        .collect();
                    println!("  Alternatives: {}", skus.join(", "));
                }
                println!();
            }
            Err(err) => println!("  Error: {err}\n"),
        }
    }

    println!("Goodbye!");
    Ok(())
}
