//! Command-line dossier audit driver
//!
//! Reads a case description (JSON) and a directory of already-extracted
//! document texts, one `.txt` per submitted file, and prints the verdict
//! as JSON. Text extraction itself (native PDF text, OCR fallback) runs
//! upstream; this binary consumes its output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use audit_engine::AuditEngine;
use dossier_types::{DossierCase, TextBundle};

#[derive(Parser)]
#[command(name = "audit-cli", about = "Audit a compliance dossier from extracted texts")]
struct Args {
    /// JSON file describing the case (reference, delegate, client, fields).
    #[arg(long)]
    case: PathBuf,

    /// Directory containing one .txt file per submitted document. Files
    /// are read in filename order, which becomes the bundle order.
    #[arg(long)]
    texts: PathBuf,

    /// Also print the headline summary reasons.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let case_json = fs::read_to_string(&args.case)
        .with_context(|| format!("reading case file {}", args.case.display()))?;
    let case: DossierCase = serde_json::from_str(&case_json)
        .with_context(|| format!("parsing case file {}", args.case.display()))?;

    let bundle = load_bundle(&args.texts)?;
    info!(
        dossier = %case.label(),
        documents = bundle.len(),
        "auditing dossier"
    );

    let engine = AuditEngine::new();
    let verdict = engine.audit(&bundle, &case.fields);

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    if args.summary {
        eprintln!("Main reasons:");
        for reason in verdict.summary_reasons(engine.config().summary_limit) {
            eprintln!(" - {reason}");
        }
    }

    Ok(())
}

/// Collect `dir/*.txt` into a bundle, in filename order.
fn load_bundle(dir: &Path) -> Result<TextBundle> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading text directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut bundle = TextBundle::new();
    for path in paths {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .context("text file without a valid name")?
            .to_string();
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading extracted text {}", path.display()))?;
        bundle.insert(name, text)?;
    }
    Ok(bundle)
}
