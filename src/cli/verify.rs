use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::SnapshotRegistry;
use crate::cli::OutputFormat;
use crate::core::layout::GalleryLayout;
use crate::matching::engine::{AnalyzerConfig, ConsistencyAnalyzer};
use crate::matching::report::{ConsistencyReport, ReportPolicy, Verdict};
use crate::parsing::pages::load_pages;

#[derive(Args)]
pub struct VerifyArgs {
    /// Project root containing the snapshot and documentation directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Treat unreferenced snapshots as errors (affects exit code)
    #[arg(long)]
    pub strict: bool,

    /// Require a .snap.svg reference for audio snapshots in addition to .wav
    #[arg(long)]
    pub require_audio_svg: bool,

    /// JSON file overriding directory locations and naming conventions
    #[arg(long)]
    pub layout: Option<PathBuf>,
}

/// Execute a verification run and print the report
///
/// # Errors
///
/// Returns an error if the layout file, snapshot directory or documentation
/// directory cannot be read. Nothing is analyzed in that case.
pub fn run(args: &VerifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<Verdict> {
    let layout = match &args.layout {
        Some(path) => GalleryLayout::load_from_file(path)?,
        None => GalleryLayout::default(),
    };

    let snapshot_dir = layout.snapshot_path(&args.root);
    let pages_dir = layout.pages_path(&args.root);

    let mut registry = SnapshotRegistry::build(&snapshot_dir, &layout)?;
    let pages = load_pages(&pages_dir, &layout.page_extension)?;

    if verbose {
        eprintln!(
            "Loaded {} snapshots from {} and {} pages from {}",
            registry.len(),
            snapshot_dir.display(),
            pages.len(),
            pages_dir.display()
        );
    }

    let config = AnalyzerConfig {
        require_audio_chart: args.require_audio_svg,
    };
    let analyzer = ConsistencyAnalyzer::new(&layout, config)?;
    let report = analyzer.analyze(&mut registry, pages.iter().map(|p| p.text.as_str()));

    let policy = ReportPolicy {
        strict_unreferenced: args.strict,
    };
    let verdict = report.verdict(policy);

    match format {
        OutputFormat::Text => print_text_report(&report, verdict, verbose),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(verdict)
}

fn print_section(title: &str, items: &[String]) {
    println!("\n{title}:");
    if items.is_empty() {
        println!("  (none)");
    } else {
        for item in items {
            println!("  - {item}");
        }
    }
}

fn print_text_report(report: &ConsistencyReport, verdict: Verdict, verbose: bool) {
    println!("Gallery Verification Report");
    println!("{}", "=".repeat(27));
    println!("Total snapshots: {}", report.total_snapshots);

    print_section(
        "Missing chart references (non-audio)",
        &report.missing_chart_refs,
    );
    print_section(
        "Missing audio references (@audio)",
        &report.missing_audio_refs,
    );
    if !report.missing_audio_svg_refs.is_empty() {
        print_section(
            "Missing audio chart references (@audio, enforced)",
            &report.missing_audio_svg_refs,
        );
    }
    print_section("Orphan markdown references", &report.orphan_references);

    if verbose {
        print_section(
            "Unreferenced snapshots (informational)",
            &report.unreferenced_snapshots,
        );
        println!(
            "\nPages scanned: {}, distinct references: {}",
            report.pages_scanned,
            report.referenced_resources.len()
        );
    }

    println!("\nResult: {verdict}");
}
