//! iconwarden - PC Builder icon asset tool
//!
//! Scaffolds the icon directory tree, validates which icon files exist on
//! disk, and regenerates the checklist and manifest artifacts.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use iconwarden::registry::{APP_DIR, CHECKLIST_FILE, MANIFEST_FILE, Registry};
use iconwarden::report::{checklist, manifest};
use iconwarden::scaffold::ensure_directories;
use iconwarden::scan::{IconStatus, ScanReport, scan};

const SEPARATOR_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "iconwarden")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold and audit the PC Builder icon asset tree")]
#[command(
    after_help = "Run without flags for the full workflow instructions.\nQuick start: iconwarden --all"
)]
struct Cli {
    /// Create missing category directories
    #[arg(long)]
    init: bool,

    /// Scan and print per-icon existence plus summary counts
    #[arg(long)]
    validate: bool,

    /// Regenerate the Markdown checklist document
    #[arg(long)]
    checklist: bool,

    /// Regenerate the JSON icon manifest
    #[arg(long)]
    manifest: bool,

    /// Run init, validate, checklist and manifest in that order
    #[arg(long)]
    all: bool,

    /// Project root the asset tree hangs off
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = Registry::builtin();

    let run_init = cli.init || cli.all;
    let run_validate = cli.validate || cli.all;
    let run_checklist = cli.checklist || cli.all;
    let run_manifest = cli.manifest || cli.all;

    if !(run_init || run_validate || run_checklist || run_manifest) {
        print_instructions(&registry);
        return Ok(());
    }

    if run_init {
        run_scaffold(&registry, &cli.root)?;
    }

    // One scan per invocation; validation output and both emitters read the
    // same report, so console and documents cannot disagree.
    let report = if run_validate {
        Some(run_validation(&registry, &cli.root))
    } else if run_checklist || run_manifest {
        Some(scan(&registry, &cli.root, None))
    } else {
        None
    };

    if let Some(report) = &report {
        if run_checklist {
            let path = checklist::write(&registry, report, &cli.root)
                .context("Failed to write checklist")?;
            println!("✅ Checklist saved to {}", style(path.display()).green());
        }

        if run_manifest {
            let path = manifest::write(&registry, report, &cli.root)
                .context("Failed to write icon manifest")?;
            println!("✅ Icon manifest saved to {}", style(path.display()).green());
        }
    }

    println!();
    println!("{}", style("✅ All operations complete").green().bold());
    Ok(())
}

fn run_scaffold(registry: &Registry, root: &Path) -> Result<()> {
    println!("{}", style("📁 Creating directory structure...").cyan());
    println!();

    let summary =
        ensure_directories(registry, root).context("Failed to create asset directories")?;

    for entry in &summary.entries {
        if entry.created {
            println!("  ✅ Created: {}", entry.path.display());
        } else {
            println!("  📂 Already exists: {}", entry.path.display());
        }
    }

    println!();
    println!(
        "📋 Directory structure ready ({} created, {} existing)",
        summary.created_count(),
        summary.existing_count()
    );
    println!();
    Ok(())
}

fn run_validation(registry: &Registry, root: &Path) -> ScanReport {
    println!("{}", style("🔍 Validating icon files...").cyan());

    let current: Cell<Option<&'static str>> = Cell::new(None);
    let observer = |status: &IconStatus| {
        if current.get() != Some(status.category) {
            println!(
                "\n📦 {} ({}×{}px)",
                style(status.category.to_uppercase()).bold(),
                status.size,
                status.size
            );
            current.set(Some(status.category));
        }
        if status.exists {
            println!("  ✅ {}.png", status.name);
        } else {
            println!("  ❌ {}.png (missing)", status.name);
        }
    };

    let report = scan(registry, root, Some(&observer));

    let separator = "=".repeat(SEPARATOR_WIDTH);
    println!("\n{}", separator);
    println!("📊 Summary:");
    println!("  ✅ Existing: {}", style(report.existing_count()).green());
    println!("  ❌ Missing: {}", style(report.missing_count()).red());
    println!("  📦 Total: {}", report.total());
    println!("{}", separator);

    if report.missing_count() > 0 {
        println!("\n⚠️  Missing icons:");
        for status in report.missing() {
            println!("  - {}", status.rel_path);
        }
    }

    report
}

fn print_instructions(registry: &Registry) {
    println!();
    println!(
        "{}",
        style("iconwarden - PC Builder icon asset tool").cyan().bold()
    );
    println!();
    println!("Workflow:");
    println!("  1. Create the directory structure:   iconwarden --init");
    println!("  2. Generate icons with an AI tool (IconPark, Recraft.ai, DALL-E 3)");
    println!("     using the prompts from AI_PROMPTS.txt");
    println!("  3. Save the generated PNGs into the matching directories");
    println!("  4. Validate the icon files:          iconwarden --validate");
    println!("  5. Regenerate the checklist:         iconwarden --checklist");
    println!("  6. Regenerate the icon manifest:     iconwarden --manifest");
    println!();
    println!("Asset tree (under --root, default \".\"):");
    println!("  {}/", APP_DIR);
    for category in registry.categories() {
        println!(
            "    {:<28} {}×{}px, {} icons",
            format!("{}/", category.dir),
            category.size,
            category.size,
            category.icons.len()
        );
    }
    println!("  {} icons total", registry.total_icons());
    println!();
    println!("Flags:");
    println!("  --init       create the directory structure");
    println!("  --validate   check which icon files exist");
    println!("  --checklist  regenerate {}", CHECKLIST_FILE);
    println!("  --manifest   regenerate {}/{}", APP_DIR, MANIFEST_FILE);
    println!("  --all        run every step in order");
    println!();
    println!("Quick start: {}", style("iconwarden --all").green());
    println!();
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
