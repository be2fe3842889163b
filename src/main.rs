use clap::{Parser, Subcommand};
use guidebook::{check, config, index, output, render, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "guidebook")]
#[command(about = "Static site builder for markdown study guides")]
#[command(long_about = "\
Static site builder for markdown study guides

Your filesystem is the data source. Markdown documents become guide topics,
ordered by numeric prefix, and question headings become a derived index.

Content structure:

  guide/
  ├── config.toml                  # Site config (optional)
  ├── QUESTIONS_INDEX.md           # Generated by 'guidebook index'
  ├── 010-activity-lifecycle.md    # Topic (numbered = part of the guide)
  ├── 020-android-components.md
  ├── topics/                      # Subdirectories are walked too
  │   └── 030-coroutines.md
  ├── SETUP.md                     # No number prefix = hidden from the guide
  └── wip-jetpack-compose.md       # Draft, also hidden

Document format:

  ---
  layout: default                  # Jekyll-style front matter (optional)
  title: Activity Lifecycle        # Wins over the first # heading
  ---

  # Activity Lifecycle

  ## Interview Questions & Answers

  ### Q1: What is an Activity?
  ...

Counts and navigation in generated output are always derived from the
content. Hand-written '(N Questions)' suffixes and Previous/Next footers
are validated by 'guidebook check', never republished.

Run 'guidebook gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Guide content directory
    #[arg(long, default_value = "guide", global = true)]
    source: PathBuf,

    /// Output directory for the rendered site
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".guidebook-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the guide directory into a manifest
    Scan,
    /// Write the derived questions index from the manifest
    Index,
    /// Scan and report consistency findings (exits non-zero if any)
    Check,
    /// Produce the HTML site from the manifest
    Render,
    /// Run the full pipeline: scan → index → render
    Build,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&cli.temp_dir, &manifest)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Index => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = index::write_index(&manifest_path, &cli.source)?;
            let config = config::load_config(&cli.source)?;
            output::print_index_output(&report, &config.index.heading);
        }
        Command::Check => {
            let manifest = scan::scan(&cli.source)?;
            let findings = check::check(&manifest);
            output::print_check_output(&findings);
            if !findings.is_empty() {
                std::process::exit(1);
            }
        }
        Command::Render => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            render::render(&manifest_path, &cli.output)?;
            let manifest = read_manifest(&manifest_path)?;
            output::print_render_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&cli.temp_dir, &manifest)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Writing questions index");
            let report = index::write_index(&manifest_path, &cli.source)?;
            output::print_index_output(&report, &manifest.config.index.heading);

            println!("==> Stage 3: Rendering HTML \u{2192} {}", cli.output.display());
            render::render(&manifest_path, &cli.output)?;
            output::print_render_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(
    temp_dir: &std::path::Path,
    manifest: &guidebook::types::Manifest,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

fn read_manifest(
    manifest_path: &std::path::Path,
) -> Result<guidebook::types::Manifest, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(manifest_path)?;
    Ok(serde_json::from_str(&content)?)
}
