// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `bim-annotate` - annotate structural model documents from the command line
//!
//! **Usage:**
//! ```text
//! bim-annotate annotate <INPUT> [-o <OUTPUT>] [--author ...] [--company ...]
//!                       [--site S --building B --floor F | --by-kind]
//!                       [--dry-run] [-v]
//! bim-annotate status <INPUT>
//! ```
//!
//! `annotate` reads a document, runs the classify/label/role/group/metadata
//! pass, and writes the result back (in place unless `-o` is given; never
//! partially, the destination is replaced atomically). `status` prints a
//! read-only report. Exit code is non-zero on any load or save failure.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use bim_annotate_engine::{annotate, AnnotateOptions, Grouping, ModelStatus};
use bim_annotate_model::{meta_keys, DocumentStore, Metadata};
use bim_annotate_store::JsonStore;

/// Annotate structural model documents
#[derive(Parser)]
#[command(name = "bim-annotate", version, about = "Annotate structural model documents")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify, label, group, and set metadata on a document
    Annotate(AnnotateArgs),
    /// Print a read-only status report for a document
    Status(StatusArgs),
}

#[derive(Args)]
struct AnnotateArgs {
    /// Input document path
    input: PathBuf,

    /// Output path (defaults to rewriting the input in place)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document author
    #[arg(long)]
    author: Option<String>,

    /// Owning company or firm
    #[arg(long)]
    company: Option<String>,

    /// Free-form document description
    #[arg(long)]
    description: Option<String>,

    /// Project name
    #[arg(long)]
    project: Option<String>,

    /// Construction category
    #[arg(long)]
    category: Option<String>,

    /// Applicable building code
    #[arg(long)]
    building_code: Option<String>,

    /// Design load class
    #[arg(long)]
    design_load: Option<String>,

    /// New document display label
    #[arg(long)]
    label: Option<String>,

    /// Site group name (chain grouping, root level)
    #[arg(long, conflicts_with = "by_kind")]
    site: Option<String>,

    /// Building group name (chain grouping, below site)
    #[arg(long, conflicts_with = "by_kind")]
    building: Option<String>,

    /// Floor group name (chain grouping, below building)
    #[arg(long, conflicts_with = "by_kind")]
    floor: Option<String>,

    /// Bucket elements by kind under a master Structure group
    #[arg(long)]
    by_kind: bool,

    /// Run the pass and print the summary without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct StatusArgs {
    /// Input document path
    input: PathBuf,
}

impl AnnotateArgs {
    fn options(&self) -> AnnotateOptions {
        let mut metadata = Metadata::new();
        let fields = [
            (meta_keys::CREATED_BY, &self.author),
            (meta_keys::LAST_MODIFIED_BY, &self.author),
            (meta_keys::COMPANY, &self.company),
            (meta_keys::COMMENT, &self.description),
            (meta_keys::PROJECT, &self.project),
            (meta_keys::CATEGORY, &self.category),
            (meta_keys::BUILDING_CODE, &self.building_code),
            (meta_keys::DESIGN_LOAD, &self.design_load),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                metadata.set(key, value.clone());
            }
        }

        let chain: Vec<String> = [&self.site, &self.building, &self.floor]
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        let grouping = if self.by_kind {
            Grouping::ByKind
        } else if chain.is_empty() {
            Grouping::None
        } else {
            Grouping::Chain(chain)
        };

        AnnotateOptions {
            metadata,
            grouping,
            document_label: self.label.clone(),
        }
    }
}

fn run_annotate(args: &AnnotateArgs) -> Result<()> {
    let store = JsonStore::new();
    let mut document = store.load(&args.input)?;

    let summary = annotate(&mut document, &args.options());
    println!("{summary}");

    if args.dry_run {
        info!("dry run, not writing output");
        return Ok(());
    }

    let destination = args.output.as_deref().unwrap_or(&args.input);
    store.save(&document, destination)?;
    println!("Saved to {}", destination.display());
    Ok(())
}

fn run_status(args: &StatusArgs) -> Result<()> {
    let document = JsonStore::new().load(&args.input)?;
    println!("{}", ModelStatus::of(&document));
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Annotate(args) => run_annotate(args),
        Command::Status(args) => run_status(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    fn annotate_args(cli: &Cli) -> &AnnotateArgs {
        match &cli.command {
            Command::Annotate(args) => args,
            Command::Status(_) => panic!("expected annotate subcommand"),
        }
    }

    #[test]
    fn test_chain_grouping_from_flags() {
        let cli = parse(&[
            "bim-annotate",
            "annotate",
            "in.bimdoc",
            "--site",
            "Construction Site",
            "--building",
            "Residential House",
            "--floor",
            "Ground Floor",
        ]);
        let options = annotate_args(&cli).options();
        assert_eq!(
            options.grouping,
            Grouping::Chain(vec![
                "Construction Site".into(),
                "Residential House".into(),
                "Ground Floor".into(),
            ])
        );
    }

    #[test]
    fn test_by_kind_conflicts_with_chain() {
        let result = Cli::try_parse_from([
            "bim-annotate",
            "annotate",
            "in.bimdoc",
            "--by-kind",
            "--site",
            "Site",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_fields_mapped() {
        let cli = parse(&[
            "bim-annotate",
            "annotate",
            "in.bimdoc",
            "--author",
            "Designer",
            "--company",
            "Firm",
            "--building-code",
            "IBC 2021",
        ]);
        let options = annotate_args(&cli).options();
        assert_eq!(options.metadata.get(meta_keys::CREATED_BY), Some("Designer"));
        assert_eq!(
            options.metadata.get(meta_keys::LAST_MODIFIED_BY),
            Some("Designer")
        );
        assert_eq!(options.metadata.get(meta_keys::COMPANY), Some("Firm"));
        assert_eq!(options.metadata.get(meta_keys::BUILDING_CODE), Some("IBC 2021"));
        assert_eq!(options.metadata.get(meta_keys::PROJECT), None);
    }

    #[test]
    fn test_no_grouping_by_default() {
        let cli = parse(&["bim-annotate", "annotate", "in.bimdoc"]);
        assert_eq!(annotate_args(&cli).options().grouping, Grouping::None);
    }

    #[test]
    fn test_end_to_end_annotate() {
        use bim_annotate_model::{Document, Element, Geometry};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bimdoc");
        let store = JsonStore::new();
        let doc = Document::from_elements(
            ["Footing_1", "Footing_2", "Post_L_1"]
                .into_iter()
                .map(|n| Element::new(n, Geometry::new(format!("geom:{n}")))),
        );
        store.save(&doc, &path).unwrap();

        let cli = parse(&[
            "bim-annotate",
            "annotate",
            path.to_str().unwrap(),
            "--by-kind",
            "--author",
            "Designer",
        ]);
        run_annotate(annotate_args(&cli)).unwrap();

        let loaded = store.load(&path).unwrap();
        let labels: Vec<_> = loaded.elements().map(|e| e.display_label().to_string()).collect();
        assert_eq!(labels, ["Footing 1", "Footing 2", "Left Post 1"]);
        assert_eq!(loaded.metadata.get(meta_keys::CREATED_BY), Some("Designer"));
        assert!(loaded.root_group("Structure").is_some());
    }
}
