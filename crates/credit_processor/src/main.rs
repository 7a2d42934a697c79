/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand};
use credit_core::RoleCatalog;
use credit_processor::{io::load_authors, AnnotateOptions, Annotator};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject CRediT role sublists into a rendered article page
    Annotate {
        /// Path to the rendered HTML page
        #[arg(index = 1)]
        page: PathBuf,

        /// Path to the author records (YAML or JSON)
        #[arg(index = 2)]
        authors: PathBuf,

        /// Path to a credit-roles vocabulary XML file
        #[arg(short, long)]
        vocabulary: Option<PathBuf>,

        /// Directory holding locale-suffixed vocabulary files
        #[arg(long)]
        locale_dir: Option<PathBuf>,

        /// Locale to resolve within --locale-dir
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Substring opening the author list container
        #[arg(short, long)]
        marker: Option<String>,

        /// Fail when the page has more author entries than records
        #[arg(long)]
        strict: bool,
    },
    /// Print the resolved role vocabulary
    Roles {
        /// Path to a credit-roles vocabulary XML file
        #[arg(short, long)]
        vocabulary: Option<PathBuf>,

        /// Directory holding locale-suffixed vocabulary files
        #[arg(long)]
        locale_dir: Option<PathBuf>,

        /// Locale to resolve within --locale-dir
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate {
            page,
            authors,
            vocabulary,
            locale_dir,
            locale,
            marker,
            strict,
        } => {
            let document = match fs::read_to_string(&page) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading page: {}", e);
                    std::process::exit(1);
                }
            };

            let authors = match load_authors(&authors) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let catalog = load_catalog(vocabulary, locale_dir, &locale);

            let mut options = AnnotateOptions::default();
            if let Some(marker) = marker {
                options.list_marker = marker;
            }

            let annotator = Annotator::new(catalog, options);
            if strict {
                match annotator.annotate_strict(&document, &authors) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                let (out, report) = annotator.annotate_report(&document, &authors);
                if report.structural_mismatch() {
                    eprintln!(
                        "Warning: {} author entries beyond the supplied records were left untouched",
                        report.extra_items
                    );
                }
                if report.missing_terms > 0 {
                    eprintln!(
                        "Warning: {} role references had no vocabulary term",
                        report.missing_terms
                    );
                }
                println!("{}", out);
            }
        }
        Commands::Roles {
            vocabulary,
            locale_dir,
            locale,
            json,
        } => {
            let catalog = load_catalog(vocabulary, locale_dir, &locale);
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog).unwrap());
            } else {
                for (uri, term) in catalog.iter() {
                    println!("{}\t{}", term, uri);
                }
            }
        }
    }
}

/// Resolve the role catalog from the command-line source options, falling
/// back to the built-in English vocabulary.
fn load_catalog(
    vocabulary: Option<PathBuf>,
    locale_dir: Option<PathBuf>,
    locale: &str,
) -> RoleCatalog {
    let loaded = match (vocabulary, locale_dir) {
        (Some(path), _) => RoleCatalog::from_path(&path),
        (None, Some(dir)) => RoleCatalog::load_dir(&dir, locale),
        (None, None) => return RoleCatalog::en(),
    };
    match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading vocabulary: {}", e);
            std::process::exit(1);
        }
    }
}
