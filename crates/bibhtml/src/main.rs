/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{bail, Context, Result};
use bibhtml_core::{Collection, ListKind, SiteConfig};
use bibhtml_processor::{
    io::{load_collection, load_homepages, load_site_config, load_strings},
    render::{html::Html, plain::PlainText},
    OutputFormat, Processor, Rendered,
};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::generate;
use schemars::schema_for;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(author, version, about = "Render BibTeX publication lists as HTML", long_about = None)]
struct Cli {
    /// Log every rendered entry
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a publication list
    Render {
        /// Site configuration (YAML or JSON) listing titled sections
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// BibTeX file of @string macro definitions
        #[arg(long)]
        strings: Option<PathBuf>,

        /// JSON object mapping "F Family" to a homepage URL
        #[arg(long)]
        homepages: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Write HTML on a single line
        #[arg(long)]
        compact: bool,

        /// BibTeX files or directories, rendered as one untitled list
        files: Vec<PathBuf>,
    },
    /// Parse bibliographies and report block statistics and failures
    Check {
        /// BibTeX files or directories
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// BibTeX file of @string macro definitions
        #[arg(long)]
        strings: Option<PathBuf>,
    },
    /// Generate JSON schema for site configuration files
    Schema,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Format {
    Html,
    Plain,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            config,
            strings,
            homepages,
            format,
            compact,
            files,
        } => {
            let mut site = match &config {
                Some(path) => load_site_config(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => SiteConfig::default(),
            };
            if strings.is_some() {
                site.strings = strings;
            }
            if homepages.is_some() {
                site.homepages = homepages;
            }
            if !files.is_empty() {
                site.sections.clear();
                site.sections.insert(String::new(), files);
            }
            if site.sections.is_empty() {
                bail!("nothing to render: pass --config or bibliography files");
            }

            let output = match format {
                Format::Html if compact => render_site(site, &Html::default())?,
                Format::Html => render_site(site, &Html::pretty())?,
                Format::Plain => render_site(site, &PlainText)?,
            };
            print!("{}", output);
        }
        Commands::Check { files, strings } => {
            let strings = load_strings(strings.as_deref())?;
            let collection = load_collection(&expand_sources(&files)?, &strings)?;
            let stats = &collection.stats;
            println!(
                "blocks: {}, entries: {}, strings: {}, comments: {}, preambles: {}, failures: {}",
                stats.blocks,
                stats.entries,
                stats.strings,
                stats.comments,
                stats.preambles,
                stats.failures
            );
            report_failures(&collection);
            if !collection.failures.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Schema => {
            let schema = schema_for!(SiteConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bibhtml=debug" } else { "bibhtml=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Render every section of the site, preceded by the preamble if one is set.
///
/// An untitled section (plain file arguments) is rendered as a bare list.
fn render_site<F: OutputFormat>(mut site: SiteConfig, format: &F) -> Result<String> {
    let strings = load_strings(site.strings.as_deref())?;
    if let Some(path) = &site.homepages {
        let homepages = load_homepages(path)
            .with_context(|| format!("loading homepages {}", path.display()))?;
        site.render.homepages.extend(homepages);
    }

    let processor = Processor::new(site.render);
    let mut out = site.preamble.map(|p| format!("{}\n", p)).unwrap_or_default();

    for (title, sources) in &site.sections {
        let collection = load_collection(&expand_sources(sources)?, &strings)?;
        report_failures(&collection);

        let rendered = render_section(&processor, title, &collection, site.list)
            .with_context(|| match title.as_str() {
                "" => "rendering bibliography".to_string(),
                t => format!("rendering section \"{}\"", t),
            })?;
        for skipped in &rendered.skipped {
            eprintln!("skipped {}: {}", skipped.key, skipped.error);
        }
        out.push_str(&format.finish(&rendered.nodes));
    }
    Ok(out)
}

fn render_section(
    processor: &Processor,
    title: &str,
    collection: &Collection,
    list: ListKind,
) -> Result<Rendered, bibhtml_processor::RenderError> {
    if title.is_empty() {
        tracing::info!(
            entries = collection.stats.entries,
            failures = collection.stats.failures,
            "bibliography statistics"
        );
        processor.render_collection(&collection.records, list)
    } else {
        processor.render_section(title, collection, list)
    }
}

/// Print blocks that failed to parse as `LINE(DUPLICATE) RAW`.
fn report_failures(collection: &Collection) {
    for failure in &collection.failures {
        eprintln!(
            "{}({}) {}",
            failure.start_line, failure.duplicate_key, failure.raw
        );
    }
}

/// Expand directories into the `*.bib` files beneath them, sorted by name.
fn expand_sources(sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            let found = WalkDir::new(source)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_bib(e.path()))
                .map(|e| e.path().to_path_buf());
            files.extend(found);
        } else if source.exists() {
            files.push(source.clone());
        } else {
            bail!("no such file or directory: {}", source.display());
        }
    }
    Ok(files)
}

fn is_bib(path: &Path) -> bool {
    path.extension().map(|ext| ext == "bib").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_directories_expand_to_sorted_bib_files() {
        let dir = std::env::temp_dir().join(format!("bibhtml-cli-{}", std::process::id()));
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.bib"), "").unwrap();
        fs::write(dir.join("a.bib"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(dir.join("nested").join("c.bib"), "").unwrap();

        let files = expand_sources(&[dir.clone()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(&dir).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.bib"),
                PathBuf::from("b.bib"),
                PathBuf::from("nested").join("c.bib"),
            ]
        );
    }

    #[test]
    fn test_missing_source_is_an_error() {
        assert!(expand_sources(&[PathBuf::from("/nonexistent/papers.bib")]).is_err());
    }

    #[test]
    fn test_file_arguments_render_an_untitled_list() {
        let dir = std::env::temp_dir().join(format!("bibhtml-cli-render-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let bib = dir.join("papers.bib");
        fs::write(
            &bib,
            "@patent{doe2010, author = {Doe, Jane}, title = {Widget}, year = {2010}}\n",
        )
        .unwrap();

        let mut site = SiteConfig::default();
        site.sections.insert(String::new(), vec![bib]);
        site.preamble = Some("{{dummy}}".to_string());
        let out = render_site(site, &Html::default()).unwrap();
        assert!(out.starts_with("{{dummy}}\n<ol class=\"papers\"><li id=\"doe2010\""));
        assert!(!out.contains("<section"));
    }
}
