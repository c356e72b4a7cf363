use super::format::format_file;
use crate::binding;
use crate::config::{self, GeneratorConfig};
use crate::descriptor::{load_file_unit, FileUnit};
use crate::naming;
use crate::render::render;
use crate::validate::{has_errors, lint_file_unit, print_lint_issues, LintSeverity};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command-line interface for gatewaygen
#[derive(Parser)]
#[command(name = "gatewaygen")]
#[command(about = "Generate gRPC + JSON/HTTP gateway code from service descriptors", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the gateway source for a descriptor
    Generate {
        /// Path to the descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,

        /// File to write; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to gatewaygen.toml
        /// If not provided, will auto-detect alongside the descriptor
        #[arg(long)]
        config: Option<PathBuf>,

        /// Documentation file to embed, overriding descriptor and config
        #[arg(long)]
        api_doc: Option<PathBuf>,

        /// Render and report, but do not write anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Skip rustfmt on the written file
        #[arg(long, default_value_t = false)]
        no_fmt: bool,
    },
    /// Lint a descriptor
    ///
    /// Checks identifiers, imports and bindings, and reports symbol and route
    /// collisions.
    Lint {
        /// Path to the descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Print one line per binding: verb, pattern, service.method, symbol
    Inspect {
        /// Path to the descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,
    },
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns an error if:
/// - The descriptor or config cannot be loaded or parsed
/// - The descriptor has lint errors (`generate`, or `lint --fail-on-error`)
/// - Rendering fails
/// - The output cannot be written or formatted
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            descriptor,
            output,
            config,
            api_doc,
            dry_run,
            no_fmt,
        } => {
            let (unit, config) =
                prepare(&descriptor, config.as_deref(), api_doc.as_deref())?;
            let source = generate_source(&unit)?;

            match output {
                Some(path) if dry_run => {
                    eprintln!("[dry-run] would write {} bytes to {}", source.len(), path.display());
                }
                None if dry_run => {
                    eprintln!("[dry-run] rendered {} bytes", source.len());
                }
                Some(path) => {
                    std::fs::write(&path, &source)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(output = %path.display(), bytes = source.len(), "Wrote gateway source");
                    if config.format && !no_fmt {
                        format_file(&path)?;
                    }
                }
                None => print!("{source}"),
            }
            Ok(())
        }
        Commands::Lint {
            descriptor,
            fail_on_error,
            errors_only,
        } => {
            let unit = load_file_unit(&descriptor)?;
            let mut issues = lint_file_unit(&unit);
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if fail_on_error && has_errors(&issues) {
                anyhow::bail!("{} has lint errors", descriptor.display());
            }
            Ok(())
        }
        Commands::Inspect { descriptor } => {
            let unit = load_file_unit(&descriptor)?;
            for line in inspect_lines(&unit)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Load the descriptor and merge configuration into it.
///
/// `api_doc` wins over the config file, which wins over the descriptor.
pub fn prepare(
    descriptor: &Path,
    config_path: Option<&Path>,
    api_doc: Option<&Path>,
) -> anyhow::Result<(FileUnit, GeneratorConfig)> {
    let mut unit = load_file_unit(descriptor)?;
    let config = config::load_for_descriptor(config_path, descriptor)?;
    config.apply(&mut unit)?;
    if let Some(doc) = api_doc {
        unit.api_doc = std::fs::read(doc)
            .with_context(|| format!("Failed to read API doc: {}", doc.display()))?;
    }
    Ok((unit, config))
}

/// Lint, then render.
///
/// Warnings are logged; any error-level issue stops generation.
pub fn generate_source(unit: &FileUnit) -> anyhow::Result<String> {
    let issues = lint_file_unit(unit);
    for issue in issues.iter().filter(|i| i.severity == LintSeverity::Warning) {
        warn!(location = %issue.location, kind = %issue.kind, "{}", issue.message);
    }
    if has_errors(&issues) {
        print_lint_issues(&issues);
        anyhow::bail!("{} has lint errors, refusing to generate", unit.name);
    }
    render(unit).with_context(|| format!("Failed to generate gateway for {}", unit.name))
}

/// One line per binding, in declaration order.
pub fn inspect_lines(unit: &FileUnit) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for svc in &unit.services {
        for method in &svc.methods {
            for b in &method.bindings {
                let compiled = binding::compile(b).with_context(|| {
                    format!("Invalid binding {}.{}[{}]", svc.name, method.name, b.index)
                })?;
                lines.push(format!(
                    "{:<7} {:<40} {}.{} {}",
                    compiled.verb.as_str(),
                    compiled.pattern,
                    svc.name,
                    method.name,
                    naming::name(&svc.name, &method.name, compiled.index)
                ));
            }
        }
    }
    Ok(lines)
}
