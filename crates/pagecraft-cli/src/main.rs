use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagecraft_config::{Config, Validation};
use pagecraft_engine::blocks::starter_document;
use pagecraft_engine::{
    Document, Registry, Renderer, ResolveError, Resolver, ValidationMode, encode, encode_compact,
    io,
};
use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pagecraft", version, about = "Block-based page documents")]
struct Cli {
    /// Config file to use instead of ~/.config/pagecraft/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log resolver activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a document to an HTML page
    Render {
        file: PathBuf,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Refuse documents with unknown blocks, invalid props, cycles or dangling zones
        #[arg(long)]
        strict: bool,
    },
    /// Report everything the resolver would skip
    Check {
        file: PathBuf,
        #[arg(long)]
        strict: bool,
        /// Print reports as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved block tree as JSON
    Tree { file: PathBuf },
    /// Re-encode a document
    Fmt {
        file: PathBuf,
        #[arg(long)]
        compact: bool,
        /// Rewrite the file in place
        #[arg(long)]
        write: bool,
    },
    /// Create a new document
    New {
        /// Start from a page with a hero section
        #[arg(long)]
        starter: bool,
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available block types by category
    Blocks,
    /// List documents in the documents directory
    List {
        /// Directory to scan instead of the configured one
        dir: Option<PathBuf>,
    },
}

/// Settings for one invocation: config file values with flags applied on top.
struct App {
    config: Config,
    registry: Registry,
}

impl App {
    fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from_path(path)?
                .with_context(|| format!("Config file {} not found", path.display()))?,
            None => Config::load()?.unwrap_or_default(),
        };
        Ok(Self {
            config,
            registry: Registry::standard()?,
        })
    }

    fn mode(&self, strict: bool) -> ValidationMode {
        if strict || self.config.validation == Validation::Strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }

    fn resolver(&self, strict: bool) -> Resolver<'_> {
        Resolver::new(&self.registry).with_mode(self.mode(strict))
    }

    fn read(&self, file: &Path) -> Result<Document> {
        let (root, name) = split_path(&self.config.document_path(file))?;
        Ok(io::read_document(&name, &root)?)
    }
}

/// Split into the directory and a file name relative to it.
fn split_path(path: &Path) -> Result<(PathBuf, RelativePathBuf)> {
    let name = path
        .file_name()
        .with_context(|| format!("{} does not name a file", path.display()))?;
    let name = RelativePathBuf::from_path(name)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
    let root = path.parent().unwrap_or(Path::new("")).to_path_buf();
    Ok((root, name))
}

/// Command output plus whether the command succeeded.
struct Outcome {
    text: String,
    success: bool,
}

impl Outcome {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

fn run(ctx: &App, command: Command) -> Result<Outcome> {
    match command {
        Command::Render {
            file,
            output,
            strict,
        } => {
            let doc = ctx.read(&file)?;
            let page = ctx.resolver(strict).resolve(&doc)?;
            let html = Renderer::new(&ctx.registry).render_page(&page).into_string();
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                    Ok(Outcome::ok(String::new()))
                }
                None => Ok(Outcome::ok(html)),
            }
        }
        Command::Check { file, strict, json } => {
            let doc = ctx.read(&file)?;
            let (reports, success) = match ctx.resolver(strict).resolve(&doc) {
                Ok(page) => (page.reports, true),
                Err(ResolveError::Rejected(reports)) => (reports, false),
            };
            let text = if json {
                serde_json::to_string_pretty(&reports)?
            } else {
                reports
                    .iter()
                    .map(|report| format!("{}: {report}", file.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            Ok(Outcome { text, success })
        }
        Command::Tree { file } => {
            let doc = ctx.read(&file)?;
            let page = ctx.resolver(false).resolve(&doc)?;
            Ok(Outcome::ok(serde_json::to_string_pretty(&page)?))
        }
        Command::Fmt {
            file,
            compact,
            write,
        } => {
            let doc = ctx.read(&file)?;
            let text = if compact || !ctx.config.pretty {
                encode_compact(&doc)?
            } else {
                encode(&doc)?
            };
            if write {
                let path = ctx.config.document_path(&file);
                std::fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                return Ok(Outcome::ok(String::new()));
            }
            Ok(Outcome::ok(text))
        }
        Command::New { starter, output } => {
            let doc = if starter {
                starter_document()
            } else {
                Document::empty()
            };
            match output {
                Some(path) => {
                    let (root, name) = split_path(&ctx.config.document_path(&path))?;
                    io::write_document(&name, &root, &doc)?;
                    Ok(Outcome::ok(String::new()))
                }
                None => Ok(Outcome::ok(encode(&doc)?)),
            }
        }
        Command::Blocks => Ok(Outcome::ok(describe_blocks(&ctx.registry))),
        Command::List { dir } => {
            let dir = dir
                .or_else(|| ctx.config.documents_path.clone())
                .context("No directory given and no documents_path configured")?;
            io::validate_documents_dir(&dir)?;
            let files = io::scan_documents(&dir)?;
            let text = files
                .iter()
                .map(|file| file.strip_prefix(&dir).unwrap_or(file).display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Outcome::ok(text))
        }
    }
}

fn describe_blocks(registry: &Registry) -> String {
    let mut lines = Vec::new();
    for category in registry.categories() {
        lines.push(format!("{}:", category.title));
        for name in &category.components {
            let Some(descriptor) = registry.lookup(name) else {
                continue;
            };
            if descriptor.is_container() {
                lines.push(format!(
                    "  {name} ({}) zones: {}",
                    descriptor.label,
                    descriptor.zones.join(", ")
                ));
            } else {
                lines.push(format!("  {name} ({})", descriptor.label));
            }
        }
    }
    lines.join("\n")
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let ctx = App::load(cli.config.as_deref())?;
    let outcome = run(&ctx, cli.command)?;

    if !outcome.text.is_empty() {
        println!("{}", outcome.text);
    }
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
