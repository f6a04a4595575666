//! Command-line interface for the diaglang utility
//!
//! Provides a CLI to render diaglang diagram descriptions as ASCII diagrams.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use diaglang::core::logging::init_logging;
use diaglang::{classify, DiagramError, Orchestrator, RenderConfig, ShapeKind, Statement};

/// Diaglang - Render diagram descriptions as ASCII art
#[derive(Parser)]
#[command(name = "diaglang")]
#[command(about = "A Rust utility to render diaglang diagram descriptions as ASCII diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a diagram description to ASCII
    Render {
        /// Input file containing the diagram description (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the ASCII diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Shape to substitute for bare node names
        #[arg(long, value_enum)]
        default_shape: Option<ShapeChoice>,
    },

    /// Check a diagram description for syntax errors
    Check {
        /// Input file to check (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show supported shape kinds
    Shapes {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Shape kinds accepted for bare node names
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ShapeChoice {
    Square,
    Rectangle,
    Circle,
    Triangle,
    Diamond,
}

impl From<ShapeChoice> for ShapeKind {
    fn from(value: ShapeChoice) -> Self {
        match value {
            ShapeChoice::Square => ShapeKind::Square,
            ShapeChoice::Rectangle => ShapeKind::Rectangle,
            ShapeChoice::Circle => ShapeKind::Circle,
            ShapeChoice::Triangle => ShapeKind::Triangle,
            ShapeChoice::Diamond => ShapeKind::Diamond,
        }
    }
}

/// Main CLI application
pub struct DiaglangApp {
    orchestrator: Orchestrator,
}

impl DiaglangApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            orchestrator: Orchestrator::with_config(config),
        }
    }

    fn build_config(default_shape: Option<ShapeChoice>) -> RenderConfig {
        RenderConfig::new(default_shape.map(Into::into))
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("DIAGLANG_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("DIAGLANG_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        // Reinitialize logging with CLI/environment settings
        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Diaglang v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                default_shape,
            } => self.render_command(input, output, default_shape, cli.verbose),
            Commands::Check { input } => self.check_command(input, cli.verbose),
            Commands::Shapes { json } => self.shapes_command(json, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(
        &mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        default_shape: Option<ShapeChoice>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        self.orchestrator = Orchestrator::with_config(Self::build_config(default_shape));
        let ascii_output = self.orchestrator.render(&content);

        if verbose {
            eprintln!("Rendered diagram description to ASCII");
        }

        self.write_output(output, &ascii_output)?;
        Ok(())
    }

    /// Handle the check command
    fn check_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let config = self.orchestrator.config().clone();
        let mut checked = 0usize;
        let mut errors = Vec::new();
        for line in content.lines() {
            let statement = line.trim();
            if statement.is_empty() {
                continue;
            }
            checked += 1;
            if let Statement::Invalid(error) = classify(statement, &config) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            println!("✓ Valid diagram ({} statements)", checked);
            Ok(())
        } else {
            for error in &errors {
                println!("✗ {}", error);
            }
            Err(anyhow!("{} invalid statement(s)", errors.len()))
        }
    }

    /// Handle the shapes command
    fn shapes_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported shape kinds");
        }

        if json {
            let shapes = serde_json::json!({
                "shapes": ShapeKind::ALL
                    .iter()
                    .map(|kind| kind.name())
                    .collect::<Vec<_>>(),
                "total": ShapeKind::ALL.len(),
            });
            println!("{}", serde_json::to_string_pretty(&shapes)?);
        } else {
            println!("Supported shape kinds:");
            for kind in ShapeKind::ALL {
                println!("  {}", kind.name());
            }
            println!();
            println!("Total: {} shape kinds supported", ShapeKind::ALL.len());
        }

        Ok(())
    }

    /// Read input from file or stdin; IO failures surface as
    /// [`DiagramError::Io`]
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    Self::read_stdin()
                } else {
                    fs::read_to_string(&path)
                        .map_err(DiagramError::from)
                        .with_context(|| {
                            format!("Failed to read input file '{}'", path.display())
                        })
                }
            }
            // No input file specified, read from stdin
            None => Self::read_stdin(),
        }
    }

    fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(DiagramError::from)?;
        Ok(content)
    }

    /// Write output to file or stdout; IO failures surface as
    /// [`DiagramError::Io`]
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    print!("{}", stdout_content);
                    io::stdout().flush().map_err(DiagramError::from)?;
                } else {
                    fs::write(&path, content)
                        .map_err(DiagramError::from)
                        .with_context(|| {
                            format!("Failed to write output file '{}'", path.display())
                        })?;
                }
            }
            None => {
                // No output file specified, write to stdout
                print!("{}", stdout_content);
                io::stdout().flush().map_err(DiagramError::from)?;
            }
        }
        Ok(())
    }
}

impl Default for DiaglangApp {
    fn default() -> Self {
        Self::new()
    }
}
