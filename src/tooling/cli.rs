//! CLI Tooling
//!
//! Command-line interface for selecting homework, previewing it and submitting
//! it for grading. Every command returns its rendered output as a string; the
//! binary prints it. `grade` also writes the selection preview to a sink
//! (stdout by default) before it prompts and submits.

use crate::config::{endpoint_url_is_valid, ConfigLoader, GraderConfig};
use crate::error::ApiError;
use crate::grading::{GradeReport, GradeResult, GradeSource, GradingService};
use crate::logging::LoggingConfig;
use crate::report::{format_file_summary, format_grade_report, format_tree, LoadingIndicator, Palette};
use crate::selection::{select_paths, FileSelection};
use crate::summary::{get_file_stats, FileStats};
use crate::tree::{build_tree, TreeNode};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, info};

/// hwgrade - Linux homework AI grader
#[derive(Parser, Debug)]
#[command(name = "hwgrade")]
#[command(about = "Upload Linux homework files or a directory and get AI-powered feedback")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory (where hwgrade.toml is looked up)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags over the configured logging settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.enabled = true;
            config.level = "debug".to_string();
            config.output = "stderr".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show how many files of each kind were selected
    Summary {
        /// Files and/or directories to select
        paths: Vec<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the selected files as a directory tree
    Tree {
        /// Files and/or directories to select
        paths: Vec<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Folders shallower than this are shown expanded
        #[arg(long)]
        expand_depth: Option<usize>,
    },
    /// Submit the selected files for grading and show the report
    Grade {
        /// Files and/or directories to submit
        paths: Vec<PathBuf>,
        /// Grading endpoint URL (overrides grading.endpoint)
        #[arg(long, conflicts_with = "demo")]
        endpoint: Option<String>,
        /// Skip the backend and show the demo result
        #[arg(long)]
        demo: bool,
        /// Do not ask for confirmation before submitting
        #[arg(long, short = 'y')]
        yes: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Render a saved grade result (JSON)
    Report {
        /// Path to a GradeResult or GradeReport JSON file
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

/// Destination for the selection preview `grade` shows before submitting.
pub type PreviewSink = Arc<Mutex<dyn Write + Send>>;

/// Loaded configuration plus rendering settings for one invocation.
pub struct CliContext {
    workspace_root: PathBuf,
    config: GraderConfig,
    palette: Palette,
    preview: PreviewSink,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create a context around an already-built configuration.
    pub fn with_config(workspace_root: PathBuf, config: GraderConfig) -> Self {
        let palette = Palette::new(config.display.color);
        Self {
            workspace_root,
            config,
            palette,
            preview: Arc::new(Mutex::new(std::io::stdout())),
        }
    }

    /// Send the `grade` preview somewhere other than stdout.
    pub fn with_preview_sink(mut self, sink: PreviewSink) -> Self {
        self.preview = sink;
        self
    }

    pub fn config(&self) -> &GraderConfig {
        &self.config
    }

    pub fn disable_color(&mut self) {
        self.palette = Palette::plain();
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Summary { paths, format } => {
                let selection = self.select(paths)?;
                let stats = get_file_stats(&selection.files);
                if format == "json" {
                    return to_json(&json!({
                        "is_directory": selection.is_directory,
                        "stats": stats,
                    }));
                }
                Ok(format_file_summary(&stats, selection.is_directory, &self.palette))
            }
            Commands::Tree {
                paths,
                format,
                expand_depth,
            } => {
                let selection = self.select(paths)?;
                let tree = build_tree(&selection.files);
                if format == "json" {
                    return to_json(&tree);
                }
                if tree.is_empty() {
                    return Ok("No files selected.".to_string());
                }
                let depth = expand_depth.unwrap_or(self.config.display.expand_depth);
                Ok(format_tree(&tree, depth, &self.palette))
            }
            Commands::Grade {
                paths,
                endpoint,
                demo,
                yes,
                format,
            } => self.handle_grade(paths, endpoint.as_deref(), *demo, *yes, format),
            Commands::Report { file, format } => {
                let report = load_report(file)?;
                if format == "json" {
                    return to_json(&report);
                }
                Ok(format_grade_report(&report, &self.palette))
            }
            Commands::Config {
                command: ConfigCommands::Show,
            } => Ok(toml::to_string_pretty(&self.config)?),
        }
    }

    fn select(&self, paths: &[PathBuf]) -> Result<FileSelection, ApiError> {
        let resolved: Vec<PathBuf> = paths.iter().map(|p| self.resolve(p)).collect();
        select_paths(&resolved, &self.config.selection)
    }

    /// Relative arguments are taken from the current directory, as a shell would.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || path.exists() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }

    fn handle_grade(
        &self,
        paths: &[PathBuf],
        endpoint: Option<&str>,
        demo: bool,
        yes: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        let selection = self.select(paths)?;
        if selection.is_empty() {
            return Err(ApiError::NoFiles);
        }

        let stats = get_file_stats(&selection.files);
        let tree = build_tree(&selection.files);
        if format == "text" {
            self.write_preview(&self.selection_preview(&stats, selection.is_directory, &tree))?;
        }

        let mut grading = self.config.grading.clone();
        if let Some(endpoint) = endpoint {
            if !endpoint_url_is_valid(endpoint) {
                return Err(ApiError::ConfigError(format!(
                    "Invalid grading endpoint URL: {}",
                    endpoint
                )));
            }
            grading.endpoint = Some(endpoint.to_string());
        }
        let service = GradingService::from_config(&grading, demo)?;

        let interactive = format == "text" && std::io::stdin().is_terminal();
        if !yes && interactive {
            let prompt = format!(
                "Submit {} file(s) to the {} grader?",
                stats.total,
                service.backend_name()
            );
            let confirmed = dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(true)
                .interact()
                .map_err(|e| ApiError::Grading(format!("Confirmation prompt failed: {}", e)))?;
            if !confirmed {
                return Err(ApiError::Cancelled);
            }
        }

        let runtime = new_runtime()?;
        debug!(backend = service.backend_name(), files = selection.len(), "Grading selection");
        let report = runtime.block_on(async {
            let indicator = LoadingIndicator::start(format == "text");
            let report = service.grade(&selection).await;
            indicator.finish();
            report
        })?;

        if format == "json" {
            return to_json(&json!({
                "selection": {
                    "is_directory": selection.is_directory,
                    "stats": stats,
                    "tree": tree,
                },
                "report": report,
            }));
        }
        Ok(format_grade_report(&report, &self.palette))
    }

    /// Summary, plus the tree for directory selections.
    fn selection_preview(&self, stats: &FileStats, is_directory: bool, tree: &[TreeNode]) -> String {
        let mut out = format_file_summary(stats, is_directory, &self.palette);
        if is_directory {
            out.push('\n');
            out.push_str(&format_tree(
                tree,
                self.config.display.expand_depth,
                &self.palette,
            ));
        }
        out.push('\n');
        out
    }

    fn write_preview(&self, preview: &str) -> Result<(), ApiError> {
        let mut sink = self
            .preview
            .lock()
            .map_err(|_| ApiError::Grading("Preview output is unavailable".to_string()))?;
        sink.write_all(preview.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

/// Each grading command gets its own runtime; the CLI is otherwise synchronous.
fn new_runtime() -> Result<tokio::runtime::Runtime, ApiError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ApiError::Grading(
            "Cannot grade from within an async runtime context".to_string(),
        ));
    }
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ApiError::Grading(format!("Failed to create runtime: {}", e)))
}

/// Load a saved report; a bare GradeResult is treated as coming from the backend.
fn load_report(path: &Path) -> Result<GradeReport, ApiError> {
    let content = std::fs::read_to_string(path)?;
    if let Ok(report) = serde_json::from_str::<GradeReport>(&content) {
        return Ok(report);
    }
    let result: GradeResult = serde_json::from_str(&content)?;
    Ok(GradeReport::new(result, GradeSource::Backend))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Summary { .. } => "summary",
        Commands::Tree { .. } => "tree",
        Commands::Grade { .. } => "grade",
        Commands::Report { .. } => "report",
        Commands::Config { .. } => "config.show",
    }
}
