//! Test generation command
//!
//! One command type drives all three generators. It loads the module's
//! configuration, runs the batch, prints one line per source file, and
//! turns batch failures into a nonzero exit code.

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

use testforge_codegen::{FileOutcome, Generator};
use testforge_core::{ArtifactKind, ForgeConfig};

/// Generate test skeletons for one artifact kind of one module
pub struct GenerateCommand {
    kind: ArtifactKind,
    module: PathBuf,
    config: ForgeConfig,
    regen: bool,
}

impl GenerateCommand {
    /// Create a command, loading configuration up front.
    ///
    /// With an explicit `--config` path the file must exist and parse.
    /// Otherwise `<module>/testforge.toml` is used when present and the
    /// defaults apply when it is not.
    pub fn new(
        kind: ArtifactKind,
        module: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        let config = match &config_path {
            Some(path) => ForgeConfig::load_from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => ForgeConfig::load_for_module(&module)
                .with_context(|| format!("loading configuration for {}", module.display()))?,
        };

        Ok(Self {
            kind,
            module,
            config,
            regen: false,
        })
    }

    /// Overwrite test files that already exist.
    pub fn with_regen(mut self, regen: bool) -> Self {
        self.regen = regen;
        self
    }

    /// Execute the command
    pub fn execute(self) -> Result<ExitCode> {
        println!(
            "{} {}",
            style(self.kind.banner()).green().bold(),
            style(self.module.display().to_string()).bold()
        );
        println!();

        let generator = Generator::new(self.module.as_path(), self.config)
            .context("initializing templates")?
            .with_regenerate(self.regen);
        let report = generator
            .run(self.kind)
            .with_context(|| format!("scanning {}", self.module.display()))?;

        for task in &report.outcomes {
            match &task.outcome {
                FileOutcome::Generated => {
                    println!(
                        "  {} {}",
                        style("generated").green(),
                        task.output_path.display()
                    );
                }
                FileOutcome::SkippedExisting => {
                    println!(
                        "  {} {} (already present)",
                        style("skipped").yellow(),
                        task.output_path.display()
                    );
                }
                FileOutcome::SkippedNoClass => {
                    println!(
                        "  {} {} (no matching class)",
                        style("skipped").yellow(),
                        task.class_name
                    );
                }
                FileOutcome::Failed(message) => {
                    println!(
                        "  {} {}: {}",
                        style("failed").red().bold(),
                        task.class_name,
                        message
                    );
                }
            }
        }

        println!();
        print!("{}", report.display());

        if report.has_failures() {
            Ok(ExitCode::FAILURE)
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }
}
