//! # Batch Generator
//!
//! The `Generator` is the top-level entry point. It walks one source
//! directory of a module, scans every file it finds, renders the matching
//! test skeleton, and writes it under the module's test tree.
//!
//! ## Pipeline
//!
//! ```text
//! module root + ForgeConfig + ArtifactKind
//!         │
//!         ▼
//!   discover_sources()          → Vec<SourceUnit>
//!         │  per unit
//!         ├──► scan_*()         → ControllerClass / EntityClass / FormClass
//!         ├──► render::*()      → test source
//!         ▼
//!   GenerationReport { one TaskOutcome per source file }
//! ```
//!
//! A failure in one file never aborts the batch. The outcome of every file
//! is recorded and the report says at the end which ones went wrong.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use testforge_core::{ArtifactKind, ForgeConfig, ForgeError, ForgeResult};
use testforge_scan::{
    SourceUnit, discover_sources, resolve_entity, scan_controller, scan_entity, scan_form,
};

use crate::render;
use crate::templates::TemplateRegistry;
use crate::{GeneratedFile, output_path};

// ============================================================================
// Outcomes
// ============================================================================

/// What happened to a single source file during a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A test file was rendered and written.
    Generated,
    /// The test file already existed and regeneration was off.
    SkippedExisting,
    /// The source file declares no type matching its name.
    SkippedNoClass,
    /// Scanning or rendering failed; the message says why.
    Failed(String),
}

impl FileOutcome {
    /// Whether this outcome counts against the run's exit status.
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }
}

/// One source file's result, tied back to the class and output path.
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    /// Class name derived from the source file.
    pub class_name: String,
    /// Where the test file was (or would have been) written.
    pub output_path: PathBuf,
    /// What happened.
    pub outcome: FileOutcome,
}

// ============================================================================
// GenerationReport
// ============================================================================

/// The collected outcomes of one batch run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Which generator ran.
    pub kind: ArtifactKind,
    /// One entry per discovered source file, in discovery order.
    pub outcomes: Vec<TaskOutcome>,
}

impl GenerationReport {
    /// Create an empty report for one artifact kind.
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            outcomes: Vec::new(),
        }
    }

    /// Record one file's outcome.
    pub fn push(&mut self, class_name: impl Into<String>, output_path: PathBuf, outcome: FileOutcome) {
        self.outcomes.push(TaskOutcome {
            class_name: class_name.into(),
            output_path,
            outcome,
        });
    }

    /// Number of test files written.
    pub fn generated_count(&self) -> usize {
        self.count(|o| *o == FileOutcome::Generated)
    }

    /// Number of files skipped because the test already existed.
    pub fn skipped_existing_count(&self) -> usize {
        self.count(|o| *o == FileOutcome::SkippedExisting)
    }

    /// Number of files skipped because no matching class was declared.
    pub fn skipped_no_class_count(&self) -> usize {
        self.count(|o| *o == FileOutcome::SkippedNoClass)
    }

    /// Number of files that failed to scan or render.
    pub fn failed_count(&self) -> usize {
        self.count(|o| o.is_failure())
    }

    /// Whether any file in the batch failed.
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// The failed entries, as `(class name, message)` pairs.
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|t| match &t.outcome {
                FileOutcome::Failed(message) => Some((t.class_name.as_str(), message.as_str())),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|t| pred(&t.outcome)).count()
    }

    /// Format the report as a human-readable summary box.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(512);

        out.push_str("╔══════════════════════════════════════════════════╗\n");
        out.push_str(&format!(
            "║  {:<48}║\n",
            format!("{} finished", self.kind.banner())
        ));
        out.push_str("╠══════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Generated:        {:<30}║\n", self.generated_count()));
        out.push_str(&format!(
            "║  Already present:  {:<30}║\n",
            self.skipped_existing_count()
        ));
        out.push_str(&format!(
            "║  No class found:   {:<30}║\n",
            self.skipped_no_class_count()
        ));
        out.push_str(&format!("║  Failed:           {:<30}║\n", self.failed_count()));
        out.push_str("╚══════════════════════════════════════════════════╝\n");

        for (class_name, message) in self.failures() {
            out.push_str(&format!("  ✗ {class_name}: {message}\n"));
        }

        out
    }
}

impl std::fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Batch driver for one module.
///
/// The generator is stateless aside from its configuration and template
/// registry. Call [`run`](Generator::run) once per artifact kind.
pub struct Generator {
    /// Root of the module being scanned.
    module_root: PathBuf,
    /// Path and naming configuration, loaded from `testforge.toml` or defaults.
    config: ForgeConfig,
    /// Overwrite existing test files instead of skipping them.
    regenerate: bool,
    templates: TemplateRegistry,
}

impl Generator {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a generator for a module root with the given configuration.
    pub fn new(module_root: impl Into<PathBuf>, config: ForgeConfig) -> ForgeResult<Self> {
        Ok(Self {
            module_root: module_root.into(),
            config,
            regenerate: false,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Overwrite existing test files instead of skipping them.
    pub fn with_regenerate(mut self, regenerate: bool) -> Self {
        self.regenerate = regenerate;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    // ====================================================================
    // Batch run
    // ====================================================================

    /// Generate test skeletons for every source file of one kind.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source directory itself is missing or
    /// unreadable. Per-file problems are recorded in the report instead, so
    /// one broken source never blocks the rest of the batch.
    pub fn run(&self, kind: ArtifactKind) -> ForgeResult<GenerationReport> {
        let source_dir = self.module_root.join(self.config.source_dir(kind));
        info!(kind = %kind, dir = %source_dir.display(), "scanning sources");

        let units = discover_sources(&source_dir)?;
        let mut report = GenerationReport::new(kind);

        for unit in units {
            let out_path = output_path(&self.module_root, &self.config, kind, &unit.class_name);

            if !self.regenerate && out_path.exists() {
                debug!(class = %unit.class_name, "test file already present, skipping");
                report.push(unit.class_name, out_path, FileOutcome::SkippedExisting);
                continue;
            }

            let outcome = match self.generate_one(kind, &unit, &out_path) {
                Ok(()) => {
                    info!(class = %unit.class_name, path = %out_path.display(), "generated");
                    FileOutcome::Generated
                }
                Err(ForgeError::ClassNotFound { .. }) => {
                    warn!(class = %unit.class_name, "no matching class declaration, skipping");
                    FileOutcome::SkippedNoClass
                }
                Err(e) => {
                    warn!(class = %unit.class_name, error = %e, "generation failed");
                    FileOutcome::Failed(e.to_string())
                }
            };
            report.push(unit.class_name, out_path, outcome);
        }

        Ok(report)
    }

    /// Scan, render, and write the test for a single source file.
    fn generate_one(&self, kind: ArtifactKind, unit: &SourceUnit, out_path: &Path) -> ForgeResult<()> {
        let source = unit.read()?;

        let content = match kind {
            ArtifactKind::Controller => {
                let controller = scan_controller(&source, &unit.class_name, &unit.path)?;
                render::controller_test(&self.templates, &controller)?
            }
            ArtifactKind::Entity => {
                let entity = scan_entity(&source, &unit.class_name, &unit.path)?;
                render::entity_test(&self.templates, &entity)?
            }
            ArtifactKind::Form => {
                let form = scan_form(&source, &unit.class_name, &unit.path, &self.config)?;
                let entity = resolve_entity(&self.module_root, &self.config, &form)?;
                render::form_test(&self.templates, &form, entity.as_ref())?
            }
        };

        let file = GeneratedFile::new(
            out_path,
            content,
            format!("{} test for {}", kind, unit.class_name),
        );
        file.write()
    }
}

// ============================================================================
// Tests
// ============================================================================
