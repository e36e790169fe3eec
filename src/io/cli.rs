//! Command-line interface for batch kolam generation

use crate::algorithm::executor::{Generation, GenerationConfig, KolamGenerator};
use crate::algorithm::rules::KolamRules;
use crate::algorithm::synthesis::{FallbackPolicy, SymmetryMode};
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_SEED, DEFAULT_SIZE, OUTPUT_PREFIX, RULES_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{read_json, write_json};
use crate::io::progress::ProgressManager;
use crate::io::ruleset::RuleSet;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "kolam")]
#[command(version, about = "Generate symmetric kolam patterns as JSON drawing records")]
/// Command-line arguments for the kolam generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the generated files
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Edge length of the dot grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Random seed of the first pattern
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of patterns, seeded consecutively from --seed
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Also mirror about the main diagonal
    #[arg(short, long)]
    pub diagonal: bool,

    /// Fail instead of placing a seam-breaking neutral motif
    #[arg(long)]
    pub strict: bool,

    /// Write the rule set next to every pattern
    #[arg(short, long)]
    pub rules: bool,

    /// Reproduce patterns from a rule-set file instead of generating
    ///
    /// The rule set's symmetry type selects the mode, so --diagonal is
    /// rejected here, and a rule set with explicit motifs allows a count of 1.
    #[arg(long, value_name = "RULESET")]
    pub from: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate files even if they already exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level for the subscriber
    pub const fn log_level(&self) -> Level {
        if self.quiet { Level::WARN } else { Level::INFO }
    }

    /// Generation settings selected by the flags
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            mode: if self.diagonal {
                SymmetryMode::Diagonal
            } else {
                SymmetryMode::Bilateral
            },
            fallback_policy: if self.strict {
                FallbackPolicy::Strict
            } else {
                FallbackPolicy::Lenient
            },
            ..GenerationConfig::new(self.size)
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Patterns written
    pub written: usize,
    /// Patterns skipped because their output existed
    pub skipped: usize,
}

/// Orchestrates batch generation with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    rules: KolamRules,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            rules: KolamRules::new(),
            progress_manager,
        }
    }

    /// Generate every requested pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or rule set is invalid, the
    /// flags conflict with the rule set, strict synthesis fails or an output
    /// file cannot be written
    pub fn process(&mut self) -> Result<BatchSummary> {
        let ruleset = match self.cli.from {
            Some(ref path) => {
                let ruleset = read_json::<RuleSet>(path)?;
                self.check_reproduction_flags(&ruleset)?;
                Some(ruleset)
            }
            None => None,
        };
        let size = ruleset.as_ref().map_or(self.cli.size, |r| r.grid_size);

        let mut config = self.cli.generation_config();
        config.size = size;
        let generator = KolamGenerator::new(&self.rules, config.clone())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut summary = BatchSummary::default();
        for offset in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(offset as u64);
            let pattern_path = self.pattern_path(size, seed);
            let rules_path = self.rules_path(size, seed);

            if self.cli.skip_existing() && self.outputs_exist(&pattern_path, &rules_path) {
                tracing::debug!(path = %pattern_path.display(), "output exists, skipping");
                summary.skipped += 1;
                self.advance(&pattern_path);
                continue;
            }

            let generation = match ruleset {
                Some(ref rs) => rs.reproduce_with(&self.rules, seed, config.clone())?,
                None => generator.generate(seed)?,
            };
            self.write_outputs(&generation, &pattern_path, &rules_path)?;

            summary.written += 1;
            self.advance(&pattern_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            size,
            "batch complete"
        );
        Ok(summary)
    }

    fn check_reproduction_flags(&self, ruleset: &RuleSet) -> Result<()> {
        if self.cli.diagonal {
            return Err(invalid_parameter(
                "diagonal",
                &ruleset.symmetry_type,
                &"the rule set's symmetry type selects the mode",
            ));
        }
        if !ruleset.motifs.is_empty() && self.cli.count > 1 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"a rule set with explicit motifs describes a single grid",
            ));
        }
        Ok(())
    }

    fn write_outputs(
        &self,
        generation: &Generation,
        pattern_path: &Path,
        rules_path: &Path,
    ) -> Result<()> {
        write_json(pattern_path, &generation.pattern)?;
        if self.cli.rules {
            write_json(rules_path, &RuleSet::from_generation(generation, &self.rules))?;
        }

        tracing::debug!(
            path = %pattern_path.display(),
            symmetry = %generation.pattern.symmetry_type,
            fallbacks = generation.report.fallbacks,
            "pattern written"
        );
        Ok(())
    }

    fn outputs_exist(&self, pattern_path: &Path, rules_path: &Path) -> bool {
        pattern_path.exists() && (!self.cli.rules || rules_path.exists())
    }

    fn advance(&self, path: &Path) {
        if let Some(ref pm) = self.progress_manager {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            pm.complete_item(&name);
        }
    }

    /// Pattern file for a size and seed
    pub fn pattern_path(&self, size: usize, seed: u64) -> PathBuf {
        self.cli.output_dir.join(format!("{}.json", stem(size, seed)))
    }

    /// Rule-set file for a size and seed
    pub fn rules_path(&self, size: usize, seed: u64) -> PathBuf {
        self.cli
            .output_dir
            .join(format!("{}{RULES_SUFFIX}.json", stem(size, seed)))
    }
}

fn stem(size: usize, seed: u64) -> String {
    format!("{OUTPUT_PREFIX}_{size}x{size}_s{seed}")
}
