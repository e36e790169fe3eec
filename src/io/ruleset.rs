//! Rule-set exchange with the image-analysis service
//!
//! A rule set names a grid size, a symmetry class and, optionally, the exact
//! motif ids of a grid. It can be emitted from any generation and turned back
//! into a pattern record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::algorithm::executor::{
    Generation, GenerationConfig, GenerationReport, KolamGenerator,
};
use crate::algorithm::rules::KolamRules;
use crate::algorithm::synthesis::SymmetryMode;
use crate::io::error::{KolamError, Result};
use crate::math::curves::Point;
use crate::spatial::geometry::KolamPattern;
use crate::spatial::grid::MotifGrid;
use crate::spatial::motifs::{EMPTY_CELL, Motif, MotifId};
use crate::spatial::symmetry::SymmetryClass;

/// Traditional kolam family, judged from the dot/curve balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CulturalType {
    /// Dot-dominated
    Pulli,
    /// Curve-dominated
    Sikku,
    /// Balanced
    Chuzhi,
}

impl CulturalType {
    /// `Pulli` when dots exceed twice the curves, `Sikku` when curves exceed dots
    pub const fn classify(dots: usize, curves: usize) -> Self {
        if dots > 2 * curves {
            Self::Pulli
        } else if curves > dots {
            Self::Sikku
        } else {
            Self::Chuzhi
        }
    }
}

/// One motif as described in a rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifDescriptor {
    /// Catalog id, or a contour number when emitted by the analysis service
    pub id: usize,
    /// Cell-local stroke points
    #[serde(default)]
    pub points: Vec<Point>,
    /// Down connector flag
    #[serde(rename = "hasDownConnection")]
    pub has_down_connection: bool,
    /// Right connector flag
    #[serde(rename = "hasRightConnection")]
    pub has_right_connection: bool,
}

impl From<&Motif> for MotifDescriptor {
    fn from(motif: &Motif) -> Self {
        Self {
            id: usize::from(motif.id),
            points: motif.local_points.clone(),
            has_down_connection: motif.has_down_connector,
            has_right_connection: motif.has_right_connector,
        }
    }
}

/// Serializable description of a kolam grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Edge length
    pub grid_size: usize,
    /// Claimed symmetry class
    pub symmetry_type: SymmetryClass,
    /// Optional cultural classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_type: Option<CulturalType>,
    /// Row-major motif ids, empty when only the shape is prescribed
    ///
    /// Kept signed so out-of-range entries surface as unknown motifs.
    #[serde(default)]
    pub motifs: Vec<i64>,
    /// Descriptors of the motifs used
    #[serde(default)]
    pub patterns: Vec<MotifDescriptor>,
}

impl RuleSet {
    /// Describe a finished generation
    pub fn from_generation(generation: &Generation, rules: &KolamRules) -> Self {
        Self::describe(&generation.grid, &generation.pattern, rules)
    }

    /// Describe a grid together with its realization
    pub fn describe(grid: &MotifGrid, pattern: &KolamPattern, rules: &KolamRules) -> Self {
        let used: BTreeSet<MotifId> = grid
            .view()
            .iter()
            .copied()
            .filter(|&id| id != EMPTY_CELL)
            .collect();

        Self {
            grid_size: grid.size(),
            symmetry_type: pattern.symmetry_type,
            cultural_type: Some(CulturalType::classify(
                pattern.dots.len(),
                pattern.curves.len(),
            )),
            motifs: grid.to_row_major().into_iter().map(i64::from).collect(),
            patterns: used
                .into_iter()
                .filter_map(|id| rules.catalog().get(id))
                .map(MotifDescriptor::from)
                .collect(),
        }
    }

    /// Parse a rule set from JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or missing fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Turn the rule set into a pattern using default drawing settings
    ///
    /// # Errors
    ///
    /// See [`Self::reproduce_with`]
    pub fn reproduce(&self, rules: &KolamRules, seed: u64) -> Result<Generation> {
        self.reproduce_with(rules, seed, GenerationConfig::new(self.grid_size))
    }

    /// Turn the rule set into a pattern
    ///
    /// With no motif ids a fresh grid of `grid_size` is generated from
    /// `seed`, diagonal when the rule set claims "2D". With `grid_size²` ids
    /// that exact grid is realized. Size and mode in `base` are overridden;
    /// its style and fallback policy are kept.
    ///
    /// # Errors
    ///
    /// Returns [`KolamError::InvalidSize`] for an unsupported size,
    /// [`KolamError::InvalidRuleSet`] when the id list has the wrong length,
    /// or [`KolamError::UnknownMotifReference`] for ids outside `0..=16`
    pub fn reproduce_with(
        &self,
        rules: &KolamRules,
        seed: u64,
        base: GenerationConfig,
    ) -> Result<Generation> {
        let mode = if self.symmetry_type == SymmetryClass::TwoD {
            SymmetryMode::Diagonal
        } else {
            SymmetryMode::Bilateral
        };
        let config = GenerationConfig {
            size: self.grid_size,
            mode,
            ..base
        };
        let generator = KolamGenerator::new(rules, config)?;

        if self.motifs.is_empty() {
            return generator.generate(seed);
        }

        let expected = self.grid_size * self.grid_size;
        if self.motifs.len() != expected {
            return Err(KolamError::InvalidRuleSet {
                reason: format!(
                    "{} motif ids given for a {n}x{n} grid, expected {expected}",
                    self.motifs.len(),
                    n = self.grid_size
                ),
            });
        }

        let grid = MotifGrid::from_row_major(self.grid_size, &self.motifs)?;
        let pattern = generator.realize(&grid)?;
        if pattern.symmetry_type != self.symmetry_type {
            tracing::debug!(
                claimed = %self.symmetry_type,
                actual = %pattern.symmetry_type,
                "rule set symmetry tag differs from its grid"
            );
        }

        let seam_violations = grid.seam_violations(rules);
        Ok(Generation {
            grid,
            pattern,
            report: GenerationReport {
                seam_violations,
                ..GenerationReport::default()
            },
        })
    }
}
