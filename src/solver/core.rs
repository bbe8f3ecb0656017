use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Operator, parse_expression};
use crate::solver::collector::{ResultCollector, Solution};
use crate::solver::combination::Combination;
use crate::solver::constants::{DEFAULT_LEAF_COUNT, EPSILON, MAX_LEAVES};
use crate::solver::errors::SolverError;
use crate::utils::{
    Mask, full_mask, generate_splits, nondecreasing_digit_strings, parse_digits, single_leaf,
    validate_digit_string,
};

/// Configuration for expression search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub leaf_count: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            leaf_count: DEFAULT_LEAF_COUNT,
        }
    }
}

/// Digit string and how many distinct solutions it has for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepEntry {
    pub digits: String,
    pub solutions: usize,
}

/// Per-call memo table: every combination of every mask, indexed by mask.
///
/// Masks are filled in increasing numeric order, so both halves of any
/// split are already present when their parent is built.
struct SearchContext<'a> {
    leaves: &'a [u8],
    table: Vec<Vec<Combination>>,
}

impl<'a> SearchContext<'a> {
    fn new(leaves: &'a [u8]) -> Self {
        let size = full_mask(leaves.len()) as usize + 1;
        Self {
            leaves,
            table: vec![Vec::new(); size],
        }
    }

    fn records(&self, mask: Mask) -> &[Combination] {
        self.table
            .get(mask as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn run(mut self) -> Vec<Combination> {
        let full = full_mask(self.leaves.len());
        for mask in 1..=full {
            let records = self.enumerate(mask);
            debug!("Mask {:#b}: {} combinations", mask, records.len());
            if let Some(slot) = self.table.get_mut(mask as usize) {
                *slot = records;
            }
        }

        self.table
            .get_mut(full as usize)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    fn enumerate(&self, mask: Mask) -> Vec<Combination> {
        if let Some(index) = single_leaf(mask) {
            return self
                .leaves
                .get(index)
                .map(|&digit| vec![Combination::leaf(digit)])
                .unwrap_or_default();
        }

        let mut records = Vec::new();
        let mut seen_text = HashSet::new();

        for (left_mask, right_mask) in generate_splits(mask) {
            let mut candidates = Vec::new();
            for left in self.records(left_mask) {
                for right in self.records(right_mask) {
                    for op in Operator::ALL {
                        candidates.extend(Combination::combine(op, left, right));
                        if !op.is_commutative() {
                            candidates.extend(Combination::combine(op, right, left));
                        }
                    }
                }
            }

            for candidate in candidates {
                if seen_text.insert(candidate.text.clone()) {
                    records.push(candidate);
                }
            }
        }

        records
    }
}

/// Finds every distinct expression over a set of digits that reaches a target
#[derive(Debug, Clone)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] when the leaf count is outside
    /// `1..=MAX_LEAVES` or the tolerance is not a positive finite number.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        if config.leaf_count == 0 || config.leaf_count > MAX_LEAVES {
            return Err(SolverError::InvalidConfig(format!(
                "leaf count must be between 1 and {}, got {}",
                MAX_LEAVES, config.leaf_count
            )));
        }
        if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be a positive number, got {}",
                config.tolerance
            )));
        }
        Ok(Self { config })
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate a digit string and solve it.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly `leaf_count` ASCII digits.
    pub fn solve_digits(&self, digits: &str, target: f64) -> Result<Vec<String>, SolverError> {
        validate_digit_string(digits, self.config.leaf_count)?;
        let leaves = parse_digits(digits)?;
        self.solve(&leaves, target)
    }

    /// Solution expressions for `leaves`, shortest first.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LeafCount`] when `leaves` is empty or longer than
    /// `MAX_LEAVES`.
    pub fn solve(&self, leaves: &[u8], target: f64) -> Result<Vec<String>, SolverError> {
        Ok(self
            .find_solutions(leaves, target)?
            .into_iter()
            .map(|s| s.expression)
            .collect())
    }

    /// Like [`solve`](Self::solve), keeping each solution's structure key and value.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LeafCount`] when `leaves` is empty or longer than
    /// `MAX_LEAVES`.
    pub fn find_solutions(&self, leaves: &[u8], target: f64) -> Result<Vec<Solution>, SolverError> {
        if leaves.is_empty() || leaves.len() > MAX_LEAVES {
            return Err(SolverError::LeafCount {
                actual: leaves.len(),
                max: MAX_LEAVES,
            });
        }

        info!("Searching for expressions using {:?} that equal {}", leaves, target);

        let records = SearchContext::new(leaves).run();
        let mut collector = ResultCollector::new(target, self.config.tolerance);
        for record in &records {
            collector.offer(record);
        }
        let solutions = collector.finish();

        info!(
            "Examined {} full combinations, found {} solutions",
            records.len(),
            solutions.len()
        );
        Ok(solutions)
    }

    /// Parse `expression` and check that it reaches `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse, cannot be evaluated, or
    /// evaluates outside the configured tolerance.
    pub fn verify(&self, expression: &str, target: f64) -> Result<f64, SolverError> {
        let value = parse_expression(expression)?.evaluate()?;
        if (value - target).abs() < self.config.tolerance {
            Ok(value)
        } else {
            Err(SolverError::Mismatch {
                expression: expression.to_string(),
                value,
                target,
            })
        }
    }

    /// Solve every multiset of `leaf_count` digits against `target` and
    /// report the solvable ones in ascending digit order.
    ///
    /// Leaves are tagged by value, so each multiset is solved once through
    /// its non-decreasing spelling.
    pub fn sweep(&self, target: f64) -> Vec<SweepEntry> {
        info!(
            "Sweeping all {}-digit multisets for target {}",
            self.config.leaf_count, target
        );

        let mut entries: Vec<SweepEntry> = nondecreasing_digit_strings(self.config.leaf_count)
            .into_par_iter()
            .filter_map(|digits| {
                let leaves = parse_digits(&digits).ok()?;
                let solutions = self.find_solutions(&leaves, target).ok()?.len();
                (solutions > 0).then_some(SweepEntry { digits, solutions })
            })
            .collect();

        entries.sort_by(|a, b| a.digits.cmp(&b.digits));
        info!("{} multisets reach {}", entries.len(), target);
        entries
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}
