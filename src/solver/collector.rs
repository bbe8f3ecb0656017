use std::collections::HashSet;

use log::debug;

use crate::solver::combination::Combination;

/// An expression that reaches the target
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub expression: String,
    pub key: String,
    pub value: f64,
}

/// Gathers full-mask records that hit the target, one per structure key.
pub struct ResultCollector {
    target: f64,
    tolerance: f64,
    keys: HashSet<String>,
    solutions: Vec<Solution>,
}

impl ResultCollector {
    pub fn new(target: f64, tolerance: f64) -> Self {
        Self {
            target,
            tolerance,
            keys: HashSet::new(),
            solutions: Vec::new(),
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        value.is_finite() && (value - self.target).abs() < self.tolerance
    }

    /// Record `combination` if it reaches the target and its structure key is
    /// new. The first expression seen for a key wins.
    pub fn offer(&mut self, combination: &Combination) {
        if !self.matches(combination.value) || self.keys.contains(&combination.key) {
            return;
        }

        self.keys.insert(combination.key.clone());
        self.solutions.push(Solution {
            expression: combination.text.clone(),
            key: combination.key.clone(),
            value: combination.value,
        });
    }

    /// Drop repeated expression text and sort shortest first, then
    /// lexicographically.
    pub fn finish(self) -> Vec<Solution> {
        let mut seen = HashSet::new();
        let mut solutions: Vec<Solution> = self
            .solutions
            .into_iter()
            .filter(|s| seen.insert(s.expression.clone()))
            .collect();

        solutions.sort_by(|a, b| {
            a.expression
                .len()
                .cmp(&b.expression.len())
                .then_with(|| a.expression.cmp(&b.expression))
        });

        debug!("Collected {} solutions", solutions.len());
        solutions
    }
}
