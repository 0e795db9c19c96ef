//! Validation result types

use std::fmt;

use crate::validation::rules::Rule;

/// Rules a registration form violated, in evaluation order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Rule>,
}

impl ValidationErrors {
    pub(crate) fn new(violations: Vec<Rule>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[Rule] {
        &self.violations
    }

    pub fn first(&self) -> Rule {
        self.violations[0]
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.violations.contains(&rule)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(Rule::message).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}

impl std::error::Error for ValidationErrors {}
