//! Pattern explanations bundled with the crate

use crate::error::{CreationError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const BUNDLED_EXPLANATIONS: &str = include_str!("explanations.yaml");

/// The five creational patterns demonstrated by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Singleton,
    FactoryMethod,
    AbstractFactory,
    Builder,
    Prototype,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Singleton,
        Pattern::FactoryMethod,
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::Prototype,
    ];

    /// Key used in the explanations catalog and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Pattern::Singleton => "singleton",
            Pattern::FactoryMethod => "factory-method",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Builder => "builder",
            Pattern::Prototype => "prototype",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pattern::Singleton => "Singleton",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::Builder => "Builder",
            Pattern::Prototype => "Prototype",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Pattern {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| CreationError::invalid_selector("pattern", s))
    }
}

/// Walkthrough text for one pattern
#[derive(Debug, Clone, Deserialize)]
pub struct PatternExplanation {
    pub title: String,
    pub docs_url: String,
    pub problem: String,
    pub intent: String,
    pub components: String,
    pub structure: String,
    pub summary: String,
}

impl PatternExplanation {
    /// Load the bundled explanation for `pattern`
    pub fn for_pattern(pattern: Pattern) -> Result<Self> {
        let mut catalog = load_catalog(BUNDLED_EXPLANATIONS)?;
        catalog
            .remove(pattern.key())
            .ok_or_else(|| CreationError::NotFound {
                key: pattern.key().to_string(),
            })
    }

    /// Sections in display order, with their headings
    pub fn sections(&self) -> [(&'static str, &str); 5] {
        [
            ("A. REAL-WORLD PROBLEM", self.problem.as_str()),
            ("B. INTENT OF THE PATTERN", self.intent.as_str()),
            ("C. COMPONENTS (Pattern Structure)", self.components.as_str()),
            ("D. STRUCTURE", self.structure.as_str()),
            ("E. SUMMARY OF THIS IMPLEMENTATION", self.summary.as_str()),
        ]
    }
}

fn load_catalog(yaml: &str) -> Result<HashMap<String, PatternExplanation>> {
    serde_yaml::from_str(yaml).map_err(|source| CreationError::Catalog {
        what: "pattern explanation",
        source,
    })
}
