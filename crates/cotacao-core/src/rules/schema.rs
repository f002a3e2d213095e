use crate::model::{AccommodationType, Category, CoverageType, PlanType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which plan attribute a vocabulary classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    PlanType,
    CoverageType,
    Accommodation,
}

impl VocabularyKind {
    /// Category names the kind's enumeration accepts.
    pub fn category_names(&self) -> Vec<&'static str> {
        match self {
            VocabularyKind::PlanType => PlanType::ALL.iter().map(|c| c.name()).collect(),
            VocabularyKind::CoverageType => CoverageType::ALL.iter().map(|c| c.name()).collect(),
            VocabularyKind::Accommodation => {
                AccommodationType::ALL.iter().map(|c| c.name()).collect()
            }
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        self.category_names()
            .iter()
            .any(|name| name.eq_ignore_ascii_case(category.trim()))
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyKind::PlanType => write!(f, "plan_type"),
            VocabularyKind::CoverageType => write!(f, "coverage_type"),
            VocabularyKind::Accommodation => write!(f, "accommodation"),
        }
    }
}

/// A controlled vocabulary with the regex evidence for each category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub kind: VocabularyKind,
    /// Ordered categories; the first one is the no-evidence default and wins ties.
    pub categories: Vec<String>,
    /// Lower-cased category name -> patterns whose match counts are summed.
    #[serde(default)]
    pub patterns: BTreeMap<String, Vec<String>>,
    /// Direct matches checked in order before any scoring.
    #[serde(default)]
    pub shortcuts: Vec<ShortcutDef>,
}

/// An unambiguous signal that decides the category without scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutDef {
    pub pattern: String,
    pub category: String,
}
