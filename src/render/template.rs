//! Style/template registry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual arrangement of the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    SingleColumn,
    TwoColumn,
}

impl LayoutKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SingleColumn => "single-column",
            Self::TwoColumn => "two-column",
        }
    }
}

/// Type profile of the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Typography {
    Serif,
    Sans,
    Mono,
}

impl Typography {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::Sans => "sans",
            Self::Mono => "mono",
        }
    }
}

/// Layout plus typography applied at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSelection {
    pub layout: LayoutKind,
    pub typography: Typography,
}

impl StyleSelection {
    pub const fn new(layout: LayoutKind, typography: Typography) -> Self {
        Self { layout, typography }
    }
}

impl Default for StyleSelection {
    fn default() -> Self {
        TEMPLATES[0].style()
    }
}

impl fmt::Display for StyleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.layout.tag(), self.typography.tag())
    }
}

/// A named resume template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub layout: LayoutKind,
    pub typography: Typography,
}

impl Template {
    pub fn style(&self) -> StyleSelection {
        StyleSelection::new(self.layout, self.typography)
    }
}

pub static TEMPLATES: &[Template] = &[
    Template {
        id: "classic",
        name: "Classic",
        description: "Single column with serif headings",
        layout: LayoutKind::SingleColumn,
        typography: Typography::Serif,
    },
    Template {
        id: "modern",
        name: "Modern",
        description: "Two columns with contact details and skills in a sidebar",
        layout: LayoutKind::TwoColumn,
        typography: Typography::Sans,
    },
    Template {
        id: "compact",
        name: "Compact",
        description: "Single column in a dense sans-serif face",
        layout: LayoutKind::SingleColumn,
        typography: Typography::Sans,
    },
    Template {
        id: "technical",
        name: "Technical",
        description: "Two columns in a monospace face",
        layout: LayoutKind::TwoColumn,
        typography: Typography::Mono,
    },
];

/// Look up a template by id, falling back to the first template
pub fn template_by_id(id: &str) -> &'static Template {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TEMPLATES[0])
}

/// Position of a template in the registry, if registered
pub fn template_index(id: &str) -> Option<usize> {
    TEMPLATES.iter().position(|t| t.id == id)
}
