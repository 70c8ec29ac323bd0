use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Category of a Constraint, per the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    TypeSafety,
    Semantic,
    Structural,
    Performance,
    Security,
    Operational,
}

/// Provenance of a Constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SourceTag {
    #[serde(rename = "AST_Pattern")]
    AstPattern,
    #[serde(rename = "Type_System")]
    TypeSystem,
    #[serde(rename = "Control_Flow")]
    ControlFlow,
    #[serde(rename = "Data_Flow")]
    DataFlow,
    #[serde(rename = "Test_Mining")]
    TestMining,
    #[serde(rename = "LLM_Analysis")]
    LlmAnalysis,
    Telemetry,
    Config,
}

/// A named, typed, confidence-weighted predicate extracted from source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    pub kind: Kind,
    pub source_tag: SourceTag,
    pub confidence: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Constraint {
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        source_tag: SourceTag,
        confidence: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            source_tag,
            confidence,
            description: description.into(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Dedup key used by the hybrid extractor's merge rule.
    pub fn dedup_key(&self) -> (&str, Kind) {
        (self.name.as_str(), self.kind)
    }
}

/// Diagnostics carried alongside an ordered, deduplicated Constraint list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

/// Kind of semantic hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleKind {
    EmptyFunctionBody,
    UnimplementedMethod,
    IncompleteMatch,
    MissingTypeAnnotation,
    UserMarkedTodo,
}

/// Whether a hole was detected via an explicit user marker or inferred
/// structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleOrigin {
    UserMarked,
    Inferred,
}

/// Byte and point location of a detected hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub file: Option<String>,
    pub line: usize,
    pub col: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// An unfinished-code location detected by the Semantic Hole Detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub kind: HoleKind,
    pub location: Location,
    pub confidence: f64,
    pub origin: HoleOrigin,
    pub hint: Option<String>,
}

impl Hole {
    /// Byte-span overlap used by `detect_all`'s positional-duplicate merge.
    pub fn overlaps(&self, other: &Hole) -> bool {
        self.location.start_byte < other.location.end_byte
            && other.location.start_byte < self.location.end_byte
    }
}

/// Strategy selecting which extractors run and how outputs merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    TreeSitterOnly,
    PatternOnly,
    TreeSitterWithFallback,
    Combined,
}

/// Diagnostic record returned alongside a ConstraintSet by the Hybrid
/// Extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub constraints: ConstraintSet,
    pub strategy_used: Strategy,
    pub tree_sitter_available: bool,
    pub tree_sitter_errors: Option<String>,
    pub extraction_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_key_is_name_and_kind() {
        let c = Constraint::new("foo", Kind::Semantic, SourceTag::AstPattern, 0.95, "desc");
        assert_eq!(c.dedup_key(), ("foo", Kind::Semantic));
    }

    #[test]
    fn holes_overlap_detects_shared_span() {
        let loc = |s, e| Location {
            file: None,
            line: 0,
            col: 0,
            start_byte: s,
            end_byte: e,
        };
        let a = Hole {
            kind: HoleKind::EmptyFunctionBody,
            location: loc(0, 10),
            confidence: 0.9,
            origin: HoleOrigin::Inferred,
            hint: None,
        };
        let b = Hole {
            location: loc(5, 15),
            ..a.clone()
        };
        let c = Hole {
            location: loc(20, 30),
            ..a.clone()
        };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
