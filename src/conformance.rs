//! Conformance corpus runner.
//!
//! A corpus is a JSON file of named cases, each a recipe source plus the expected step decomposition and metadata:
//!
//! ```json
//! {"version": 5, "tests": {"testBasicDirection": {
//!     "source": "Add a bit of chilli",
//!     "result": {"steps": [[{"type": "text", "value": "Add a bit of chilli"}]], "metadata": {}}}}}
//! ```
//!
//! For each parsed step that has instructions, the visible components (comments and metadata skipped) must match
//! the expected list in order. Trailing actual components beyond the expected list are not checked.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use cook_core::numerals::Numeral;
use cook_syntax::ast::{Component, Step};
use serde::Deserialize;
use thiserror::Error;

/// Cases that need fractional quantities, which are kept as raw text.
pub const SKIPPED: &[&str] = &["testFractions", "testFractionsWithSpaces", "testTimerFractional"];

#[derive(Debug, Error)]
pub enum ConformanceError {
    #[error("cannot read corpus '{path}': {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid corpus: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub version: u32,
    pub tests: BTreeMap<String, Case>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub source: String,
    pub result: Expected,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expected {
    #[serde(default)]
    pub steps: Vec<Vec<ExpectedComponent>>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExpectedComponent {
    Text {
        value: String,
    },
    Ingredient {
        name: String,
        quantity: ExpectedValue,
        #[serde(default)]
        units: String,
    },
    Cookware {
        name: String,
    },
    Timer {
        #[serde(default)]
        name: String,
        quantity: ExpectedValue,
        #[serde(default)]
        units: String,
    },
}

/// A JSON string or number; numbers are compared numerically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    Number(f64),
    Text(String),
}

impl ExpectedValue {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            ExpectedValue::Text(expected) => actual == expected,
            ExpectedValue::Number(expected) => Numeral::parse(actual).is_ok_and(|n| n.to_f64() == *expected),
        }
    }
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedValue::Number(n) => write!(f, "{n}"),
            ExpectedValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl Corpus {
    pub fn from_json(json: &str) -> Result<Self, ConformanceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConformanceError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConformanceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Skipped,
    Failed(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    pub outcome: Outcome,
}

/// Results for a whole corpus, in case-name order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub results: Vec<CaseResult>,
}

impl Report {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn passed(&self) -> usize {
        self.count(|o| *o == Outcome::Passed)
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| *o == Outcome::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.results.iter().filter_map(|r| match &r.outcome {
            Outcome::Failed(reasons) => Some((r.name.as_str(), reasons.as_slice())),
            Outcome::Passed | Outcome::Skipped => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

/// Run every case in `corpus`.
#[tracing::instrument(skip_all, fields(version = corpus.version, cases = corpus.tests.len()))]
pub fn run(corpus: &Corpus) -> Report {
    let results = corpus
        .tests
        .iter()
        .map(|(name, case)| {
            let outcome = check_case(name, case);
            if let Outcome::Failed(reasons) = &outcome {
                tracing::debug!(case = %name, reasons = reasons.len(), "conformance case failed");
            }
            CaseResult {
                name: name.clone(),
                outcome,
            }
        })
        .collect();
    Report { results }
}

/// Check one case; the case name doubles as the source name.
pub fn check_case(name: &str, case: &Case) -> Outcome {
    if SKIPPED.contains(&name) {
        return Outcome::Skipped;
    }

    let document = match cook_syntax::parse_recipe(name, case.source.as_bytes()) {
        Ok(document) => document,
        Err(err) => return Outcome::Failed(vec![format!("parse error: {err}")]),
    };

    let mut failures = Vec::new();
    let metadata = document.metadata();
    if metadata != case.result.metadata {
        failures.push(format!(
            "metadata: expected {:?}, got {:?}",
            case.result.metadata, metadata
        ));
    }

    for (i, step) in document.steps.iter().enumerate() {
        if !step.has_instructions() {
            continue;
        }
        match case.result.steps.get(i) {
            Some(expected) => check_step(i, step, expected, &mut failures),
            None => failures.push(format!("step {i}: not expected, got {step}")),
        }
    }

    if failures.is_empty() {
        Outcome::Passed
    } else {
        Outcome::Failed(failures)
    }
}

fn check_step(index: usize, step: &Step, expected: &[ExpectedComponent], failures: &mut Vec<String>) {
    let mut actual = step.visible_components();
    for (j, want) in expected.iter().enumerate() {
        let Some(got) = actual.next() else {
            failures.push(format!(
                "step {index}: expected {} components, found {j}",
                expected.len()
            ));
            return;
        };
        if let Some(reason) = mismatch(want, got) {
            failures.push(format!("step {index}, component {j}: {reason}"));
        }
    }
}

fn mismatch(want: &ExpectedComponent, got: &Component) -> Option<String> {
    let ok = match (want, got) {
        (ExpectedComponent::Text { value }, Component::Instruction(i)) => i.text == *value,
        (ExpectedComponent::Ingredient { name, quantity, units }, Component::Ingredient(i)) => {
            i.name == *name && quantity.matches(i.quantity_or_some()) && i.unit == *units
        }
        (ExpectedComponent::Cookware { name }, Component::Cookware(c)) => c.name == *name,
        (ExpectedComponent::Timer { name, quantity, units }, Component::Timer(t)) => {
            t.name == *name && quantity.matches(&t.magnitude) && t.unit == *units
        }
        _ => false,
    };
    (!ok).then(|| format!("expected {want:?}, got {got}"))
}
