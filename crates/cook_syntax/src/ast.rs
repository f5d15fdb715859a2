//! Document model for parsed recipes.
//!
//! A [`Document`] is an ordered list of [`Step`]s; each step is an ordered list of [`Component`]s, each carrying the
//! [`Span`] it was parsed from. Everything is built by a single parse call and is read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::diagnostics::ParseError;

/// A point in the source: byte offset plus 1-based line and column (columns count characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span: start position plus end byte offset (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: usize,
}

impl Span {
    pub fn new(start: Position, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    pub fn position(&self) -> Position {
        self.span.start
    }
}

// ============================================================================
// Components
// ============================================================================

/// Plain prose between references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub text: String,
}

/// `-- text`, trimmed, without the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

/// `@name` or `@name{quantity%unit}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Never empty.
    pub name: String,
    /// Raw text; empty means "some".
    pub quantity: String,
    pub unit: String,
}

impl Ingredient {
    /// The quantity, or `"some"` when none was written.
    pub fn quantity_or_some(&self) -> &str {
        if self.quantity.is_empty() {
            "some"
        } else {
            &self.quantity
        }
    }
}

/// `#name` or `#name{quantity}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookware {
    /// Never empty.
    pub name: String,
    pub quantity: String,
}

/// `~name{magnitude%unit}`; the name may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub name: String,
    pub magnitude: String,
    pub unit: String,
}

/// `>> key: value` at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub key: String,
    pub value: String,
}

/// One piece of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Instruction(Instruction),
    Comment(Comment),
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
    Metadata(Metadata),
}

impl Component {
    /// Whether this component counts toward a step "having instructions".
    pub fn is_instruction_like(&self) -> bool {
        matches!(self, Component::Instruction(_) | Component::Ingredient(_))
    }

    /// Whether this component shows up in rendered output and conformance checks.
    pub fn is_visible(&self) -> bool {
        match self {
            Component::Instruction(_) | Component::Ingredient(_) | Component::Cookware(_) | Component::Timer(_) => {
                true
            }
            Component::Comment(_) | Component::Metadata(_) => false,
        }
    }
}

// ============================================================================
// Steps and documents
// ============================================================================

/// A block of recipe content, ended by a blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub position: Position,
    pub components: Vec<Spanned<Component>>,
}

impl Step {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            components: Vec::new(),
        }
    }

    /// Append a component; the first one anchors the step's position.
    pub fn push(&mut self, component: Spanned<Component>) {
        if self.components.is_empty() {
            self.position = component.position();
        }
        self.components.push(component);
    }

    /// A step has instructions once it holds an instruction or an ingredient.
    pub fn has_instructions(&self) -> bool {
        self.components.iter().any(|c| c.node.is_instruction_like())
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components that are neither comments nor metadata, in order.
    pub fn visible_components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().map(|c| &c.node).filter(|c| c.is_visible())
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.components.iter().filter_map(|c| match &c.node {
            Component::Ingredient(ingredient) => Some(ingredient),
            _ => None,
        })
    }

    pub fn cookware(&self) -> impl Iterator<Item = &Cookware> {
        self.components.iter().filter_map(|c| match &c.node {
            Component::Cookware(cookware) => Some(cookware),
            _ => None,
        })
    }

    pub fn timers(&self) -> impl Iterator<Item = &Timer> {
        self.components.iter().filter_map(|c| match &c.node {
            Component::Timer(timer) => Some(timer),
            _ => None,
        })
    }

    pub fn metadata(&self) -> impl Iterator<Item = &Metadata> {
        self.components.iter().filter_map(|c| match &c.node {
            Component::Metadata(metadata) => Some(metadata),
            _ => None,
        })
    }
}

/// A parsed recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub source_name: String,
    pub steps: Vec<Step>,
    /// Non-fatal diagnostics (warnings) collected while parsing.
    pub errors: Vec<ParseError>,
}

impl Document {
    /// Metadata from every step, keyed by name; a later definition replaces an earlier one.
    pub fn metadata(&self) -> BTreeMap<String, String> {
        self.steps
            .iter()
            .flat_map(Step::metadata)
            .map(|m| (m.key.clone(), m.value.clone()))
            .collect()
    }

    /// Steps that hold at least one instruction or ingredient.
    pub fn instruction_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.has_instructions())
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.steps.iter().flat_map(Step::ingredients)
    }

    pub fn cookware(&self) -> impl Iterator<Item = &Cookware> {
        self.steps.iter().flat_map(Step::cookware)
    }

    pub fn timers(&self) -> impl Iterator<Item = &Timer> {
        self.steps.iter().flat_map(Step::timers)
    }
}

// ============================================================================
// Debug dump
// ============================================================================

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Instruction(i) => write!(f, "(instruction {:?})", i.text),
            Component::Comment(c) => write!(f, "(comment {:?})", c.text),
            Component::Ingredient(i) => {
                write!(f, "(ingredient {:?}", i.name)?;
                if !i.quantity.is_empty() {
                    write!(f, " :quantity {:?}", i.quantity)?;
                }
                if !i.unit.is_empty() {
                    write!(f, " :unit {:?}", i.unit)?;
                }
                write!(f, ")")
            }
            Component::Cookware(c) => {
                write!(f, "(cookware {:?}", c.name)?;
                if !c.quantity.is_empty() {
                    write!(f, " :quantity {:?}", c.quantity)?;
                }
                write!(f, ")")
            }
            Component::Timer(t) => write!(
                f,
                "(timer {:?} :magnitude {:?} :unit {:?})",
                t.name, t.magnitude, t.unit
            ),
            Component::Metadata(m) => write!(f, "(metadata {:?} {:?})", m.key, m.value),
        }
    }
}

impl fmt::Display for Step {
    /// `(step` followed by one visible component per line; comments and metadata are left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(step")?;
        for component in self.visible_components() {
            write!(f, "\n    {component}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Document {
    /// Deterministic debug dump.
    ///
    /// Metadata is printed once at the top in key order; comments and per-step metadata are omitted. The dump is
    /// lossy: it is not a serialization, and tokenizing it again does not reproduce the document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(recipe {:?}", self.source_name)?;
        for (key, value) in self.metadata() {
            write!(f, "\n  (metadata {key:?} {value:?})")?;
        }
        for step in &self.steps {
            write!(f, "\n  {step}")?;
        }
        write!(f, ")")
    }
}
