//! HTML rendering.
//!
//! Produces an `<article>` holding an ordered list of steps. Instructions become escaped text; ingredients, cookware
//! and timers become classed `<span>`s. Comments and per-step metadata are never rendered.

use std::fmt::{self, Write};

use cook_core::durations::{DURATIONS, DurationTable};
use cook_core::numerals::Numeral;
use cook_syntax::ast::{Component, Cookware, Document, Ingredient, Step, Timer};
use html_escape::{encode_double_quoted_attribute, encode_text};
use thiserror::Error;

use crate::config::RenderConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown duration dialect '{0}'")]
    UnknownDialect(String),
    #[error("failed to write HTML: {0}")]
    Write(#[from] fmt::Error),
}

/// Renders documents as HTML fragments.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<'t> {
    config: RenderConfig,
    durations: &'t DurationTable,
}

impl HtmlRenderer<'static> {
    /// Renderer using the built-in duration tables.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_durations(config, &DURATIONS)
    }
}

impl<'t> HtmlRenderer<'t> {
    pub fn with_durations(config: RenderConfig, durations: &'t DurationTable) -> Self {
        Self { config, durations }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `document`.
    ///
    /// ## Errors
    /// Fails if timer annotations are enabled and the configured duration dialect is unknown.
    #[tracing::instrument(skip_all, fields(source_name = %document.source_name, steps = document.steps.len()))]
    pub fn render(&self, document: &Document) -> Result<String, RenderError> {
        if self.config.include_timer_seconds && !self.durations.has_dialect(&self.config.duration_dialect) {
            return Err(RenderError::UnknownDialect(self.config.duration_dialect.clone()));
        }

        let mut out = String::new();
        writeln!(out, r#"<article class="{}">"#, self.attr_class("recipe"))?;

        let metadata = document.metadata();
        if self.config.include_metadata && !metadata.is_empty() {
            writeln!(out, r#"<dl class="{}">"#, self.attr_class("metadata"))?;
            for (key, value) in &metadata {
                writeln!(out, "<dt>{}</dt><dd>{}</dd>", encode_text(key), encode_text(value))?;
            }
            writeln!(out, "</dl>")?;
        }

        writeln!(out, r#"<ol class="{}">"#, self.attr_class("steps"))?;
        for step in &document.steps {
            self.render_step(&mut out, step)?;
        }
        writeln!(out, "</ol>")?;
        writeln!(out, "</article>")?;
        Ok(out)
    }

    fn render_step(&self, out: &mut String, step: &Step) -> Result<(), RenderError> {
        if step.visible_components().next().is_none() {
            return Ok(());
        }
        write!(out, r#"<li class="{}">"#, self.attr_class("step"))?;
        for component in &step.components {
            match &component.node {
                Component::Instruction(instruction) => out.push_str(&encode_text(&instruction.text)),
                Component::Ingredient(ingredient) => self.render_ingredient(out, ingredient)?,
                Component::Cookware(cookware) => self.render_cookware(out, cookware)?,
                Component::Timer(timer) => self.render_timer(out, timer)?,
                Component::Comment(_) | Component::Metadata(_) => {}
            }
        }
        writeln!(out, "</li>")?;
        Ok(())
    }

    fn render_ingredient(&self, out: &mut String, ingredient: &Ingredient) -> fmt::Result {
        write!(out, r#"<span class="{}">"#, self.attr_class("ingredient"))?;
        for part in [&ingredient.quantity, &ingredient.unit] {
            if !part.is_empty() {
                write!(out, "{} ", encode_text(part))?;
            }
        }
        write!(out, "{}</span>", encode_text(&ingredient.name))
    }

    fn render_cookware(&self, out: &mut String, cookware: &Cookware) -> fmt::Result {
        write!(out, r#"<span class="{}">"#, self.attr_class("cookware"))?;
        if !cookware.quantity.is_empty() {
            write!(out, "{} ", encode_text(&cookware.quantity))?;
        }
        write!(out, "{}</span>", encode_text(&cookware.name))
    }

    fn render_timer(&self, out: &mut String, timer: &Timer) -> fmt::Result {
        write!(out, r#"<span class="{}""#, self.attr_class("timer"))?;
        if !timer.name.is_empty() {
            write!(out, r#" title="{}""#, encode_double_quoted_attribute(&timer.name))?;
        }
        if let Some(seconds) = self.timer_seconds(timer) {
            write!(out, r#" data-seconds="{seconds}""#)?;
        }
        write!(
            out,
            ">{} {}</span>",
            encode_text(&timer.magnitude),
            encode_text(&timer.unit)
        )
    }

    /// Approximate timer length, when annotations are on and both magnitude and unit are understood.
    fn timer_seconds(&self, timer: &Timer) -> Option<u64> {
        if !self.config.include_timer_seconds {
            return None;
        }
        let magnitude = Numeral::parse(&timer.magnitude).ok()?.to_f64();
        let unit = self.durations.lookup(&self.config.duration_dialect, &timer.unit)?;
        let seconds = magnitude * unit.approximate_duration().as_secs_f64();
        (seconds.is_finite() && seconds >= 0.0).then(|| seconds.round() as u64)
    }

    fn attr_class(&self, role: &str) -> String {
        encode_double_quoted_attribute(&self.config.class(role)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cook_syntax::parse_recipe;

    fn render(source: &str, config: RenderConfig) -> String {
        let document = parse_recipe("test.cook", source.as_bytes()).unwrap();
        HtmlRenderer::new(config).render(&document).unwrap()
    }

    #[test]
    fn test_render_recipe() {
        let source = ">> servings: 2\nBoil @water{1%l} in a #pot for ~{10%minutes}.\n\nAdd @salt & <pepper>";
        let html = render(source, RenderConfig::new().with_metadata(true));
        insta::assert_snapshot!(html.trim_end(), @r#"
        <article class="cook-recipe">
        <dl class="cook-metadata">
        <dt>servings</dt><dd>2</dd>
        </dl>
        <ol class="cook-steps">
        <li class="cook-step">Boil <span class="cook-ingredient">1 l water</span> in a <span class="cook-cookware">pot</span> for <span class="cook-timer" data-seconds="600">10 minutes</span>.</li>
        <li class="cook-step">Add <span class="cook-ingredient">salt</span> &amp; &lt;pepper&gt;</li>
        </ol>
        </article>
        "#);
    }

    #[test]
    fn test_comments_and_metadata_are_not_rendered() {
        let html = render(">> servings: 2\nStir -- gently\n", RenderConfig::new());
        assert!(!html.contains("servings"));
        assert!(!html.contains("gently"));
        assert!(html.contains(r#"<li class="cook-step">Stir </li>"#));
    }

    #[test]
    fn test_timer_title_and_dialect() {
        let config = RenderConfig::new().with_duration_dialect("sv");
        let html = render("Vila ~deg{1,5%timmar} och ~vila{2%timmar}", config);
        assert!(html.contains(r#"<span class="cook-timer" title="deg">1,5 timmar</span>"#));
        assert!(html.contains(r#"title="vila" data-seconds="7200">2 timmar</span>"#));
    }

    #[test]
    fn test_fractional_timer_and_symbolic_units() {
        let html = render("Rest ~{1/2%h}", RenderConfig::new());
        assert!(html.contains(r#"data-seconds="1800""#));
    }

    #[test]
    fn test_timer_seconds_can_be_disabled() {
        let html = render("Rest ~{10%minutes}", RenderConfig::new().with_timer_seconds(false));
        assert!(!html.contains("data-seconds"));
    }

    #[test]
    fn test_class_prefix_is_escaped() {
        let html = render("Stir", RenderConfig::new().with_class_prefix(r#"x" onclick="y"#));
        assert!(html.contains(r#"class="x&quot; onclick=&quot;ystep""#));
    }

    #[test]
    fn test_unknown_dialect() {
        let document = parse_recipe("test.cook", b"Rest ~{10%minutes}").unwrap();
        let renderer = HtmlRenderer::new(RenderConfig::new().with_duration_dialect("xx"));
        let err = renderer.render(&document).unwrap_err();
        assert_eq!(err.to_string(), "unknown duration dialect 'xx'");
    }

    #[test]
    fn test_custom_duration_table() {
        use cook_core::durations::TimeDiff;
        use std::time::Duration;

        let mut table = DurationTable::default();
        table.insert_dialect("de", &[("minuten", TimeDiff::fixed(Duration::from_secs(60)))]);
        let document = parse_recipe("test.cook", b"~{3%Minuten}").unwrap();
        let config = RenderConfig::new().with_duration_dialect("de");
        let html = HtmlRenderer::with_durations(config, &table).render(&document).unwrap();
        assert!(html.contains(r#"data-seconds="180""#));
    }
}
