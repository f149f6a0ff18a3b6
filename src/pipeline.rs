//! Head Renderer - Single Entry Point
//!
//! Runs each presenter against one presentation and joins what they emit.
//! Rendering itself never fails; only report building can.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::hashing::compute_render_fingerprint;
use crate::hooks::FilterRegistry;
use crate::presentation::Presentation;
use crate::presenters::{default_presenters, Presenter, RenderContext};
use crate::ENGINE_VERSION;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    #[error("Invalid rule {0}: {1}")]
    InvalidRule(String, String),

    #[error("Rule {0} requires engine >= {1}, current is {2}")]
    EngineVersionMismatch(String, String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Separator between the fragments of different presenters.
pub const HEAD_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTag {
    pub presenter: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedHead {
    pub tags: Vec<RenderedTag>,
    pub html: String,
}

impl RenderedHead {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    pub id: String,
    pub engine_version: String,
    pub rendered_at: DateTime<Utc>,
    pub fingerprint: String,
    pub head: RenderedHead,
}

/// The head renderer - presenters in output order plus the filters they consult
pub struct HeadRenderer {
    filters: FilterRegistry,
    presenters: Vec<Box<dyn Presenter>>,
}

impl HeadRenderer {
    pub fn new(filters: FilterRegistry) -> Self {
        Self::with_presenters(filters, default_presenters())
    }

    pub fn with_presenters(filters: FilterRegistry, presenters: Vec<Box<dyn Presenter>>) -> Self {
        Self { filters, presenters }
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterRegistry {
        &mut self.filters
    }

    pub fn presenter_names(&self) -> Vec<&'static str> {
        self.presenters.iter().map(|p| p.name()).collect()
    }

    /// Render every presenter; empty fragments are dropped.
    pub fn render(&self, presentation: &Presentation) -> RenderedHead {
        let ctx = RenderContext::new(&self.filters);

        let tags: Vec<RenderedTag> = self
            .presenters
            .iter()
            .filter_map(|presenter| {
                let html = presenter.present(presentation, &ctx);
                tracing::debug!(presenter = presenter.name(), emitted = !html.is_empty(), "presented");
                if html.is_empty() {
                    None
                } else {
                    Some(RenderedTag {
                        presenter: presenter.name().to_string(),
                        html,
                    })
                }
            })
            .collect();

        let html = tags
            .iter()
            .map(|t| t.html.as_str())
            .collect::<Vec<_>>()
            .join(HEAD_SEPARATOR);

        RenderedHead { tags, html }
    }

    /// Render and wrap the result with audit metadata.
    pub fn render_report(&self, presentation: &Presentation) -> Result<RenderReport, PipelineError> {
        let head = self.render(presentation);
        let fingerprint = compute_render_fingerprint(presentation, &head.html, ENGINE_VERSION)?;

        Ok(RenderReport {
            id: Uuid::new_v4().to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            rendered_at: Utc::now(),
            fingerprint,
            head,
        })
    }
}

impl Default for HeadRenderer {
    fn default() -> Self {
        Self::new(FilterRegistry::default())
    }
}
