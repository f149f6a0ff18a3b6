//! Presenters - One Markup Fragment Per Presenter
//!
//! A presenter either renders a well-formed tag or returns an empty string.
//! Presenters hold no per-render state.

pub mod description;
pub mod open_graph;

use std::collections::BTreeMap;

use crate::hooks::FilterRegistry;
use crate::presentation::Presentation;

pub use description::{
    meta_description_presenter, open_graph_description_presenter, twitter_description_presenter,
    AttributeKind, DescriptionPresenter, DescriptionTag, MetaDescription, OpenGraphDescription,
    TwitterDescription,
};
pub use open_graph::ImagePresenter;

/// Everything a presenter may consult besides the presentation itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub filters: &'a FilterRegistry,
}

impl<'a> RenderContext<'a> {
    pub fn new(filters: &'a FilterRegistry) -> Self {
        Self { filters }
    }
}

/// Presenter trait - renders one fragment or nothing
pub trait Presenter: Send + Sync {
    fn name(&self) -> &'static str;
    fn present(&self, presentation: &Presentation, ctx: &RenderContext<'_>) -> String;
}

/// Produces the raw, unfiltered text for a single-value tag.
///
/// Kept narrow so one presenter's generator can be injected into another as
/// its fallback.
pub trait DescriptionGenerator: Send + Sync {
    fn generate(&self, presentation: &Presentation) -> String;

    /// Variables this tag exposes to `%%name%%` placeholders.
    ///
    /// Defaults to every variable of the presentation. Return an empty map to
    /// leave placeholders untouched.
    fn replacement_vars(&self, presentation: &Presentation) -> BTreeMap<String, String> {
        presentation.replace_vars()
    }
}

impl<G: DescriptionGenerator + ?Sized> DescriptionGenerator for Box<G> {
    fn generate(&self, presentation: &Presentation) -> String {
        (**self).generate(presentation)
    }

    fn replacement_vars(&self, presentation: &Presentation) -> BTreeMap<String, String> {
        (**self).replacement_vars(presentation)
    }
}

impl<G: DescriptionGenerator + ?Sized> DescriptionGenerator for std::sync::Arc<G> {
    fn generate(&self, presentation: &Presentation) -> String {
        (**self).generate(presentation)
    }

    fn replacement_vars(&self, presentation: &Presentation) -> BTreeMap<String, String> {
        (**self).replacement_vars(presentation)
    }
}

/// The default head, in output order.
pub fn default_presenters() -> Vec<Box<dyn Presenter>> {
    vec![
        Box::new(meta_description_presenter()),
        Box::new(open_graph_description_presenter()),
        Box::new(ImagePresenter),
        Box::new(twitter_description_presenter()),
    ]
}
