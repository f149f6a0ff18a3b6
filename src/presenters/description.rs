//! Description Presenters - generate, filter, substitute, format
//!
//! The pipeline order is fixed. An empty or `"0"` final value omits the tag.

use std::collections::BTreeMap;

use crate::escape::esc_attr;
use crate::hooks::{self, FilterRegistry};
use crate::presentation::Presentation;
use crate::replace_vars;

use super::{DescriptionGenerator, Presenter, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`
    Property,
}

impl AttributeKind {
    fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Name => "name",
            AttributeKind::Property => "property",
        }
    }
}

/// Fixed identity of a single-value text tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionTag {
    pub presenter_name: &'static str,
    pub hook: &'static str,
    pub kind: AttributeKind,
    pub key: &'static str,
}

impl DescriptionTag {
    pub fn render(&self, value: &str) -> String {
        format!(
            r#"<meta {}="{}" content="{}" />"#,
            self.kind.as_str(),
            self.key,
            esc_attr(value)
        )
    }
}

pub const META_DESCRIPTION_TAG: DescriptionTag = DescriptionTag {
    presenter_name: "meta_description",
    hook: hooks::META_DESCRIPTION,
    kind: AttributeKind::Name,
    key: "description",
};

pub const TWITTER_DESCRIPTION_TAG: DescriptionTag = DescriptionTag {
    presenter_name: "twitter_description",
    hook: hooks::TWITTER_DESCRIPTION,
    kind: AttributeKind::Name,
    key: "twitter:description",
};

pub const OPEN_GRAPH_DESCRIPTION_TAG: DescriptionTag = DescriptionTag {
    presenter_name: "open_graph_description",
    hook: hooks::OPENGRAPH_DESCRIPTION,
    kind: AttributeKind::Property,
    key: "og:description",
};

/// Single-value tag presenter over any generator.
#[derive(Debug, Clone)]
pub struct DescriptionPresenter<G> {
    tag: DescriptionTag,
    generator: G,
}

impl<G: DescriptionGenerator> DescriptionPresenter<G> {
    pub fn new(tag: DescriptionTag, generator: G) -> Self {
        Self { tag, generator }
    }

    pub fn tag(&self) -> &DescriptionTag {
        &self.tag
    }

    /// Run the raw value through this tag's hook.
    ///
    /// A non-string callback result leaves `value` as it was.
    pub fn filter(&self, value: &str, presentation: &Presentation, filters: &FilterRegistry) -> String {
        filters.filtered_string(self.tag.hook, value, presentation)
    }

    pub fn replace_vars(&self, value: &str, presentation: &Presentation) -> String {
        replace_vars::replace(value, &self.generator.replacement_vars(presentation))
    }
}

impl<G: DescriptionGenerator> DescriptionGenerator for DescriptionPresenter<G> {
    fn generate(&self, presentation: &Presentation) -> String {
        self.generator.generate(presentation)
    }

    fn replacement_vars(&self, presentation: &Presentation) -> BTreeMap<String, String> {
        self.generator.replacement_vars(presentation)
    }
}

/// PHP-style truthiness: `""` and `"0"` both mean "no value".
fn is_falsy(value: &str) -> bool {
    value.is_empty() || value == "0"
}

impl<G: DescriptionGenerator> Presenter for DescriptionPresenter<G> {
    fn name(&self) -> &'static str {
        self.tag.presenter_name
    }

    fn present(&self, presentation: &Presentation, ctx: &RenderContext<'_>) -> String {
        let description = self.generate(presentation);
        let description = self.filter(&description, presentation, ctx.filters);
        let description = self.replace_vars(&description, presentation);

        if is_falsy(&description) {
            return String::new();
        }

        self.tag.render(&description)
    }
}

/// The page's configured meta description.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaDescription;

impl DescriptionGenerator for MetaDescription {
    fn generate(&self, presentation: &Presentation) -> String {
        presentation.meta_description.clone()
    }
}

/// Twitter description, falling back to another generator when unset.
#[derive(Debug, Clone, Default)]
pub struct TwitterDescription<F> {
    fallback: F,
}

impl<F: DescriptionGenerator> TwitterDescription<F> {
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }
}

impl<F: DescriptionGenerator> DescriptionGenerator for TwitterDescription<F> {
    fn generate(&self, presentation: &Presentation) -> String {
        if presentation.twitter_description.is_empty() {
            return self.fallback.generate(presentation);
        }
        presentation.twitter_description.clone()
    }
}

/// Open Graph description, falling back to another generator when unset.
#[derive(Debug, Clone, Default)]
pub struct OpenGraphDescription<F> {
    fallback: F,
}

impl<F: DescriptionGenerator> OpenGraphDescription<F> {
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }
}

impl<F: DescriptionGenerator> DescriptionGenerator for OpenGraphDescription<F> {
    fn generate(&self, presentation: &Presentation) -> String {
        if presentation.open_graph_description.is_empty() {
            return self.fallback.generate(presentation);
        }
        presentation.open_graph_description.clone()
    }
}

pub fn meta_description_presenter() -> DescriptionPresenter<MetaDescription> {
    DescriptionPresenter::new(META_DESCRIPTION_TAG, MetaDescription)
}

/// Twitter description backed by the meta description presenter's generator.
pub fn twitter_description_presenter(
) -> DescriptionPresenter<TwitterDescription<DescriptionPresenter<MetaDescription>>> {
    DescriptionPresenter::new(
        TWITTER_DESCRIPTION_TAG,
        TwitterDescription::new(meta_description_presenter()),
    )
}

pub fn open_graph_description_presenter(
) -> DescriptionPresenter<OpenGraphDescription<DescriptionPresenter<MetaDescription>>> {
    DescriptionPresenter::new(
        OPEN_GRAPH_DESCRIPTION_TAG,
        OpenGraphDescription::new(meta_description_presenter()),
    )
}
