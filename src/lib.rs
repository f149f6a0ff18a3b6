//! MetaTags Core - Social Sharing Head Renderer
//!
//! # The Pipeline (Fixed Order)
//! 1. Generate the raw value from the presentation
//! 2. Filter it through the named hook
//! 3. Substitute `%%name%%` variables
//! 4. Format the tag, or emit nothing when the value is empty
//!
//! Filter results are untrusted: a non-string result never replaces a string.

pub mod escape;
pub mod hashing;
pub mod hooks;
pub mod legacy;
pub mod pipeline;
pub mod presentation;
pub mod presenters;
pub mod replace_vars;
pub mod rules;

pub use hooks::FilterRegistry;
pub use hashing::{canonical_json, compute_render_fingerprint};
pub use pipeline::{HeadRenderer, PipelineError, RenderReport, RenderedHead, RenderedTag};
pub use presentation::{ImageDescriptor, Presentation};
pub use presenters::{DescriptionGenerator, ImagePresenter, Presenter, RenderContext};
pub use rules::{FilterRule, RuleAction, RuleSet};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MIN_RULE_ENGINE_VERSION: &str = "1.0.0";
