//! Deprecated image collection API.
//!
//! Kept so older integrations keep running. Every call logs one deprecation
//! warning and returns a safe default. Nothing else in the crate uses this.

use crate::pipeline::HeadRenderer;
use crate::presentation::ImageDescriptor;

pub const DEPRECATED_SINCE: &str = "1.0.0";
pub const REPLACEMENT: &str = "presenters::ImagePresenter";

fn deprecated_function(method: &str) {
    tracing::warn!(
        method,
        since = DEPRECATED_SINCE,
        replacement = REPLACEMENT,
        "{} is deprecated",
        method
    );
}

/// Image attachment as the old API accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyAttachment {
    Url(String),
    Image(ImageDescriptor),
}

#[deprecated(since = "1.0.0", note = "use presenters::ImagePresenter")]
#[derive(Debug)]
pub struct OpenGraphImage {
    _private: (),
}

#[allow(deprecated)]
impl OpenGraphImage {
    /// Image ID used when the image is external.
    pub const EXTERNAL_IMAGE_ID: &'static str = "-1";

    fn shim() -> Self {
        Self { _private: () }
    }

    pub fn new(_image: Option<&str>, _opengraph: Option<&HeadRenderer>) -> Self {
        deprecated_function("OpenGraphImage::new");
        Self::shim()
    }

    pub fn show(&self) {
        deprecated_function("OpenGraphImage::show");
    }

    pub fn get_images(&self) -> Vec<ImageDescriptor> {
        deprecated_function("OpenGraphImage::get_images");
        vec![]
    }

    pub fn has_images(&self) -> bool {
        deprecated_function("OpenGraphImage::has_images");
        false
    }

    pub fn add_image(&mut self, _attachment: LegacyAttachment) {
        deprecated_function("OpenGraphImage::add_image");
    }

    /// Always -1: nothing is looked up anymore.
    pub fn add_image_by_url(&mut self, _url: &str) -> i64 {
        deprecated_function("OpenGraphImage::add_image_by_url");
        -1
    }

    pub fn add_image_by_id(&mut self, _attachment_id: u64) {
        deprecated_function("OpenGraphImage::add_image_by_id");
    }
}

#[allow(deprecated)]
impl Default for OpenGraphImage {
    fn default() -> Self {
        deprecated_function("OpenGraphImage::default");
        Self::shim()
    }
}
