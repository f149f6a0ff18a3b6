//! Open Graph image tags.
//!
//! Only the first image descriptor is rendered.

use crate::escape::esc_attr;
use crate::hooks::{self, FilterRegistry};
use crate::presentation::{ImageDescriptor, Presentation};

use super::{Presenter, RenderContext};

/// Separator between the tags of one image.
pub const TAG_SEPARATOR: &str = "\n\t";

#[derive(Debug, Clone, Copy, Default)]
pub struct ImagePresenter;

impl ImagePresenter {
    /// Run the image URL through `wpseo_opengraph_image`.
    ///
    /// Any non-string result is discarded and the original URL kept.
    pub fn filter(
        &self,
        image: &ImageDescriptor,
        presentation: &Presentation,
        filters: &FilterRegistry,
    ) -> ImageDescriptor {
        ImageDescriptor {
            url: filters.filtered_string(hooks::OPENGRAPH_IMAGE, &image.url, presentation),
            ..image.clone()
        }
    }

    fn tag(property: &str, content: &str) -> String {
        format!(
            r#"<meta property="{}" content="{}" />"#,
            property,
            esc_attr(content)
        )
    }
}

impl Presenter for ImagePresenter {
    fn name(&self) -> &'static str {
        "open_graph_image"
    }

    fn present(&self, presentation: &Presentation, ctx: &RenderContext<'_>) -> String {
        let Some(image) = presentation.first_image() else {
            return String::new();
        };

        let image = self.filter(image, presentation, ctx.filters);
        if image.url.is_empty() {
            return String::new();
        }

        // No separate secure URL exists in the data model; both carry the same value.
        let mut tags = vec![
            Self::tag("og:image", &image.url),
            Self::tag("og:image:secure_url", &image.url),
        ];

        if let Some(width) = image.width {
            tags.push(Self::tag("og:image:width", &width.to_string()));
        }
        if let Some(height) = image.height {
            tags.push(Self::tag("og:image:height", &height.to_string()));
        }

        tags.join(TAG_SEPARATOR)
    }
}
