//! Presentation - Read Model For One Render
//!
//! Owned by the caller, borrowed by presenters for a single render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One image candidate for the page. Order in the presentation is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// SEO attributes of a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub open_graph_description: String,
    #[serde(default)]
    pub twitter_description: String,
    #[serde(default)]
    pub open_graph_images: Vec<ImageDescriptor>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

pub const DEFAULT_SEPARATOR: &str = "-";

impl Presentation {
    /// Variables available to `%%name%%` placeholders.
    ///
    /// Built-in names win over `extra` entries of the same name.
    pub fn replace_vars(&self) -> BTreeMap<String, String> {
        let mut vars = self.extra.clone();
        vars.insert("title".to_string(), self.title.clone());
        vars.insert("sitename".to_string(), self.site_name.clone());
        vars.insert(
            "sep".to_string(),
            self.separator
                .clone()
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        );
        vars.insert("excerpt".to_string(), self.excerpt.clone());
        vars
    }

    pub fn first_image(&self) -> Option<&ImageDescriptor> {
        self.open_graph_images.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let p: Presentation = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(p.title, "Hello");
        assert!(p.open_graph_images.is_empty());
        assert!(p.separator.is_none());
    }

    #[test]
    fn test_image_dimensions_optional() {
        let p: Presentation = serde_json::from_str(
            r#"{"openGraphImages": [{"url": "a.jpg"}, {"url": "b.jpg", "width": 10, "height": 20}]}"#,
        )
        .unwrap();
        assert_eq!(p.open_graph_images[0], ImageDescriptor::new("a.jpg"));
        assert_eq!(
            p.open_graph_images[1],
            ImageDescriptor::new("b.jpg").with_size(10, 20)
        );
        assert_eq!(p.first_image().map(|i| i.url.as_str()), Some("a.jpg"));
    }

    #[test]
    fn test_replace_vars_builtins_override_extra() {
        let mut p = Presentation {
            title: "Post".to_string(),
            ..Default::default()
        };
        p.extra.insert("title".to_string(), "shadowed".to_string());
        p.extra.insert("category".to_string(), "News".to_string());

        let vars = p.replace_vars();
        assert_eq!(vars["title"], "Post");
        assert_eq!(vars["category"], "News");
        assert_eq!(vars["sep"], DEFAULT_SEPARATOR);
        assert_eq!(vars["sitename"], "");
    }
}
