//! Contract Invariant Tests
//!
//! These tests verify the rendering guarantees consumers depend on.

use metatags_core::{
    hooks::{self, FilterRegistry},
    presenters::{twitter_description_presenter, ImagePresenter, Presenter, RenderContext},
    HeadRenderer, ImageDescriptor, Presentation, RuleSet,
};
use serde_json::json;

const EXPECTED_IMAGE_TAGS: &str = "<meta property=\"og:image\" content=\"https://example.com/image.jpg\" />\n\t<meta property=\"og:image:secure_url\" content=\"https://example.com/image.jpg\" />\n\t<meta property=\"og:image:width\" content=\"100\" />\n\t<meta property=\"og:image:height\" content=\"100\" />";

fn image_presentation() -> Presentation {
    Presentation {
        open_graph_images: vec![ImageDescriptor::new("https://example.com/image.jpg").with_size(100, 100)],
        ..Default::default()
    }
}

fn present_image(presentation: &Presentation, filters: &FilterRegistry) -> String {
    ImagePresenter.present(presentation, &RenderContext::new(filters))
}

#[test]
fn invariant_no_images_renders_nothing() {
    let presentation = Presentation {
        open_graph_images: vec![],
        ..Default::default()
    };

    assert_eq!(present_image(&presentation, &FilterRegistry::new()), "");
}

#[test]
fn invariant_no_images_skips_filters() {
    let mut filters = FilterRegistry::new();
    filters.add_filter(hooks::OPENGRAPH_IMAGE, |_, _| panic!("filter must not run without images"));

    assert_eq!(present_image(&Presentation::default(), &filters), "");
}

#[test]
fn invariant_image_tag_order_and_format() {
    assert_eq!(
        present_image(&image_presentation(), &FilterRegistry::new()),
        EXPECTED_IMAGE_TAGS
    );
}

#[test]
fn invariant_non_string_filter_result_discarded() {
    let presentation = Presentation::default();
    let mut filters = FilterRegistry::new();
    filters.add_filter(hooks::OPENGRAPH_IMAGE, |value, _| {
        assert_eq!(value, json!("image.jpg"));
        json!(false)
    });

    let image = ImagePresenter.filter(&ImageDescriptor::new("image.jpg"), &presentation, &filters);
    assert_eq!(image.url, "image.jpg");
}

#[test]
fn invariant_string_filter_result_used() {
    let presentation = Presentation::default();
    let mut filters = FilterRegistry::new();
    filters.add_filter(hooks::OPENGRAPH_IMAGE, |_, _| json!("filtered_image.jpg"));

    let image = ImagePresenter.filter(&ImageDescriptor::new("image.jpg"), &presentation, &filters);
    assert_eq!(image.url, "filtered_image.jpg");
}

#[test]
fn invariant_filtered_url_flows_into_both_image_tags() {
    let mut filters = FilterRegistry::new();
    filters.add_filter(hooks::OPENGRAPH_IMAGE, |_, _| json!("https://cdn.example.com/x.jpg"));

    let out = present_image(&image_presentation(), &filters);
    assert_eq!(out.matches("https://cdn.example.com/x.jpg").count(), 2);
    assert!(!out.contains("https://example.com/image.jpg"));
}

#[test]
fn invariant_render_is_idempotent() {
    let mut filters = FilterRegistry::new();
    filters.add_filter(hooks::OPENGRAPH_IMAGE, |v, _| {
        json!(format!("{}?v=2", v.as_str().unwrap_or_default()))
    });
    filters.add_filter(hooks::TWITTER_DESCRIPTION, |_, _| json!("%%title%%"));

    let mut presentation = image_presentation();
    presentation.title = "Same".to_string();

    let renderer = HeadRenderer::new(filters);
    let first = renderer.render(&presentation);
    let second = renderer.render(&presentation);
    assert_eq!(first, second);

    let r1 = renderer.render_report(&presentation).unwrap();
    let r2 = renderer.render_report(&presentation).unwrap();
    assert_eq!(r1.fingerprint, r2.fingerprint);
}

#[test]
fn invariant_missing_dimensions_omitted() {
    let presentation = Presentation {
        open_graph_images: vec![ImageDescriptor::new("https://example.com/image.jpg")],
        ..Default::default()
    };

    let out = present_image(&presentation, &FilterRegistry::new());
    assert_eq!(
        out,
        "<meta property=\"og:image\" content=\"https://example.com/image.jpg\" />\n\t<meta property=\"og:image:secure_url\" content=\"https://example.com/image.jpg\" />"
    );
    assert!(!out.contains("og:image:width"));
    assert!(!out.contains("content=\"\""));
}

#[test]
fn invariant_width_without_height() {
    let mut image = ImageDescriptor::new("a.jpg");
    image.width = Some(640);
    let presentation = Presentation {
        open_graph_images: vec![image],
        ..Default::default()
    };

    let out = present_image(&presentation, &FilterRegistry::new());
    assert!(out.ends_with("<meta property=\"og:image:width\" content=\"640\" />"));
    assert!(!out.contains("og:image:height"));
}

#[test]
fn invariant_twitter_description_fallback_chain() {
    let presentation = Presentation {
        meta_description: "Read about %%title%%".to_string(),
        title: "Rust".to_string(),
        ..Default::default()
    };

    let out = twitter_description_presenter()
        .present(&presentation, &RenderContext::new(&FilterRegistry::new()));
    assert_eq!(out, r#"<meta name="twitter:description" content="Read about Rust" />"#);
}

#[test]
fn invariant_registries_are_isolated() {
    let mut filtered = FilterRegistry::new();
    filtered.add_filter(hooks::OPENGRAPH_IMAGE, |_, _| json!(""));

    assert_eq!(present_image(&image_presentation(), &filtered), "");
    assert_eq!(
        present_image(&image_presentation(), &FilterRegistry::new()),
        EXPECTED_IMAGE_TAGS
    );
}

#[test]
fn invariant_rule_replacing_with_non_string_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bad-image.json"),
        r#"{"id": "bad-image", "hook": "wpseo_opengraph_image", "action": {"type": "replace", "value": false}}"#,
    )
    .unwrap();

    let rules = RuleSet::load_from_dir(dir.path()).unwrap();
    assert_eq!(rules.list().len(), 1);

    let mut filters = FilterRegistry::new();
    rules.install(&mut filters);
    assert_eq!(present_image(&image_presentation(), &filters), EXPECTED_IMAGE_TAGS);
}
