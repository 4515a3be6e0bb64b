//! Canonical default templates.
//!
//! Produced on demand by [`default_templates`]; only the catalog's seed
//! operation calls it.

use serde_json::{json, Map, Value};

use crate::canvas::{
    default_export_sizes, CanvasConfig, Configuration, ImageProperties, LayerConfig, LayerKind,
    LayerProperties, ShapeProperties, SlideData, TextProperties,
};
use crate::platform::Platform;

/// Number of templates in the canonical set.
pub const DEFAULT_TEMPLATE_COUNT: usize = 3;

/// A template definition before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTemplate {
    pub name: String,
    pub platform: Platform,
    pub category: String,
    pub thumbnail: String,
    pub json_config: Configuration,
}

/// The canonical default template set, newest-looking first.
pub fn default_templates() -> Vec<SeedTemplate> {
    vec![minimal_dark(), bold_gradient(), material_clean()]
}

fn extra(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn canvas(width: u32, height: u32, background: &str) -> CanvasConfig {
    CanvasConfig {
        width,
        height,
        background_color: background.to_string(),
    }
}

fn background(id: &str, width: u32, height: u32, fill: &str) -> LayerConfig {
    LayerConfig::new(id, LayerKind::Shape, "Background")
        .sized(f64::from(width), f64::from(height))
        .locked()
        .with_properties(LayerProperties::Shape(ShapeProperties {
            fill: Some(fill.to_string()),
            stroke: Some(String::new()),
            stroke_width: Some(0.0),
            corner_radius: Some(0.0),
            shape_type: Some("rect".to_string()),
            extra: extra(json!({"position": "center", "anchorX": "center", "anchorY": "center"})),
        }))
}

fn headline(id: &str, content: &str, x: f64, y: f64, size: f64, color: &str) -> LayerConfig {
    LayerConfig::new(id, LayerKind::Text, "Title")
        .at(x, y)
        .sized(1000.0, 100.0)
        .z_index(10)
        .with_properties(LayerProperties::Text(TextProperties {
            content: Some(content.to_string()),
            font_family: Some("Inter".to_string()),
            font_size: Some(size),
            font_weight: Some("700".to_string()),
            color: Some(color.to_string()),
            align: Some("center".to_string()),
            line_height: Some(1.2),
            extra: extra(json!({
                "position": "top",
                "anchorX": "center",
                "anchorY": "top",
                "offsetY": y
            })),
        }))
}

fn screenshot(id: &str, x: f64, y: f64, width: f64, height: f64, offset_y: f64) -> LayerConfig {
    LayerConfig::new(id, LayerKind::Screenshot, "App Screenshot")
        .at(x, y)
        .sized(width, height)
        .z_index(5)
        .with_properties(LayerProperties::Image(ImageProperties {
            src: Some(String::new()),
            placeholder: Some("Drop screenshot here".to_string()),
            border_radius: Some(48.0),
            shadow: Some(true),
            shadow_blur: Some(60.0),
            shadow_color: Some("rgba(0,0,0,0.25)".to_string()),
            shadow_offset_x: Some(0.0),
            shadow_offset_y: Some(20.0),
            extra: extra(json!({
                "position": "bottom-overflow",
                "anchorX": "center",
                "anchorY": "top",
                "offsetY": offset_y,
                "scale": 1.0
            })),
        }))
}

fn minimal_dark() -> SeedTemplate {
    let layers = vec![
        background("bg-1", 1242, 2688, "#F2F8F3"),
        headline("headline-1", "Transform Your App", 621.0, 280.0, 20.0, "#1A1A1A"),
        LayerConfig::new("border-1", LayerKind::Shape, "Accent Line")
            .at(621.0, 420.0)
            .sized(120.0, 6.0)
            .z_index(10)
            .with_properties(LayerProperties::Shape(ShapeProperties {
                fill: Some("#2FC88D".to_string()),
                stroke: Some(String::new()),
                stroke_width: Some(0.0),
                corner_radius: Some(3.0),
                shape_type: Some("rect".to_string()),
                extra: extra(json!({
                    "position": "top",
                    "anchorX": "center",
                    "anchorY": "top",
                    "offsetY": 420
                })),
            })),
        screenshot("screenshot-1", 621.0, 1600.0, 900.0, 1900.0, 520.0),
    ];

    SeedTemplate {
        name: "Minimal Dark".to_string(),
        platform: Platform::Both,
        category: "minimal".to_string(),
        thumbnail: "/templates/minimal-dark.png".to_string(),
        json_config: Configuration {
            canvas: canvas(1242, 2688, "#F2F8F3"),
            layers,
            images: Vec::new(),
            slides: None,
            exports: Some(default_export_sizes()),
        },
    }
}

fn bold_gradient() -> SeedTemplate {
    let slide = |id: &str, title: &str| SlideData {
        id: id.to_string(),
        canvas: canvas(1290, 2796, "linear-gradient(180deg, #6A11CB 0%, #2575FC 100%)"),
        layers: vec![
            headline("headline-1", title, 645.0, 240.0, 28.0, "#FFFFFF"),
            screenshot("screenshot-1", 645.0, 1500.0, 950.0, 2000.0, 480.0),
        ],
    };
    let slides = vec![
        slide("slide-1", "Plan Your Day"),
        slide("slide-2", "Track Every Habit"),
        slide("slide-3", "Share Your Progress"),
    ];
    let first = &slides[0];

    SeedTemplate {
        name: "Bold Gradient".to_string(),
        platform: Platform::Ios,
        category: "gradient".to_string(),
        thumbnail: "/templates/bold-gradient.png".to_string(),
        json_config: Configuration {
            canvas: first.canvas.clone(),
            layers: first.layers.clone(),
            images: Vec::new(),
            slides: Some(slides),
            exports: Some(
                default_export_sizes()
                    .into_iter()
                    .filter(|e| e.platform == Platform::Ios)
                    .collect(),
            ),
        },
    }
}

fn material_clean() -> SeedTemplate {
    let layers = vec![
        background("bg-1", 1080, 1920, "#FFFFFF"),
        headline("headline-1", "Built for Android", 540.0, 180.0, 24.0, "#202124"),
        screenshot("screenshot-1", 540.0, 1150.0, 760.0, 1500.0, 380.0),
    ];

    SeedTemplate {
        name: "Material Clean".to_string(),
        platform: Platform::Android,
        category: "minimal".to_string(),
        thumbnail: "/templates/material-clean.png".to_string(),
        json_config: Configuration {
            canvas: canvas(1080, 1920, "#FFFFFF"),
            layers,
            images: Vec::new(),
            slides: None,
            exports: Some(
                default_export_sizes()
                    .into_iter()
                    .filter(|e| e.platform == Platform::Android)
                    .collect(),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_constant() {
        assert_eq!(default_templates().len(), DEFAULT_TEMPLATE_COUNT);
    }

    #[test]
    fn every_default_template_is_valid() {
        for template in default_templates() {
            template
                .json_config
                .validate()
                .unwrap_or_else(|e| panic!("{} is invalid: {e}", template.name));
        }
    }

    #[test]
    fn minimal_dark_targets_both_with_headline() {
        let templates = default_templates();
        let minimal = &templates[0];
        assert_eq!(minimal.platform, Platform::Both);
        let headline = minimal
            .json_config
            .layers
            .iter()
            .find(|l| l.kind == LayerKind::Text)
            .expect("headline layer");
        let LayerProperties::Text(text) = &headline.properties else {
            panic!("headline should carry text properties");
        };
        assert_eq!(text.content.as_deref(), Some("Transform Your App"));
    }

    #[test]
    fn repeated_calls_produce_equal_values() {
        assert_eq!(default_templates(), default_templates());
    }
}
