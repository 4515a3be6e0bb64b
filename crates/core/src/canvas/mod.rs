//! The configuration model shared by templates and projects.
//!
//! A [`Configuration`] is a plain value: cloning it is a full structural
//! copy, so a project cloned from a template never aliases the template's
//! layers.

mod layer;
mod properties;

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use layer::{LayerConfig, LayerKind};
pub use properties::{ImageProperties, LayerProperties, ShapeProperties, TextProperties};

use crate::error::CoreError;
use crate::platform::Platform;

/// Id given to the single slide synthesised from a legacy configuration.
pub const LEGACY_SLIDE_ID: &str = "main";

/// Canvas dimensions and background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Opaque to the backend (hex, rgba(), gradient...).
    pub background_color: String,
}

/// Entry of the flat image registry referenced by layer properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: String,
    pub url: String,
    pub name: String,
}

/// One screen of a multi-slide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    pub id: String,
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

/// A named output size used by the export renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSize {
    pub name: String,
    pub platform: Platform,
    pub width: u32,
    pub height: u32,
}

/// Canvas, layers, assets and optional slides/exports.
///
/// When `slides` is present it is authoritative; the top-level
/// `canvas`/`layers` pair is then only a single-slide fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
    #[serde(default)]
    pub images: Vec<ImageAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<SlideData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<Vec<ExportSize>>,
}

/// Configuration as stored on a template.
pub type TemplateConfig = Configuration;

/// Configuration as stored on a project.
pub type ProjectConfig = Configuration;

impl Configuration {
    /// An empty single-slide configuration.
    pub fn blank(canvas: CanvasConfig) -> Self {
        Self {
            canvas,
            layers: Vec::new(),
            images: Vec::new(),
            slides: None,
            exports: None,
        }
    }

    /// Whether the slide list is the authority for this configuration.
    pub fn is_multi_slide(&self) -> bool {
        self.slides.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// The slides to render: `slides` when present and non-empty, otherwise
    /// one slide built from the top-level canvas and layers.
    pub fn effective_slides(&self) -> Cow<'_, [SlideData]> {
        match &self.slides {
            Some(slides) if !slides.is_empty() => Cow::Borrowed(slides.as_slice()),
            _ => Cow::Owned(vec![SlideData {
                id: LEGACY_SLIDE_ID.to_string(),
                canvas: self.canvas.clone(),
                layers: self.layers.clone(),
            }]),
        }
    }

    /// Look up a registered image. A dangling reference is not an error.
    pub fn image(&self, id: &str) -> Option<&ImageAsset> {
        self.images.iter().find(|img| img.id == id)
    }

    /// Structural validation. Geometry is not checked beyond positive
    /// canvas and export dimensions.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_canvas("canvas", &self.canvas)?;
        validate_layers("layers", &self.layers)?;

        if let Some(slides) = &self.slides {
            let mut seen = HashSet::new();
            for slide in slides {
                if slide.id.trim().is_empty() {
                    return Err(CoreError::InvalidArgument(
                        "slide id must not be empty".to_string(),
                    ));
                }
                if !seen.insert(slide.id.as_str()) {
                    return Err(CoreError::InvalidArgument(format!(
                        "duplicate slide id '{}'",
                        slide.id
                    )));
                }
                let ctx = format!("slide '{}'", slide.id);
                validate_canvas(&ctx, &slide.canvas)?;
                validate_layers(&ctx, &slide.layers)?;
            }
        }

        if let Some(exports) = &self.exports {
            for export in exports {
                if export.name.trim().is_empty() {
                    return Err(CoreError::InvalidArgument(
                        "export name must not be empty".to_string(),
                    ));
                }
                if export.width == 0 || export.height == 0 {
                    return Err(CoreError::InvalidArgument(format!(
                        "export '{}' must have positive dimensions",
                        export.name
                    )));
                }
            }
        }

        Ok(())
    }
}

fn validate_canvas(ctx: &str, canvas: &CanvasConfig) -> Result<(), CoreError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(CoreError::InvalidArgument(format!(
            "{ctx}: canvas width and height must be positive"
        )));
    }
    Ok(())
}

fn validate_layers(ctx: &str, layers: &[LayerConfig]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for layer in layers {
        if layer.id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(format!(
                "{ctx}: layer id must not be empty"
            )));
        }
        if !seen.insert(layer.id.as_str()) {
            return Err(CoreError::InvalidArgument(format!(
                "{ctx}: duplicate layer id '{}'",
                layer.id
            )));
        }
        if !(0.0..=1.0).contains(&layer.opacity) {
            return Err(CoreError::InvalidArgument(format!(
                "{ctx}: layer '{}' opacity must be within [0, 1]",
                layer.id
            )));
        }
        if !layer.properties.fits(layer.kind) {
            return Err(CoreError::InvalidArgument(format!(
                "{ctx}: layer '{}' properties do not match its type",
                layer.id
            )));
        }
    }
    Ok(())
}

/// Layers in paint order: ascending `z_index`, ties in list order.
pub fn paint_order(layers: &[LayerConfig]) -> Vec<&LayerConfig> {
    let mut ordered: Vec<&LayerConfig> = layers.iter().collect();
    ordered.sort_by_key(|layer| layer.z_index);
    ordered
}

/// App-store export presets offered to every template.
pub fn default_export_sizes() -> Vec<ExportSize> {
    let size = |name: &str, platform, width, height| ExportSize {
        name: name.to_string(),
        platform,
        width,
        height,
    };
    vec![
        size("iPhone 6.7\"", Platform::Ios, 1290, 2796),
        size("iPhone 6.5\"", Platform::Ios, 1242, 2688),
        size("iPhone 5.5\"", Platform::Ios, 1242, 2208),
        size("iPad Pro 12.9\"", Platform::Ios, 2048, 2732),
        size("Android Phone", Platform::Android, 1080, 1920),
        size("Android Tablet", Platform::Android, 1200, 1920),
    ]
}
