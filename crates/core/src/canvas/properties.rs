//! Type-specific layer property bags.
//!
//! The set of keys a layer carries depends on its `type`. Known keys are
//! typed; anything else is kept in `extra` so documents written by newer
//! editors survive a read/write cycle untouched. A value the typed variant
//! cannot reproduce exactly (a known key set to `null`, a mistyped field)
//! is kept verbatim in [`LayerProperties::Unknown`].

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::layer::LayerKind;

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers without a fractional part, as editors send them.
fn number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *value {
        Some(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
            serializer.serialize_some(&(n as i64))
        }
        Some(n) => serializer.serialize_some(&n),
        None => serializer.serialize_none(),
    }
}

/// Properties of a `text` layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub line_height: Option<f64>,
    /// Placement hints and any other editor-defined keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties shared by `image` and `screenshot` layers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    /// Source URL or asset id from the configuration's image registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub shadow_blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub shadow_offset_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub shadow_offset_y: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Properties of a `shape` layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "number")]
    pub corner_radius: Option<f64>,
    /// `rect`, `circle` or `rounded`; not enforced here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A layer's property bag, discriminated by the layer's `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerProperties {
    Text(TextProperties),
    Image(ImageProperties),
    Shape(ShapeProperties),
    /// Raw value that does not read as the typed variant for its layer.
    Unknown(Value),
}

impl LayerProperties {
    /// Interpret a raw `properties` value for a layer of the given kind.
    ///
    /// Never fails. The typed variant is used only when it writes back the
    /// exact same value; anything else is retained as
    /// [`LayerProperties::Unknown`].
    pub fn from_value(kind: LayerKind, value: Value) -> Self {
        let typed = match kind {
            LayerKind::Text => TextProperties::deserialize(&value).map(LayerProperties::Text),
            LayerKind::Image | LayerKind::Screenshot => {
                ImageProperties::deserialize(&value).map(LayerProperties::Image)
            }
            LayerKind::Shape => ShapeProperties::deserialize(&value).map(LayerProperties::Shape),
        };
        match typed {
            Ok(props) if serde_json::to_value(&props).ok().as_ref() == Some(&value) => props,
            _ => LayerProperties::Unknown(value),
        }
    }

    /// Whether this variant may be attached to a layer of `kind`.
    pub fn fits(&self, kind: LayerKind) -> bool {
        matches!(
            (self, kind),
            (LayerProperties::Text(_), LayerKind::Text)
                | (
                    LayerProperties::Image(_),
                    LayerKind::Image | LayerKind::Screenshot
                )
                | (LayerProperties::Shape(_), LayerKind::Shape)
                | (LayerProperties::Unknown(_), _)
        )
    }

    /// The empty typed bag for a layer kind.
    pub fn empty_for(kind: LayerKind) -> Self {
        match kind {
            LayerKind::Text => LayerProperties::Text(TextProperties::default()),
            LayerKind::Image | LayerKind::Screenshot => {
                LayerProperties::Image(ImageProperties::default())
            }
            LayerKind::Shape => LayerProperties::Shape(ShapeProperties::default()),
        }
    }
}

impl Serialize for LayerProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LayerProperties::Text(p) => p.serialize(serializer),
            LayerProperties::Image(p) => p.serialize(serializer),
            LayerProperties::Shape(p) => p.serialize(serializer),
            LayerProperties::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn text_properties_keep_placement_hints() {
        let raw = json!({
            "content": "Transform Your App",
            "fontSize": 20,
            "fontWeight": "700",
            "anchorX": "center",
            "offsetY": 280
        });
        let props = LayerProperties::from_value(LayerKind::Text, raw);
        let LayerProperties::Text(text) = &props else {
            panic!("expected text properties, got {props:?}");
        };
        assert_eq!(text.content.as_deref(), Some("Transform Your App"));
        assert_eq!(text.font_size, Some(20.0));
        assert_eq!(text.extra["anchorX"], "center");

        let back = serde_json::to_value(&props).unwrap();
        assert_eq!(back["anchorX"], "center");
        assert_eq!(back["offsetY"], 280);
        assert!(back.get("color").is_none());
    }

    #[test]
    fn screenshot_uses_image_properties() {
        let props = LayerProperties::from_value(
            LayerKind::Screenshot,
            json!({"src": "", "shadow": true, "shadowBlur": 60}),
        );
        assert_matches!(props, LayerProperties::Image(ImageProperties { shadow: Some(true), .. }));
        assert!(props.fits(LayerKind::Screenshot));
        assert!(props.fits(LayerKind::Image));
        assert!(!props.fits(LayerKind::Text));
    }

    #[test]
    fn mistyped_value_falls_back_to_unknown() {
        let raw = json!({"fontSize": "twenty", "content": 7});
        let props = LayerProperties::from_value(LayerKind::Text, raw.clone());
        assert_eq!(props, LayerProperties::Unknown(raw.clone()));
        assert_eq!(serde_json::to_value(&props).unwrap(), raw);
    }

    #[test]
    fn null_known_key_round_trips() {
        let raw = json!({"color": null, "content": "Hi", "fontSize": 20});
        let props = LayerProperties::from_value(LayerKind::Text, raw.clone());
        assert_eq!(serde_json::to_value(&props).unwrap(), raw);
    }

    #[test]
    fn integer_sizes_stay_integers() {
        let raw = json!({"content": "Hi", "fontSize": 20, "lineHeight": 1.2});
        let props = LayerProperties::from_value(LayerKind::Text, raw.clone());
        assert_matches!(&props, LayerProperties::Text(t) if t.font_size == Some(20.0));
        assert_eq!(serde_json::to_value(&props).unwrap(), raw);
    }

    #[test]
    fn negative_and_fractional_numbers_round_trip() {
        let raw = json!({"shadowOffsetX": -12, "shadowOffsetY": 20.5, "borderRadius": 0});
        let props = LayerProperties::from_value(LayerKind::Image, raw.clone());
        assert_matches!(props, LayerProperties::Image(_));
        assert_eq!(serde_json::to_value(&props).unwrap(), raw);
    }

    #[test]
    fn layer_round_trip_keeps_property_bag() {
        let raw = json!({
            "id": "t", "type": "text",
            "properties": {"color": null, "content": "Hi", "fontSize": 20}
        });
        let layer: crate::canvas::LayerConfig = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back["properties"], raw["properties"]);
    }

    #[test]
    fn non_object_falls_back_to_unknown() {
        let props = LayerProperties::from_value(LayerKind::Shape, Value::Null);
        assert_eq!(props, LayerProperties::Unknown(Value::Null));
        assert!(props.fits(LayerKind::Shape));
    }
}
