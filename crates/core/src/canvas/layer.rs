//! Positioned visual elements on a canvas.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::properties::LayerProperties;

/// Discriminant of a layer; also selects the shape of its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Text,
    Image,
    Shape,
    Screenshot,
}

/// One layer of a canvas.
///
/// `id` is unique within the owning layer list (top level or one slide).
/// List order is insertion order and the default paint order; `z_index`
/// overrides it (see [`super::paint_order`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawLayer")]
pub struct LayerConfig {
    pub id: String,
    pub kind: LayerKind,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees.
    pub rotation: f64,
    pub visible: bool,
    /// Interactive editors refuse edits to locked layers; programmatic
    /// writers (seeding, whole-config updates) are not restricted here.
    pub locked: bool,
    /// In `[0, 1]`.
    pub opacity: f64,
    pub z_index: i32,
    pub properties: LayerProperties,
}

impl LayerConfig {
    /// A visible, unlocked, fully opaque layer at the origin with empty
    /// properties of the matching kind.
    pub fn new(id: impl Into<String>, kind: LayerKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            visible: true,
            locked: false,
            opacity: 1.0,
            z_index: 0,
            properties: LayerProperties::empty_for(kind),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn with_properties(mut self, properties: LayerProperties) -> Self {
        self.properties = properties;
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

/// Wire shape of a layer before its properties are interpreted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLayer {
    id: String,
    #[serde(rename = "type")]
    kind: LayerKind,
    #[serde(default)]
    name: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default = "default_opacity")]
    opacity: f64,
    #[serde(default)]
    z_index: i32,
    #[serde(default)]
    properties: Value,
}

impl From<RawLayer> for LayerConfig {
    fn from(raw: RawLayer) -> Self {
        Self {
            properties: LayerProperties::from_value(raw.kind, raw.properties),
            id: raw.id,
            kind: raw.kind,
            name: raw.name,
            x: raw.x,
            y: raw.y,
            width: raw.width,
            height: raw.height,
            rotation: raw.rotation,
            visible: raw.visible,
            locked: raw.locked,
            opacity: raw.opacity,
            z_index: raw.z_index,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayerView<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: LayerKind,
    name: &'a str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
    visible: bool,
    locked: bool,
    opacity: f64,
    properties: &'a LayerProperties,
    z_index: i32,
}

impl Serialize for LayerConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LayerView {
            id: &self.id,
            kind: self.kind,
            name: &self.name,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            visible: self.visible,
            locked: self.locked,
            opacity: self.opacity,
            properties: &self.properties,
            z_index: self.z_index,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::canvas::properties::ShapeProperties;

    #[test]
    fn reads_wire_layer() {
        let layer: LayerConfig = serde_json::from_value(json!({
            "id": "bg-1",
            "type": "shape",
            "name": "Background",
            "x": 0, "y": 0, "width": 1242, "height": 2688,
            "rotation": 0, "visible": true, "locked": true, "opacity": 1,
            "zIndex": 0,
            "properties": {"fill": "#F2F8F3", "shapeType": "rect", "position": "center"}
        }))
        .unwrap();

        assert_eq!(layer.kind, LayerKind::Shape);
        assert!(layer.locked);
        assert_eq!(layer.width, 1242.0);
        let LayerProperties::Shape(shape) = &layer.properties else {
            panic!("expected shape properties");
        };
        assert_eq!(shape.fill.as_deref(), Some("#F2F8F3"));
        assert_eq!(shape.extra["position"], "center");
    }

    #[test]
    fn writes_type_and_z_index_in_camel_case() {
        let layer = LayerConfig::new("s", LayerKind::Shape, "Dot")
            .z_index(3)
            .with_properties(LayerProperties::Shape(ShapeProperties {
                fill: Some("#fff".into()),
                ..Default::default()
            }));
        let value = serde_json::to_value(&layer).unwrap();
        assert_eq!(value["type"], "shape");
        assert_eq!(value["zIndex"], 3);
        assert_eq!(value["properties"]["fill"], "#fff");

        let back: LayerConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, layer);
    }

    #[test]
    fn missing_flags_take_editor_defaults() {
        let layer: LayerConfig =
            serde_json::from_value(json!({"id": "t", "type": "text"})).unwrap();
        assert!(layer.visible);
        assert!(!layer.locked);
        assert_eq!(layer.opacity, 1.0);
    }

    #[test]
    fn unknown_layer_type_is_rejected() {
        let result: Result<LayerConfig, _> =
            serde_json::from_value(json!({"id": "v", "type": "video"}));
        assert!(result.is_err());
    }
}
