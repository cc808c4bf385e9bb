//! Factory functions for creating test data.
//!
//! Provides documents, setup records and small glTF containers used by unit
//! and integration tests.

use serde_json::{json, Value};
use shared::*;

// ── Documents ───────────────────────────────────────────────────

/// Document with `count` scenes and no setup records.
pub fn empty_document(count: usize) -> Document {
    Document::with_scenes(count)
}

/// Document whose scene `scene_index` references `setup`.
pub fn document_with_setup(count: usize, scene_index: usize, setup: Setup) -> Document {
    let mut document = Document::with_scenes(count);
    document.setups = Some(vec![setup]);
    document.scenes[scene_index].setup = Some(0);
    document
}

// ── Setup records ───────────────────────────────────────────────

/// Setup record with only grid data.
pub fn grid_setup(visible: bool, lines: f64) -> Setup {
    Setup {
        grid: Some(GridData {
            visible,
            color: [0.5, 0.7, 0.8],
            lines,
        }),
        ..Default::default()
    }
}

/// Slicer sub-document.
pub fn slicer_data(enabled: bool, axis: SliceAxis, position: f64) -> SlicerData {
    SlicerData {
        enabled,
        axis,
        inverted: false,
        position,
        color: [0.0, 0.61, 0.87],
    }
}

/// Tour with one step per id.
pub fn tour(title: &str, step_ids: &[&str]) -> TourData {
    TourData {
        title: title.to_string(),
        lead: String::new(),
        tags: Vec::new(),
        steps: step_ids
            .iter()
            .map(|id| TourStep {
                id: id.to_string(),
                title: id.to_uppercase(),
            })
            .collect(),
    }
}

// ── glTF containers ─────────────────────────────────────────────

/// Three positions of the test triangle: (0,0,0), (1,0,0), (0,2,0)
const TRIANGLE_BUFFER: &str =
    "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAAEAAAAAA";

/// 1x1 RGBA PNG
const PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn triangle_value() -> Value {
    json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "name": "Root", "nodes": [0] }],
        "nodes": [{ "name": "Triangle", "mesh": 0, "translation": [1.0, 2.0, 3.0] }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "material": 0 }] }],
        "materials": [{
            "name": "Clay",
            "pbrMetallicRoughness": {
                "baseColorFactor": [1.0, 0.5, 0.25, 1.0],
                "metallicFactor": 1.0,
                "roughnessFactor": 0.1
            }
        }],
        "buffers": [{ "byteLength": 36, "uri": TRIANGLE_BUFFER }],
        "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
        "accessors": [{
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 2.0, 0.0]
        }]
    })
}

/// Single-triangle `.gltf` with an untextured metallic-roughness material.
pub fn triangle_gltf() -> String {
    triangle_value().to_string()
}

/// Same triangle with a base colour texture.
pub fn textured_triangle_gltf() -> String {
    let mut gltf = triangle_value();
    gltf["materials"][0]["pbrMetallicRoughness"]["baseColorTexture"] = json!({ "index": 0 });
    gltf["textures"] = json!([{ "source": 0 }]);
    gltf["images"] = json!([{ "uri": PIXEL_PNG }]);
    gltf.to_string()
}

/// Same triangle with an unlit material.
pub fn unlit_triangle_gltf() -> String {
    let mut gltf = triangle_value();
    gltf["extensionsUsed"] = json!(["KHR_materials_unlit"]);
    gltf["materials"][0]["extensions"] = json!({ "KHR_materials_unlit": {} });
    gltf.to_string()
}

/// Valid container without any scene.
pub fn sceneless_gltf() -> String {
    json!({ "asset": { "version": "2.0" } }).to_string()
}
