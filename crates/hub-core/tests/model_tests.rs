// Host-side tests for the binary glTF reader, driven by synthetic
// containers built in memory.

use byteorder::{LittleEndian, WriteBytesExt};
use hub_core::{compute_normals, parse_glb, ModelError};

fn build_glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let mut bin_bytes = bin.to_vec();
    while bin_bytes.len() % 4 != 0 {
        bin_bytes.push(0);
    }

    let total = 12 + 8 + json_bytes.len() + 8 + bin_bytes.len();
    let mut out = Vec::with_capacity(total);
    out.write_u32::<LittleEndian>(0x4654_6C67).unwrap(); // "glTF"
    out.write_u32::<LittleEndian>(2).unwrap();
    out.write_u32::<LittleEndian>(total as u32).unwrap();
    out.write_u32::<LittleEndian>(json_bytes.len() as u32).unwrap();
    out.write_u32::<LittleEndian>(0x4E4F_534A).unwrap(); // JSON
    out.extend_from_slice(&json_bytes);
    out.write_u32::<LittleEndian>(bin_bytes.len() as u32).unwrap();
    out.write_u32::<LittleEndian>(0x004E_4942).unwrap(); // BIN
    out.extend_from_slice(&bin_bytes);
    out
}

/// One CCW triangle in the XY plane, positions + u16 indices, no normals.
fn triangle_glb() -> Vec<u8> {
    let json = r#"{
        "asset": {"version": "2.0"},
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}, "indices": 1}]}],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3"},
            {"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}
        ],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 36},
            {"buffer": 0, "byteOffset": 36, "byteLength": 6}
        ],
        "buffers": [{"byteLength": 44}]
    }"#;
    let mut bin = Vec::new();
    for v in [
        [0.0_f32, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
    ] {
        for c in v {
            bin.write_f32::<LittleEndian>(c).unwrap();
        }
    }
    for i in [0_u16, 1, 2] {
        bin.write_u16::<LittleEndian>(i).unwrap();
    }
    build_glb(json, &bin)
}

#[test]
fn parses_a_minimal_triangle() {
    let mesh = parse_glb(&triangle_glb()).unwrap();
    assert_eq!(mesh.positions.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.positions[1], [1.0, 0.0, 0.0]);
}

#[test]
fn missing_normals_are_reconstructed() {
    let mesh = parse_glb(&triangle_glb()).unwrap();
    assert_eq!(mesh.normals.len(), 3);
    // CCW triangle in XY faces +Z
    for n in &mesh.normals {
        assert!((n[0]).abs() < 1e-6);
        assert!((n[1]).abs() < 1e-6);
        assert!((n[2] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = triangle_glb();
    bytes[0] = b'X';
    assert!(matches!(parse_glb(&bytes), Err(ModelError::BadMagic)));
}

#[test]
fn rejects_unsupported_version() {
    let mut bytes = triangle_glb();
    bytes[4] = 1;
    assert!(matches!(
        parse_glb(&bytes),
        Err(ModelError::UnsupportedVersion(1))
    ));
}

#[test]
fn rejects_truncated_container() {
    let bytes = triangle_glb();
    let cut = &bytes[..10];
    assert!(matches!(parse_glb(cut), Err(ModelError::Truncated)));
}

#[test]
fn missing_position_attribute_is_an_error() {
    let json = r#"{
        "asset": {"version": "2.0"},
        "meshes": [{"primitives": [{"attributes": {}}]}],
        "accessors": [],
        "bufferViews": [],
        "buffers": [{"byteLength": 0}]
    }"#;
    let bytes = build_glb(json, &[]);
    assert!(matches!(
        parse_glb(&bytes),
        Err(ModelError::Missing("POSITION attribute"))
    ));
}

#[test]
fn non_indexed_primitives_get_sequential_indices() {
    let json = r#"{
        "asset": {"version": "2.0"},
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3"}
        ],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 36}
        ],
        "buffers": [{"byteLength": 36}]
    }"#;
    let mut bin = Vec::new();
    for v in [[0.0_f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]] {
        for c in v {
            bin.write_f32::<LittleEndian>(c).unwrap();
        }
    }
    let mesh = parse_glb(&build_glb(json, &bin)).unwrap();
    assert_eq!(mesh.indices, vec![0, 1, 2]);
}

#[test]
fn degenerate_faces_fall_back_to_up_normals() {
    // zero-area triangle: all vertices coincident
    let positions = [[0.0_f32, 0.0, 0.0]; 3];
    let normals = compute_normals(&positions, &[0, 1, 2]);
    for n in normals {
        assert_eq!(n, [0.0, 1.0, 0.0]);
    }
}
