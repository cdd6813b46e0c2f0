//! Minimal binary-glTF (.glb) reader.
//!
//! The hub only needs positions, normals and indices of the first mesh
//! primitive in each model, so this stays deliberately small: container
//! header, JSON chunk, BIN chunk, then a straight walk from primitive to
//! accessor to buffer view. Anything the hub models don't use (sparse or
//! strided accessors, external buffers) is rejected up front.

use byteorder::{LittleEndian, ReadBytesExt};
use serde_json::Value;
use std::io::Cursor;
use thiserror::Error;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

const COMPONENT_U8: u64 = 5121;
const COMPONENT_U16: u64 = 5123;
const COMPONENT_U32: u64 = 5125;
const COMPONENT_F32: u64 = 5126;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not a binary glTF container")]
    BadMagic,
    #[error("unsupported glTF version {0}")]
    UnsupportedVersion(u32),
    #[error("truncated container")]
    Truncated,
    #[error("malformed JSON chunk: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("unsupported {0}")]
    Unsupported(&'static str),
}

impl From<std::io::Error> for ModelError {
    fn from(_: std::io::Error) -> Self {
        ModelError::Truncated
    }
}

/// Geometry payload of one carousel item.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Decode a .glb byte stream into the first primitive's geometry.
pub fn parse_glb(bytes: &[u8]) -> Result<MeshData, ModelError> {
    let mut cur = Cursor::new(bytes);
    let magic = cur.read_u32::<LittleEndian>()?;
    if magic != GLB_MAGIC {
        return Err(ModelError::BadMagic);
    }
    let version = cur.read_u32::<LittleEndian>()?;
    if version != 2 {
        return Err(ModelError::UnsupportedVersion(version));
    }
    let declared_len = cur.read_u32::<LittleEndian>()? as usize;
    let total = bytes.len().min(declared_len);

    let mut json: Option<Value> = None;
    let mut bin: Option<&[u8]> = None;
    let mut offset = 12usize;
    while offset + 8 <= total {
        let mut head = Cursor::new(&bytes[offset..]);
        let chunk_len = head.read_u32::<LittleEndian>()? as usize;
        let chunk_type = head.read_u32::<LittleEndian>()?;
        let start = offset + 8;
        let end = start.checked_add(chunk_len).ok_or(ModelError::Truncated)?;
        if end > total {
            return Err(ModelError::Truncated);
        }
        match chunk_type {
            CHUNK_JSON => json = Some(serde_json::from_slice(&bytes[start..end])?),
            CHUNK_BIN => bin = Some(&bytes[start..end]),
            _ => {} // unknown chunk types are skippable in glTF containers
        }
        // chunks are 4-byte aligned
        offset = end + (4 - chunk_len % 4) % 4;
    }

    let doc = json.ok_or(ModelError::Missing("JSON chunk"))?;
    let bin = bin.ok_or(ModelError::Missing("BIN chunk"))?;
    extract_primitive(&doc, bin)
}

fn extract_primitive(doc: &Value, bin: &[u8]) -> Result<MeshData, ModelError> {
    let prim = doc
        .pointer("/meshes/0/primitives/0")
        .ok_or(ModelError::Missing("mesh primitive"))?;
    let attributes = prim
        .get("attributes")
        .ok_or(ModelError::Missing("primitive attributes"))?;

    let pos_accessor = attributes
        .get("POSITION")
        .and_then(Value::as_u64)
        .ok_or(ModelError::Missing("POSITION attribute"))?;
    let positions = read_vec3_accessor(doc, bin, pos_accessor)?;

    let indices = match prim.get("indices").and_then(Value::as_u64) {
        Some(acc) => read_index_accessor(doc, bin, acc)?,
        // non-indexed primitive: treat consecutive vertices as triangles
        None => (0..positions.len() as u32).collect(),
    };

    let normals = match attributes.get("NORMAL").and_then(Value::as_u64) {
        Some(acc) => read_vec3_accessor(doc, bin, acc)?,
        None => compute_normals(&positions, &indices),
    };
    if normals.len() != positions.len() {
        return Err(ModelError::Unsupported("mismatched NORMAL count"));
    }

    Ok(MeshData {
        positions,
        normals,
        indices,
    })
}

/// Resolve an accessor to its tightly-packed byte range in the BIN chunk.
/// Returns the slice, component type and element count.
fn accessor_bytes<'a>(
    doc: &Value,
    bin: &'a [u8],
    accessor: u64,
    expected_type: &str,
    element_size: usize,
) -> Result<(&'a [u8], u64, usize), ModelError> {
    let acc = doc
        .pointer(&format!("/accessors/{accessor}"))
        .ok_or(ModelError::Missing("accessor"))?;
    if acc.get("sparse").is_some() {
        return Err(ModelError::Unsupported("sparse accessors"));
    }
    let ty = acc
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ModelError::Missing("accessor type"))?;
    if ty != expected_type {
        return Err(ModelError::Unsupported("accessor element type"));
    }
    let component = acc
        .get("componentType")
        .and_then(Value::as_u64)
        .ok_or(ModelError::Missing("accessor componentType"))?;
    let count = acc
        .get("count")
        .and_then(Value::as_u64)
        .ok_or(ModelError::Missing("accessor count"))? as usize;
    let acc_offset = acc.get("byteOffset").and_then(Value::as_u64).unwrap_or(0) as usize;

    let view_index = acc
        .get("bufferView")
        .and_then(Value::as_u64)
        .ok_or(ModelError::Missing("accessor bufferView"))?;
    let view = doc
        .pointer(&format!("/bufferViews/{view_index}"))
        .ok_or(ModelError::Missing("bufferView"))?;
    if let Some(stride) = view.get("byteStride").and_then(Value::as_u64) {
        if stride as usize != element_size {
            return Err(ModelError::Unsupported("strided bufferViews"));
        }
    }
    let view_offset = view.get("byteOffset").and_then(Value::as_u64).unwrap_or(0) as usize;

    let start = view_offset + acc_offset;
    let end = start
        .checked_add(count * element_size)
        .ok_or(ModelError::Truncated)?;
    if end > bin.len() {
        return Err(ModelError::Truncated);
    }
    Ok((&bin[start..end], component, count))
}

fn read_vec3_accessor(doc: &Value, bin: &[u8], accessor: u64) -> Result<Vec<[f32; 3]>, ModelError> {
    let (bytes, component, count) = accessor_bytes(doc, bin, accessor, "VEC3", 12)?;
    if component != COMPONENT_F32 {
        return Err(ModelError::Unsupported("non-float VEC3 accessor"));
    }
    let mut out = Vec::with_capacity(count);
    for chunk in bytes.chunks_exact(12) {
        out.push([
            f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
            f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
            f32::from_le_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]),
        ]);
    }
    Ok(out)
}

fn read_index_accessor(doc: &Value, bin: &[u8], accessor: u64) -> Result<Vec<u32>, ModelError> {
    // Peek the component type first to know the element size
    let component = doc
        .pointer(&format!("/accessors/{accessor}/componentType"))
        .and_then(Value::as_u64)
        .ok_or(ModelError::Missing("accessor componentType"))?;
    let element_size = match component {
        COMPONENT_U8 => 1,
        COMPONENT_U16 => 2,
        COMPONENT_U32 => 4,
        _ => return Err(ModelError::Unsupported("index component type")),
    };
    let (bytes, _, count) = accessor_bytes(doc, bin, accessor, "SCALAR", element_size)?;
    let mut out = Vec::with_capacity(count);
    match component {
        COMPONENT_U8 => out.extend(bytes.iter().map(|&b| u32::from(b))),
        COMPONENT_U16 => out.extend(
            bytes
                .chunks_exact(2)
                .map(|c| u32::from(u16::from_le_bytes([c[0], c[1]]))),
        ),
        _ => out.extend(
            bytes
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])),
        ),
    }
    Ok(out)
}

/// Area-weighted vertex normals for models that ship without them.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accum = vec![glam::Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = glam::Vec3::from(positions[a]);
        let pb = glam::Vec3::from(positions[b]);
        let pc = glam::Vec3::from(positions[c]);
        // cross product magnitude carries the area weighting
        let face = (pb - pa).cross(pc - pa);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }
    accum
        .into_iter()
        .map(|n| {
            if n.length_squared() > 1e-12 {
                n.normalize().to_array()
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect()
}
