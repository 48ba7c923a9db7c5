//! Ship model loading (glTF), sequential and all-or-nothing.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use glam::{Mat3, Mat4, Vec3};

use crate::color::Color;
use crate::mesh::{MeshData, Vertex};
use crate::params::{AssetConfig, ShipKind};

/// Flattened model: every primitive with its node transform baked in
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub meshes: Vec<MeshData>,
}

impl Model {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.vertices.len()).sum()
    }
}

/// Source of ship models
pub trait ModelLoader {
    fn load(&self, path: &Path) -> Result<Model>;
}

/// Loads `.gltf`/`.glb` files from disk through the `gltf` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct GltfLoader;

impl ModelLoader for GltfLoader {
    fn load(&self, path: &Path) -> Result<Model> {
        let (document, buffers, images) = gltf::import(path)
            .with_context(|| format!("failed to import glTF model {}", path.display()))?;

        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| anyhow!("{} contains no scene", path.display()))?;

        let mut meshes = Vec::new();
        for node in scene.nodes() {
            collect_node(&node, Mat4::IDENTITY, &buffers, &images, &mut meshes);
        }

        if meshes.is_empty() {
            return Err(anyhow!("{} contains no triangle meshes", path.display()));
        }

        Ok(Model {
            name: path.display().to_string(),
            meshes,
        })
    }
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
    out: &mut Vec<MeshData>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("skipping non-triangle primitive in mesh {:?}", mesh.name());
                continue;
            }
            if let Some(data) = read_primitive(&primitive, world, buffers, images) {
                out.push(data);
            }
        }
    }

    for child in node.children() {
        collect_node(&child, world, buffers, images, out);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
) -> Option<MeshData> {
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map(|n| n.collect())
        .unwrap_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()]);

    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let vertices = positions
        .iter()
        .zip(&normals)
        .map(|(p, n)| Vertex {
            position: world.transform_point3(Vec3::from_array(*p)).to_array(),
            normal: (normal_matrix * Vec3::from_array(*n))
                .normalize_or(Vec3::Y)
                .to_array(),
        })
        .collect::<Vec<_>>();

    let indices = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..vertices.len() as u32).collect(),
    };

    // Mirrored node transforms flip the winding
    let indices = if world.determinant() < 0.0 {
        flip_winding(indices)
    } else {
        indices
    };

    Some(MeshData {
        vertices,
        indices,
        base_color: material_color(&primitive.material(), images),
    })
}

fn flip_winding(mut indices: Vec<u32>) -> Vec<u32> {
    for tri in indices.chunks_exact_mut(3) {
        tri.swap(1, 2);
    }
    indices
}

/// Base color factor, tinted by the mean texel of the base color texture
///
/// The factor is linear; texels are sRGB. Both are multiplied in linear light
/// and the product is stored encoded.
fn material_color(material: &gltf::Material, images: &[gltf::image::Data]) -> Color {
    let pbr = material.pbr_metallic_roughness();
    let [r, g, b, _] = pbr.base_color_factor();

    let tint = pbr
        .base_color_texture()
        .and_then(|info| images.get(info.texture().source().index()))
        .and_then(mean_texel)
        .map(Color::to_linear)
        .unwrap_or([1.0; 3]);
    Color::from_linear([r * tint[0], g * tint[1], b * tint[2]])
}

fn mean_texel(image: &gltf::image::Data) -> Option<Color> {
    let stride = match image.format {
        gltf::image::Format::R8G8B8 => 3,
        gltf::image::Format::R8G8B8A8 => 4,
        _ => return None,
    };

    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for px in image.pixels.chunks_exact(stride) {
        sum[0] += px[0] as u64;
        sum[1] += px[1] as u64;
        sum[2] += px[2] as u64;
        count += 1;
    }
    if count == 0 {
        return None;
    }

    let channel = |s: u64| (s as f64 / count as f64 / 255.0) as f32;
    Some(Color::new(channel(sum[0]), channel(sum[1]), channel(sum[2])))
}

/// Load the three ships in order, stopping at the first failure
pub fn load_fleet(loader: &dyn ModelLoader, config: &AssetConfig) -> Result<[Model; 3]> {
    let mut models = Vec::with_capacity(3);
    for kind in ShipKind::ALL {
        let path: PathBuf = config.model_path(kind);
        log::info!("Loading {}", path.display());
        let model = loader.load(&path)?;
        log::debug!(
            "{}: {} meshes, {} vertices",
            path.display(),
            model.meshes.len(),
            model.vertex_count()
        );
        models.push(model);
    }

    models
        .try_into()
        .map_err(|_| anyhow!("expected exactly three ship models"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records requested paths; fails on any path containing `fail_on`
    struct ScriptedLoader {
        fail_on: Option<&'static str>,
        requested: RefCell<Vec<PathBuf>>,
    }

    impl ModelLoader for ScriptedLoader {
        fn load(&self, path: &Path) -> Result<Model> {
            self.requested.borrow_mut().push(path.to_path_buf());
            match self.fail_on {
                Some(needle) if path.to_string_lossy().contains(needle) => {
                    Err(anyhow!("simulated fetch failure for {}", path.display()))
                }
                _ => Ok(Model::empty(path.display().to_string())),
            }
        }
    }

    #[test]
    fn test_loads_in_fixed_order() {
        let loader = ScriptedLoader {
            fail_on: None,
            requested: RefCell::new(Vec::new()),
        };
        let models = load_fleet(&loader, &AssetConfig::default()).unwrap();

        assert_eq!(models.len(), 3);
        let requested = loader.requested.borrow();
        assert_eq!(requested[0], Path::new("models/ship/scene.gltf"));
        assert_eq!(requested[1], Path::new("models/asian_pirate_ship/scene.gltf"));
        assert_eq!(requested[2], Path::new("models/viking_ship/scene.gltf"));
    }

    #[test]
    fn test_failure_stops_loading() {
        let loader = ScriptedLoader {
            fail_on: Some("asian_pirate_ship"),
            requested: RefCell::new(Vec::new()),
        };
        let err = load_fleet(&loader, &AssetConfig::default()).unwrap_err();

        assert!(err.to_string().contains("asian_pirate_ship"));
        // Viking ship is never requested
        assert_eq!(loader.requested.borrow().len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = GltfLoader
            .load(Path::new("does/not/exist/scene.gltf"))
            .unwrap_err();
        assert!(err.to_string().contains("does/not/exist"));
    }

    #[test]
    fn test_mean_texel() {
        let image = gltf::image::Data {
            pixels: vec![255, 0, 0, 255, 0, 0, 255, 255],
            format: gltf::image::Format::R8G8B8A8,
            width: 2,
            height: 1,
        };
        let mean = mean_texel(&image).unwrap();
        assert_eq!(mean, Color::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_base_color_factor_is_encoded_to_srgb() {
        let json = br#"{
            "asset": { "version": "2.0" },
            "materials": [
                { "pbrMetallicRoughness": { "baseColorFactor": [0.214, 0.214, 0.214, 1.0] } }
            ]
        }"#;
        let gltf = gltf::Gltf::from_slice(json).unwrap();
        let material = gltf.materials().next().unwrap();

        // Linear 0.214 is displayed as sRGB 0.5, not 0.214
        let color = material_color(&material, &[]);
        assert!((color.r - 0.5).abs() < 1e-3, "{:?}", color);
        assert!((color.r.max(color.g).max(color.b) - 0.5).abs() < 1e-3);

        // Round trip to the shader's linear value is the factor itself
        let [r, _, _] = color.to_linear();
        assert!((r - 0.214).abs() < 1e-4);
    }

    #[test]
    fn test_flip_winding() {
        assert_eq!(flip_winding(vec![0, 1, 2, 3, 4, 5]), vec![0, 2, 1, 3, 5, 4]);
    }
}
