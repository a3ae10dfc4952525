use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::alg;
use crate::error::Result;
use crate::graphics;
use crate::mesh;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index:  true,
        triangulate:   true,
        ignore_points: true,
        ignore_lines:  true,
        .. Default::default()
    }
}

/// Diffuse surface data from the obj's material library
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// `Kd`, white when absent
    pub diffuse: graphics::Color,
    /// `map_Kd`, resolved against the obj's directory
    pub diffuse_texture: Option<PathBuf>,
}

impl Material {
    fn from_tobj(material: &tobj::Material, base: &Path) -> Material {
        Material {
            name: material.name.clone(),
            diffuse: material.diffuse
                .map(|kd| graphics::Color::new(kd[0], kd[1], kd[2]))
                .unwrap_or_else(graphics::Color::white),
            diffuse_texture: material.diffuse_texture.as_ref()
                .map(|texture| base.join(texture)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Submesh {
    pub data: mesh::MeshData,
    pub material: Option<Material>,
}

/// Load obj meshes from path to vector of `mesh::MeshData` \
/// Faces are triangulated and indexed with a single index buffer. \
/// If the file contains normal data, it will be used.
/// Otherwise, normals are computed using `mesh::NormalMode::Smooth`. \
/// Texture coordinates are kept when present.
pub fn load_obj<P: AsRef<Path>>(filename: P) -> Result<Vec<mesh::MeshData>> {
    let submeshes = load_obj_with_materials(filename)?;
    Ok(submeshes.into_iter().map(|submesh| submesh.data).collect())
}

/// Like `load_obj`, keeping each submesh's material \
/// A missing or broken material library leaves every material `None`
pub fn load_obj_with_materials<P: AsRef<Path>>(filename: P) -> Result<Vec<Submesh>> {
    let filename = filename.as_ref();
    let base = filename.parent().unwrap_or_else(|| Path::new(""));

    let (models, materials) = tobj::load_obj(filename, &load_options())?;

    let materials: Vec<Material> = match materials {
        Ok(materials) => materials.iter()
            .map(|material| Material::from_tobj(material, base))
            .collect(),
        Err(err) => {
            // Material libraries are optional for these meshes
            warn!("Ignoring materials for \"{}\": {}", filename.display(), err);
            Vec::new()
        },
    };

    let mut result = Vec::with_capacity(models.len());

    for model in models {
        let submesh = model.mesh;
        let has_normals = !submesh.normals.is_empty();
        let has_uvs = !submesh.texcoords.is_empty();

        let material = submesh.material_id
            .and_then(|id| materials.get(id))
            .cloned();

        let mut vertices: Vec<mesh::Vertex> = submesh.positions
            .chunks_exact(3)
            .map(|chunk| alg::Vec3::new(chunk[0], chunk[1], chunk[2]))
            .map(mesh::Vertex::new)
            .collect();

        if has_normals {
            for (vertex, chunk) in vertices.iter_mut()
                .zip(submesh.normals.chunks_exact(3))
            {
                vertex.normal = alg::Vec3::new(chunk[0], chunk[1], chunk[2]);
            }
        }

        if has_uvs {
            for (vertex, chunk) in vertices.iter_mut()
                .zip(submesh.texcoords.chunks_exact(2))
            {
                vertex.uv = alg::Vec2::new(chunk[0], chunk[1]);
            }
        }

        // Cache buffer lengths for logging
        let (vertices_len, indices_len) = (vertices.len(), submesh.indices.len());

        let data = if has_normals {
            mesh::MeshData::new(vertices, submesh.indices)
        } else {
            mesh::MeshData::new_with_normals(
                vertices,
                submesh.indices,
                mesh::NormalMode::Smooth,
            )
        };

        info!(
            "\tLoaded submesh \"{}\" with {} verts, {} indices ({} normals{}), material {}",
            model.name,
            vertices_len,
            indices_len,
            if has_normals { "file" } else { "computed" },
            if has_uvs { ", uvs" } else { "" },
            material.as_ref().map_or("none", |material| material.name.as_str()),
        );

        result.push(Submesh { data, material });
    }

    info!(
        "Loaded model from \"{}\" with {} submesh(es)",
        filename.display(),
        result.len(),
    );

    Ok(result)
}

/// Load every submesh of an obj file into a single mesh
pub fn load_obj_merged<P: AsRef<Path>>(filename: P) -> Result<mesh::MeshData> {
    let submeshes = load_obj(filename)?;

    let mut merged = mesh::MeshData::default();

    for submesh in &submeshes {
        merged.extend(submesh);
    }

    Ok(merged)
}
