use crate::bounding_volume::Aabb;
use crate::shape::{SurfaceMaterial, TexturedMesh};
use core::ops::Deref;

/// How the triangles of a scene node are shaded.
#[derive(Clone, Debug)]
pub enum SceneMaterial {
    /// Unlit texture or fallback color.
    Surface(SurfaceMaterial),
    /// The normalized depth of each fragment, packed with [`pack_depth`](super::pack_depth).
    DepthPacking,
}

/// A mesh placed in a scene, with the material it is currently rendered with.
#[derive(Clone, Debug)]
pub struct SceneNode {
    /// The mesh of this node, already positioned in world-space.
    pub mesh: TexturedMesh,
    /// The material used for rendering this node.
    pub material: SceneMaterial,
}

impl SceneNode {
    /// A node rendering `mesh` with its own surface material.
    pub fn new(mesh: TexturedMesh) -> Self {
        let material = SceneMaterial::Surface(mesh.material().clone());
        Self { mesh, material }
    }
}

/// A set of meshes rendered together.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to this scene and returns its index.
    pub fn add(&mut self, node: SceneNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// The nodes of this scene.
    #[inline]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Does this scene contain no node?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The total number of triangles of the scene meshes.
    pub fn num_triangles(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh.num_triangles()).sum()
    }

    /// The world-space bounding box of every triangle of the scene.
    ///
    /// Invalid if the scene has no triangle.
    pub fn world_aabb(&self) -> Aabb {
        self.nodes
            .iter()
            .filter(|n| !n.mesh.is_empty())
            .fold(Aabb::new_invalid(), |aabb, n| aabb.merged(&n.mesh.world_aabb()))
    }

    /// Renders every node with `material` until the returned guard is dropped.
    ///
    /// The original materials are put back when the guard is dropped, whether the
    /// rendering done in between succeeded or not. The guard borrows the scene mutably,
    /// so overrides cannot be nested or interleaved with other uses of the scene.
    pub fn override_materials(&mut self, material: SceneMaterial) -> MaterialOverride<'_> {
        let originals = self
            .nodes
            .iter_mut()
            .map(|node| core::mem::replace(&mut node.material, material.clone()))
            .collect();

        MaterialOverride {
            scene: self,
            originals,
        }
    }
}

/// A scene whose materials are temporarily overridden.
///
/// Dereferences to the overridden [`Scene`] and restores its materials on drop.
#[derive(Debug)]
pub struct MaterialOverride<'a> {
    scene: &'a mut Scene,
    originals: Vec<SceneMaterial>,
}

impl Deref for MaterialOverride<'_> {
    type Target = Scene;

    fn deref(&self) -> &Scene {
        &*self.scene
    }
}

impl Drop for MaterialOverride<'_> {
    fn drop(&mut self) {
        for (node, material) in self.scene.nodes.iter_mut().zip(self.originals.drain(..)) {
            node.material = material;
        }
    }
}
