//! Scene graph data types.

use crate::mesh::Mesh;

/// A node in a scene tree.
///
/// Nodes form a recursive tree structure. Each node may carry a mesh,
/// referenced by index into the owning [`Scene`]'s mesh array so that
/// node references resolve locally.
#[derive(Debug)]
pub struct SceneNode {
    /// Node name, if any.
    pub name: Option<String>,
    /// Index into [`Scene::meshes`], if this node carries a mesh.
    pub mesh: Option<usize>,
    /// Child nodes forming the sub-tree.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates a new node with no name, mesh, or children.
    pub fn new() -> Self {
        Self {
            name: None,
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Set the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the mesh index.
    #[must_use]
    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Set the child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }

    /// Get the child node at `index`.
    ///
    /// Returns `None` when the node has no child at that position. There is
    /// deliberately no separate "present but empty" case: the child list is
    /// a plain sequence and absence is the only failure mode.
    pub fn child(&self, index: usize) -> Option<&SceneNode> {
        self.children.get(index)
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

/// A scene: a tree of nodes plus all meshes they reference.
///
/// Meshes are owned by the scene so that node indices resolve locally.
#[derive(Debug)]
pub struct Scene {
    /// Scene name, if any.
    pub name: Option<String>,
    /// Root node of the scene tree.
    pub root: SceneNode,
    /// All meshes referenced by nodes in this scene.
    pub meshes: Vec<Mesh>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self {
            name: None,
            root: SceneNode::new(),
            meshes: Vec::new(),
        }
    }

    /// Set the scene name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the root node.
    #[must_use]
    pub fn with_root(mut self, root: SceneNode) -> Self {
        self.root = root;
        self
    }

    /// Set the meshes.
    #[must_use]
    pub fn with_meshes(mut self, meshes: Vec<Mesh>) -> Self {
        self.meshes = meshes;
        self
    }

    /// Get a mesh by index.
    pub fn mesh(&self, index: usize) -> Option<&Mesh> {
        self.meshes.get(index)
    }

    /// Resolve the mesh a node refers to.
    ///
    /// Returns `None` when the node carries no mesh. Scenes produced by the
    /// loader always hold valid indices; a hand-built scene with a dangling
    /// index also resolves to `None` rather than panicking.
    pub fn node_mesh(&self, node: &SceneNode) -> Option<&Mesh> {
        node.mesh.and_then(|index| self.meshes.get(index))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
