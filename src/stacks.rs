use crate::geometry::Mat4f;
use crate::scene::Material;

/// Transform and material stacks kept at equal depth.
///
/// The bottom frame (identity, default material) is installed on creation and
/// can never be popped, so `top_*` always has something to return.
#[derive(Clone, Debug)]
pub struct StateStacks {
    transforms: Vec<Mat4f>,
    materials: Vec<Material>,
}

impl Default for StateStacks {
    fn default() -> Self {
        StateStacks::new(Mat4f::identity(), Material::default())
    }
}

impl StateStacks {
    pub fn new(transform: Mat4f, material: Material) -> Self {
        StateStacks {
            transforms: vec![transform],
            materials: vec![material],
        }
    }

    pub fn depth(&self) -> usize {
        debug_assert_eq!(self.transforms.len(), self.materials.len());
        self.transforms.len()
    }

    /// Number of scopes opened above the bottom frame.
    pub fn open_scopes(&self) -> usize {
        self.depth() - 1
    }

    pub fn push_scope(&mut self) {
        let transform = *self.top_transform();
        let material = self.top_material().clone();
        self.transforms.push(transform);
        self.materials.push(material);
    }

    /// Drops the innermost scope and hands it back. `None` when only the
    /// bottom frame is left; the stacks are untouched in that case.
    pub fn pop_scope(&mut self) -> Option<(Mat4f, Material)> {
        if self.depth() <= 1 {
            return None;
        }
        let transform = self.transforms.pop()?;
        let material = self.materials.pop()?;
        Some((transform, material))
    }

    pub fn top_transform(&self) -> &Mat4f {
        &self.transforms[self.transforms.len() - 1]
    }

    pub fn top_material(&self) -> &Material {
        &self.materials[self.materials.len() - 1]
    }

    pub fn top_material_mut(&mut self) -> &mut Material {
        let last = self.materials.len() - 1;
        &mut self.materials[last]
    }

    pub fn replace_transform(&mut self, transform: Mat4f) {
        let last = self.transforms.len() - 1;
        self.transforms[last] = transform;
    }

    pub fn replace_material(&mut self, material: Material) {
        *self.top_material_mut() = material;
    }
}
