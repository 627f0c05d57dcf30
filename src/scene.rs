use crate::geometry::{Fp, Mat4f, Point3f, Vec3f};

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3f,
    pub color: Vec3f,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Vec3f,
    pub specular: Vec3f,
    pub shininess: Fp,
    pub refraction: Vec3f,
    pub refractive_index: Fp,
}

impl Material {
    /// A material with no refraction.
    pub fn new(diffuse: Vec3f, specular: Vec3f, shininess: Fp) -> Self {
        Material {
            diffuse,
            specular,
            shininess,
            refraction: Vec3f::zeros(),
            refractive_index: 0.0,
        }
    }

    pub fn set_refraction(&mut self, refraction: Vec3f, refractive_index: Fp) {
        self.refraction = refraction;
        self.refractive_index = refractive_index;
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(Vec3f::repeat(1.0), Vec3f::repeat(1.0), 5.0)
    }
}

/// Unit sphere placed by `transform`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub transform: Mat4f,
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneObject {
    Sphere(Sphere),
}

impl SceneObject {
    pub fn transform(&self) -> &Mat4f {
        match self {
            SceneObject::Sphere(sphere) => &sphere.transform,
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            SceneObject::Sphere(sphere) => &sphere.material,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Square image, so this is both width and height.
    pub image_size: i32,
    pub corner_dist: Fp,
    pub bg_color: Vec3f,
    pub ambient_light: Vec3f,
    pub lights: Vec<Light>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn width(&self) -> i32 {
        self.image_size
    }

    pub fn height(&self) -> i32 {
        self.image_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_white_without_refraction() {
        let material = Material::default();
        assert_eq!(material.diffuse, Vec3f::new(1.0, 1.0, 1.0));
        assert_eq!(material.specular, Vec3f::new(1.0, 1.0, 1.0));
        assert_eq!(material.shininess, 5.0);
        assert_eq!(material.refraction, Vec3f::zeros());
        assert_eq!(material.refractive_index, 0.0);
    }

    #[test]
    fn empty_scene() {
        let scene = Scene::default();
        assert_eq!(scene.width(), 0);
        assert_eq!(scene.height(), 0);
        assert_eq!(scene.bg_color, Vec3f::zeros());
        assert!(scene.lights.is_empty());
        assert!(scene.objects.is_empty());
    }
}
