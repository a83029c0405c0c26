use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

/// Two white lights and one green material shared by every part.
///
/// Light positions are in eye space: they are fixed relative to the camera,
/// above and behind the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub lights: [PointLight; 2],
    pub material: Material,
}

impl PointLight {
    fn white(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            lights: [
                PointLight::white(Vec3::new(-4.0, 8.0, 8.0)),
                PointLight::white(Vec3::new(4.0, 8.0, 8.0)),
            ],
            material: Material {
                ambient: Vec3::ZERO,
                diffuse: Vec3::new(0.1, 0.35, 0.1),
                specular: Vec3::new(0.45, 0.55, 0.45),
                shininess: 32.0,
            },
        }
    }
}
