use glam::{Affine3A, EulerRot, Quat, Vec3};

/// Local TRS transform of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    #[must_use]
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Local matrix: scale, then rotate, then translate.
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Sets rotation from Euler angles (XYZ order, radians).
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    #[must_use]
    pub fn rotation_euler(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    /// Decomposes `mat` into position/rotation/scale.
    /// Shear, if any, is lost.
    pub fn apply_local_matrix(&mut self, mat: Affine3A) {
        let (scale, rotation, translation) = mat.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.position = translation;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
