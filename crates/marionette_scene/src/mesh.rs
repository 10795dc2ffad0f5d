use uuid::Uuid;

/// Mesh payload of a node.
///
/// Geometry and material are owned elsewhere and referenced by id; copies of
/// a node share them. Morph weights are per instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Uuid,
    pub material: Uuid,
    pub morph_weights: Vec<f32>,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: Uuid, material: Uuid) -> Self {
        Self {
            geometry,
            material,
            morph_weights: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_morph_weights(mut self, weights: Vec<f32>) -> Self {
        self.morph_weights = weights;
        self
    }
}
