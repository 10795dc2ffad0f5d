use smallvec::SmallVec;

/// One keyframe of morph target weights.
///
/// Most meshes drive only a handful of targets, so the weights stay inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MorphWeightData {
    pub weights: SmallVec<[f32; 8]>,
}

impl MorphWeightData {
    #[must_use]
    pub fn new(weights: &[f32]) -> Self {
        Self {
            weights: SmallVec::from_slice(weights),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
