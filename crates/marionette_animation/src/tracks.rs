use std::sync::Arc;

use marionette_core::{MarionetteError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    Linear,
    Step,
    CubicSpline,
}

impl InterpolationMode {
    /// Number of stored values per keyframe.
    /// CubicSpline keeps `[in_tangent, value, out_tangent]` for every key.
    #[inline]
    #[must_use]
    pub fn values_per_key(self) -> usize {
        match self {
            InterpolationMode::CubicSpline => 3,
            _ => 1,
        }
    }
}

/// A sampled animation channel.
///
/// `times` and `values` are shared, immutable storage. Cloning a track only
/// bumps two reference counts.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T> {
    pub times: Arc<[f32]>,
    pub values: Arc<[T]>, // For CubicSpline, length is times.len() * 3
    pub interpolation: InterpolationMode,
}

impl<T> KeyframeTrack<T> {
    #[must_use]
    pub fn new(
        times: impl Into<Arc<[f32]>>,
        values: impl Into<Arc<[T]>>,
        interpolation: InterpolationMode,
    ) -> Self {
        Self {
            times: times.into(),
            values: values.into(),
            interpolation,
        }
    }

    /// Like [`KeyframeTrack::new`], but rejects inconsistent data.
    pub fn try_new(
        times: impl Into<Arc<[f32]>>,
        values: impl Into<Arc<[T]>>,
        interpolation: InterpolationMode,
    ) -> Result<Self> {
        let track = Self::new(times, values, interpolation);
        track.validate()?;
        Ok(track)
    }

    /// Checks the value count against the key count and that times never
    /// decrease.
    pub fn validate(&self) -> Result<()> {
        let expected = self.times.len() * self.interpolation.values_per_key();
        if self.values.len() != expected {
            return Err(MarionetteError::InvalidTrack(format!(
                "{:?} track with {} keys needs {} values, found {}",
                self.interpolation,
                self.times.len(),
                expected,
                self.values.len()
            )));
        }

        if let Some(i) = self.times.windows(2).position(|w| w[1] < w[0]) {
            return Err(MarionetteError::InvalidTrack(format!(
                "key times decrease at index {}",
                i + 1
            )));
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn keyframe_count(&self) -> usize {
        self.times.len()
    }

    /// Time of the last keyframe, or 0 for an empty track.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// True when both tracks read from the very same sample buffers.
    #[inline]
    #[must_use]
    pub fn shares_samples_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.times, &other.times) && Arc::ptr_eq(&self.values, &other.values)
    }
}
