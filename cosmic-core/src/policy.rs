use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPolicy {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Zoom increment applied by the `+`/`-` keys.
    pub scale_step: f32,
    /// Clamp a restored page to the page count once it is known.
    /// Off by default: a stale page survives until the next navigation.
    pub clamp_restored_page: bool,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 2.5,
            scale_step: 0.2,
            clamp_restored_page: false,
        }
    }
}

impl SessionPolicy {
    pub fn clamp_scale(&self, target: f32) -> f32 {
        if target.is_nan() {
            return 1.0f32.clamp(self.min_scale, self.max_scale);
        }
        target.clamp(self.min_scale, self.max_scale)
    }
}
