use serde::Deserialize;

/// Policy for a pixel value stream that ends before `width * height * 3`
/// values have been read.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShortData {
    /// Fail with [`DecodeError::InsufficientData`](super::DecodeError::InsufficientData).
    #[default]
    Error,
    /// Keep only the complete rows decoded so far. A short final row would
    /// break the rectangular invariant, so truncation happens at a row
    /// boundary.
    TruncateRows,
}

/// Options controlling pixmap decoding.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub short_data: ShortData,
}

impl DecodeOptions {
    pub fn with_short_data(mut self, short_data: ShortData) -> Self {
        self.short_data = short_data;
        self
    }
}
