/// A single slide in the rotation
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Image file, already resolved against the asset directory
    pub image: PathBuf,
    /// Accessibility description (shown as the image tooltip)
    pub alt_text: String,
    /// Text shown under the image
    pub caption: String,
}

impl Slide {
    pub fn new(
        image: impl Into<PathBuf>,
        alt_text: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            alt_text: alt_text.into(),
            caption: caption.into(),
        }
    }

    /// A slide without alt text is not allowed into a slideshow
    pub fn has_alt_text(&self) -> bool {
        !self.alt_text.trim().is_empty()
    }
}
