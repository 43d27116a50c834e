use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::TIMESTAMP_FORMAT;

/// An image reference with a caption. The image itself is never copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEntry {
    pub created_at: NaiveDateTime,
    /// Empty when the entry has no image.
    pub image_path: String,
    pub caption: String,
}

impl VisualEntry {
    pub fn new(created_at: NaiveDateTime, image_path: Option<&str>, caption: &str) -> Self {
        Self {
            created_at,
            image_path: image_path.unwrap_or_default().to_string(),
            caption: caption.to_string(),
        }
    }

    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// File name of the image, or `[no image]`.
    pub fn image_name(&self) -> String {
        if self.image_path.is_empty() {
            return "[no image]".to_string();
        }
        Path::new(&self.image_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.image_path.clone())
    }
}
