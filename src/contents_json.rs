//! Contents.json data model for an Xcode `AppIcon.appiconset`
//!
//! Mirrors the subset of Apple's asset catalog Contents.json schema needed to
//! describe a single-size (1024pt universal) iOS app icon, which is how the
//! rendered icon is consumed by Xcode 14 and later.

use serde::Serialize;

/// Author recorded in the `info` block of every generated manifest.
pub const AUTHOR: &str = "plane-icon";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries of the icon set
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an icon set
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// The image file name, relative to the icon set directory
    pub filename: String,

    /// The device type for the image (e.g., "universal", "iphone", "ipad")
    pub idiom: String,

    /// Target platform of a single-size icon (e.g., "ios")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// The scale factor for the image (e.g., "1x", "2x")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,

    /// The size of the image in points (e.g., "1024x1024")
    pub size: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The tool that authored the asset catalog
    pub author: String,
}

impl ContentsFile {
    /// Creates an empty manifest authored by `author`
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    /// Adds an image entry to the manifest
    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }

    /// Manifest for an icon set holding one square icon of `size` pixels.
    pub fn single_size_app_icon(filename: String, size: u32) -> Self {
        let mut contents = Self::new(AUTHOR.to_string());
        contents.add_image(ImageEntry::universal_ios(filename, size));
        contents
    }
}

impl ImageEntry {
    /// Entry for a universal iOS icon of `size` points at 1x.
    ///
    /// Single-size icon sets omit `scale`; Xcode derives all smaller
    /// renditions from this one image.
    pub fn universal_ios(filename: String, size: u32) -> Self {
        Self {
            filename,
            idiom: "universal".to_string(),
            platform: Some("ios".to_string()),
            scale: None,
            size: format!("{size}x{size}"),
        }
    }
}
