// SPDX-License-Identifier: MPL-2.0
//! Media references and the loaders that turn them into displayable content.
//!
//! The application never copies picked media. It only keeps a
//! [`MediaReference`] (a URI-like locator) and asks the image loader or the
//! video decoder to read from it when a screen needs to render it.

pub mod image;
pub mod reference;
pub mod video;

pub use image::{load_image, ImageData};
pub use reference::MediaReference;

/// Supported media extensions, used as picker filters.
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

#[cfg(test)]
mod tests {
    use super::extensions::*;
    use std::collections::HashSet;

    #[test]
    fn image_and_video_extensions_do_not_overlap() {
        let images: HashSet<_> = IMAGE_EXTENSIONS.iter().collect();
        assert!(VIDEO_EXTENSIONS.iter().all(|ext| !images.contains(ext)));
    }

    #[test]
    fn extensions_are_lowercase() {
        for ext in IMAGE_EXTENSIONS.iter().chain(VIDEO_EXTENSIONS) {
            assert_eq!(*ext, ext.to_lowercase());
        }
    }
}
