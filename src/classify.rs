//! Image file classification
//!
//! Decides whether a directory entry is an image file that despace may
//! rename. Eligibility is a regular file (symlinks are followed) whose
//! extension, compared case-insensitively, is in [`IMAGE_EXTENSIONS`].

use std::path::Path;

/// Extensions treated as images, lower-case and without the leading dot
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "svg", "heic",
];

/// Check the extension alone, without touching the filesystem
pub fn has_image_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        IMAGE_EXTENSIONS.contains(&ext.as_str())
    })
}

/// Check that `path` is a regular file with an image extension.
///
/// Directories, symlinks to directories, dangling symlinks and special
/// files are all rejected.
pub fn is_image_file(path: &Path) -> bool {
    path.is_file() && has_image_extension(path)
}

/// Whether the file name (not the parent path) contains a space
pub fn needs_rename(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains(' '))
}
