//! Listing and exporting the chart images of an output directory.

use std::{
    cmp::Reverse,
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use indic_eval_shared_kernel::{InfrastructureError, Result};
use serde::Serialize;

/// Extensions recognised as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSort {
    /// Filename, case-insensitive ascending.
    #[default]
    Name,
    /// Largest first.
    Size,
    /// Most recently modified first.
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Metadata shown for a selected image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    pub filename: String,
    pub path: String,
    pub size_kb: f64,
    /// Pixel dimensions read from the file header; `None` for SVG or
    /// unreadable files.
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub struct Gallery {
    images_dir: PathBuf,
    root: Option<PathBuf>,
}

impl Gallery {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self { images_dir: images_dir.into(), root: None }
    }

    /// Reported paths are made relative to `root` when they live under it.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Image files directly inside the directory; a missing directory is empty.
    pub fn list(&self, sort: ImageSort) -> Result<Vec<ImageEntry>> {
        if !self.images_dir.is_dir() {
            log::debug!("{} does not exist; no images", self.images_dir.display());
            return Ok(Vec::new());
        }
        let read_err = |source| InfrastructureError::FileRead { path: self.images_dir.clone(), source };

        let mut images = Vec::new();
        for entry in fs::read_dir(&self.images_dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if !is_image(&path) {
                continue;
            }
            let Ok(meta) = entry.metadata() else { continue };
            if !meta.is_file() {
                continue;
            }
            images.push(ImageEntry {
                filename: entry.file_name().to_string_lossy().into_owned(),
                path,
                size: meta.len(),
                modified: meta.modified().ok(),
            });
        }

        // Stable sorts keep name order among equal sizes and timestamps.
        images.sort_by_cached_key(|e| e.filename.to_lowercase());
        match sort {
            ImageSort::Name => {}
            ImageSort::Size => images.sort_by_key(|e| Reverse(e.size)),
            ImageSort::Modified => images.sort_by_key(|e| Reverse(e.modified)),
        }
        Ok(images)
    }

    pub fn find(&self, filename: &str) -> Result<ImageEntry> {
        self.list(ImageSort::Name)?.into_iter().find(|e| e.filename == filename).ok_or_else(|| {
            InfrastructureError::ImageNotFound { name: filename.to_string(), dir: self.images_dir.clone() }.into()
        })
    }

    pub fn info(&self, entry: &ImageEntry) -> ImageInfo {
        let shown = self
            .root
            .as_deref()
            .and_then(|root| entry.path.strip_prefix(root).ok())
            .unwrap_or(&entry.path);
        #[allow(clippy::cast_precision_loss)]
        let kb = entry.size as f64 / 1024.0;
        let (width, height) = dimensions(&entry.path).unzip();
        ImageInfo {
            filename: entry.filename.clone(),
            path: shown.display().to_string(),
            size_kb: (kb * 100.0).round() / 100.0,
            width,
            height,
        }
    }

    /// Copies `filename` to `dest`.
    ///
    /// `dest` names a directory when it already is one, ends with a path
    /// separator or has no extension; the copy then keeps its filename and
    /// the directory is created as needed.
    pub fn export(&self, filename: &str, dest: &Path) -> Result<PathBuf> {
        let entry = self.find(filename)?;
        let target = if is_directory_target(dest) {
            fs::create_dir_all(dest)
                .map_err(|source| InfrastructureError::FileWrite { path: dest.to_path_buf(), source })?;
            dest.join(&entry.filename)
        } else {
            dest.to_path_buf()
        };
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| InfrastructureError::FileWrite { path: parent.to_path_buf(), source })?;
        }
        fs::copy(&entry.path, &target)
            .map_err(|source| InfrastructureError::FileWrite { path: target.clone(), source })?;
        log::info!("exported {} to {}", entry.filename, target.display());
        Ok(target)
    }
}

fn is_directory_target(dest: &Path) -> bool {
    dest.is_dir()
        || dest.as_os_str().to_string_lossy().chars().last().is_some_and(std::path::is_separator)
        || dest.extension().is_none()
}

fn dimensions(path: &Path) -> Option<(u32, u32)> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("svg")) {
        return None;
    }
    match imagesize::size(path) {
        Ok(size) => Some((u32::try_from(size.width).ok()?, u32::try_from(size.height).ok()?)),
        Err(err) => {
            log::debug!("no dimensions for {}: {err}", path.display());
            None
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}
