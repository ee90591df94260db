//! Profile photo input and its transient file.
//!
//! The photo is written to a uniquely named temporary file for the duration
//! of one generation call and read back from there for embedding. The file
//! lives inside a [`TransientPhoto`], which deletes it when dropped, so it
//! is gone on every exit path: success, decode failure or I/O failure.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{GenerationError, GenerationResult};

/// Raw uploaded image bytes plus a file-extension hint.
#[derive(Debug, Clone)]
pub struct Photo {
    pub bytes: Vec<u8>,
    /// Extension such as `"png"` or `".jpg"`; only used as the transient
    /// file's suffix.
    pub extension: Option<String>,
}

impl Photo {
    pub fn new(bytes: Vec<u8>, extension: Option<&str>) -> Self {
        Self {
            bytes,
            extension: extension.map(str::to_string),
        }
    }

    /// Load a photo from disk, taking the extension hint from the path.
    pub fn from_path(path: &Path) -> GenerationResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            GenerationError::new(format!("Cannot read photo '{}': {e}", path.display()))
        })?;
        let extension = path.extension().and_then(|e| e.to_str());
        Ok(Self::new(bytes, extension))
    }

    /// The transient-file suffix: `".png"` for `"png"` or `".png"`, empty
    /// when there is no usable hint.
    pub fn suffix(&self) -> String {
        match self.extension.as_deref().map(|e| e.trim_start_matches('.')) {
            Some(ext) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
                format!(".{ext}")
            }
            _ => String::new(),
        }
    }
}

/// Decoded photo, ready for the renderer.
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    pub bytes: Vec<u8>,
    pub px_width: u32,
    pub px_height: u32,
}

impl LoadedPhoto {
    /// Height in points when scaled to `width` points, preserving aspect ratio.
    pub fn scaled_height(&self, width: f32) -> f32 {
        if self.px_width == 0 {
            return width;
        }
        width * self.px_height as f32 / self.px_width as f32
    }
}

/// A photo staged in a temporary file. Dropping it removes the file.
pub struct TransientPhoto {
    file: NamedTempFile,
}

impl TransientPhoto {
    /// Write the photo bytes to a fresh, uniquely named file in `dir`
    /// (the system temp dir when `None`).
    pub fn stage(photo: &Photo, dir: Option<&Path>) -> GenerationResult<Self> {
        let suffix = photo.suffix();
        let mut builder = tempfile::Builder::new();
        builder.prefix("resume-photo-").suffix(&suffix);
        let mut file = match dir {
            Some(d) => builder.tempfile_in(d)?,
            None => builder.tempfile()?,
        };
        file.write_all(&photo.bytes)?;
        file.flush()?;
        log::debug!(
            "Staged {} photo bytes at {}",
            photo.bytes.len(),
            file.path().display()
        );
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the staged file back and decode its pixel dimensions.
    pub fn load(&self) -> GenerationResult<LoadedPhoto> {
        let bytes = fs::read(self.path())?;
        if bytes.is_empty() {
            return Err(GenerationError::new("Photo is empty"));
        }
        let img = image::load_from_memory(&bytes)?;
        Ok(LoadedPhoto {
            px_width: img.width(),
            px_height: img.height(),
            bytes,
        })
    }
}

impl Drop for TransientPhoto {
    fn drop(&mut self) {
        // NamedTempFile removes the file right after this.
        log::debug!("Releasing transient photo {}", self.file.path().display());
    }
}

#[cfg(test)]
pub(crate) mod test_images {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, RgbImage};

    /// A small solid PNG of the given size.
    pub fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([30, 60, 90]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("encode png");
        buf
    }
}
