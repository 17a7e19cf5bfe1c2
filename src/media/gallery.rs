//! Images picked from the media library.
//!
//! The picker is a platform service; the gallery keeps the URIs it returned,
//! in selection order.

use thiserror::Error;

/// Picked image URIs.
#[derive(Debug, Clone, Default)]
pub struct ImageGallery {
    images: Vec<String>,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the URIs from one picker session.
    ///
    /// `permission_granted` is the media-library permission answer; without
    /// it nothing is added.
    pub fn add_picked<I, S>(&mut self, permission_granted: bool, uris: I) -> Result<usize, GalleryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !permission_granted {
            tracing::warn!("Media library access denied");
            return Err(GalleryError::PermissionDenied);
        }

        let before = self.images.len();
        self.images.extend(uris.into_iter().map(Into::into));
        let added = self.images.len() - before;

        if added == 0 {
            tracing::debug!("No images selected");
        }
        Ok(added)
    }

    /// Delete every entry equal to `uri`.
    pub fn remove(&mut self, uri: &str) -> Result<usize, GalleryError> {
        let before = self.images.len();
        self.images.retain(|image| image != uri);
        let removed = before - self.images.len();

        if removed == 0 {
            return Err(GalleryError::NotFound(uri.to_string()));
        }
        Ok(removed)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Gallery errors.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Permission denied: media library access is required to pick images")]
    PermissionDenied,

    #[error("Image not in gallery: {0}")]
    NotFound(String),
}
