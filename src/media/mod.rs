//! Workout image gallery.

pub mod gallery;

pub use gallery::{GalleryError, ImageGallery};
