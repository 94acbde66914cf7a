//! Image loading for card faces
//!
//! Image faces embed the picture as a base64 data URL, so the deck stays a
//! single self-contained value in storage.

use crate::editor::error::ImageError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::future::Future;
use std::path::Path;

#[cfg(feature = "native")]
use std::path::PathBuf;

/// Reads an image into a data URL
pub trait ImageLoader {
    /// How the surface refers to an image (file path, browser `File`)
    type Handle;

    fn load_data_url(
        &self,
        image: Self::Handle,
    ) -> impl Future<Output = Result<String, ImageError>>;
}

/// Encode bytes as a `data:` URL
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guess an image MIME type from a file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Loads images from the local filesystem
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

#[cfg(feature = "native")]
impl ImageLoader for FsImageLoader {
    type Handle = PathBuf;

    async fn load_data_url(&self, path: PathBuf) -> Result<String, ImageError> {
        let name = path.display().to_string();
        let bytes = tokio::fs::read(&path).await.map_err(|e| ImageError::Read {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        if bytes.is_empty() {
            return Err(ImageError::Empty(name));
        }

        tracing::debug!(path = %name, bytes = bytes.len(), "Read image");
        Ok(data_url(mime_for_path(&path), &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(data_url("", b""), "data:application/octet-stream;base64,");
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("cat.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("dir/photo.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("icon.svg")), "image/svg+xml");
        assert_eq!(mime_for_path(Path::new("README")), "application/octet-stream");
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_fs_loader_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let url = FsImageLoader.load_data_url(path).await.unwrap();
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_fs_loader_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = FsImageLoader
            .load_data_url(dir.path().join("missing.png"))
            .await;
        assert!(matches!(missing, Err(ImageError::Read { .. })));

        let empty_path = dir.path().join("empty.png");
        std::fs::write(&empty_path, b"").unwrap();
        let empty = FsImageLoader.load_data_url(empty_path).await;
        assert!(matches!(empty, Err(ImageError::Empty(_))));
    }
}
