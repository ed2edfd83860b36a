//! User draft model: per-mode input fields and the image attachment.
//!
//! This module defines [`InputDraft`], the not-yet-submitted content for all
//! three input modes, and [`ImageAttachment`], the owned pairing of an image
//! handle with its displayable preview copy.
//!
//! # Attachment lifecycle
//!
//! The preview is a copy of the attachment bytes written into the plugin
//! cache directory so the UI can display it independently of the original
//! path. Handle and preview are one value: constructing an attachment
//! creates the preview, and dropping or replacing the attachment releases
//! it. Release happens exactly once; releasing an already-released preview
//! is a no-op.

use crate::domain::error::{Result, TruthLensError};
use std::fs;
use std::path::PathBuf;

/// Recognized image container formats, sniffed from magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl ImageFormat {
    /// Sniffs the format from the first bytes of a file.
    ///
    /// Returns `None` if the bytes match no recognized image signature.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            Some(Self::WebP)
        } else {
            None
        }
    }

    /// File extension used for the preview copy.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::WebP => "webp",
        }
    }

    /// Display label for the input surface, e.g. "PNG".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::WebP => "WEBP",
        }
    }
}

/// Owned handle to the displayable preview copy of an attachment.
///
/// Releasing deletes the cache file. The handle tracks whether release has
/// already happened, so a second call is a no-op rather than an error, and
/// `Drop` acts as a backstop for the replace-without-clear path.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle {
    path: Option<PathBuf>,
}

impl PreviewHandle {
    /// Writes the preview copy into `cache_dir` and returns a handle to it.
    ///
    /// The file name carries a timestamp so successive attachments never
    /// collide.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be created or the copy
    /// cannot be written.
    pub fn create(cache_dir: &std::path::Path, bytes: &[u8], format: ImageFormat) -> Result<Self> {
        fs::create_dir_all(cache_dir)?;
        let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let path = cache_dir.join(format!("preview-{stamp}.{}", format.extension()));
        fs::write(&path, bytes)?;
        tracing::debug!(preview = %path.display(), "preview created");
        Ok(Self { path: Some(path) })
    }

    /// Returns the preview file path, or `None` once released.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Deletes the preview copy. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(path) = self.path.take() {
            if let Err(e) = fs::remove_file(&path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(preview = %path.display(), error = %e, "failed to remove preview");
                }
            } else {
                tracing::debug!(preview = %path.display(), "preview released");
            }
        }
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// An attached image and its preview, owned as a single value.
#[derive(Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    /// The path the user attached from, for display.
    pub source_path: String,
    /// Raw file bytes, submitted to the analysis service.
    pub bytes: Vec<u8>,
    /// Sniffed container format.
    pub format: ImageFormat,
    /// Displayable preview copy in the plugin cache.
    pub preview: PreviewHandle,
}

impl ImageAttachment {
    /// Reads the file and sniffs its format without touching the cache.
    ///
    /// # Errors
    ///
    /// Returns [`TruthLensError::Resource`] if the file cannot be read or its
    /// bytes match no recognized image format.
    fn read_and_sniff(path: &str) -> Result<(Vec<u8>, ImageFormat)> {
        let bytes = fs::read(path)
            .map_err(|e| TruthLensError::Resource(format!("could not read {path}: {e}")))?;

        let format = ImageFormat::sniff(&bytes).ok_or_else(|| {
            TruthLensError::Resource(format!(
                "{path} is not a recognized image (PNG, JPEG, GIF, WEBP)"
            ))
        })?;

        Ok((bytes, format))
    }
}

/// The user's not-yet-submitted content across all input modes.
///
/// Switching modes never clears the other modes' fields; all three surfaces
/// keep their content until explicitly edited or cleared. `image_path` is
/// the typed path for the image surface and survives `clear_image` so the
/// same file can be re-attached without retyping.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InputDraft {
    /// Article URL for link mode.
    pub url: String,
    /// Pasted article body for text mode.
    pub text: String,
    /// Typed file path for image mode.
    pub image_path: String,
    /// Attached image, if any. Present iff its preview is present.
    pub image: Option<ImageAttachment>,
}

impl InputDraft {
    /// Attaches the image at `image_path`, replacing any prior attachment.
    ///
    /// The prior attachment's preview is released before the new preview is
    /// created, so at most one preview copy is live at a time.
    ///
    /// # Errors
    ///
    /// Returns [`TruthLensError::Resource`] if the file cannot be read or is
    /// not a recognized image. On failure the prior attachment and its
    /// preview are untouched.
    pub fn attach_image(&mut self, cache_dir: &std::path::Path) -> Result<()> {
        let path = self.image_path.trim().to_string();
        self.attach_image_at(&path, cache_dir)
    }

    /// Attaches the image at an explicit path, replacing any prior
    /// attachment. Used by callers that resolve the typed path first
    /// (tilde expansion for the plugin sandbox).
    ///
    /// # Errors
    ///
    /// Same conditions as [`InputDraft::attach_image`].
    pub fn attach_image_at(&mut self, path: &str, cache_dir: &std::path::Path) -> Result<()> {
        // Read and sniff before releasing anything, so a bad path cannot
        // cost the user their current attachment.
        let (bytes, format) = ImageAttachment::read_and_sniff(path)?;

        if let Some(mut old) = self.image.take() {
            old.preview.release();
        }

        let preview = PreviewHandle::create(cache_dir, &bytes, format)?;

        tracing::debug!(
            path = %path,
            format = format.label(),
            byte_len = bytes.len(),
            "image attached"
        );

        self.image = Some(ImageAttachment {
            source_path: path.to_string(),
            bytes,
            format,
            preview,
        });
        Ok(())
    }

    /// Removes the attachment and releases its preview.
    ///
    /// Calling this with no attachment is a no-op. The typed path is kept.
    pub fn clear_image(&mut self) {
        if let Some(mut attachment) = self.image.take() {
            attachment.preview.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn write_fake_png(dir: &std::path::Path, name: &str) -> String {
        let path = dir.join(name);
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(b"fake image payload");
        fs::write(&path, bytes).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn sniff_recognizes_formats() {
        assert_eq!(ImageFormat::sniff(&PNG_MAGIC), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(&[0xff, 0xd8, 0xff, 0xe0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a..."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"RIFF\x00\x00\x00\x00WEBP"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::sniff(b"plain text"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }

    #[test]
    fn attach_creates_preview_copy() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("previews");
        let mut draft = InputDraft::default();
        draft.image_path = write_fake_png(dir.path(), "article.png");

        draft.attach_image(&cache).unwrap();

        let attachment = draft.image.as_ref().unwrap();
        assert_eq!(attachment.format, ImageFormat::Png);
        let preview_path = attachment.preview.path().unwrap().to_path_buf();
        assert!(preview_path.exists());
        assert_eq!(fs::read(&preview_path).unwrap(), attachment.bytes);
    }

    #[test]
    fn clear_releases_preview_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("previews");
        let mut draft = InputDraft::default();
        draft.image_path = write_fake_png(dir.path(), "article.png");
        draft.attach_image(&cache).unwrap();

        let preview_path = draft
            .image
            .as_ref()
            .unwrap()
            .preview
            .path()
            .unwrap()
            .to_path_buf();

        draft.clear_image();
        assert!(draft.image.is_none());
        assert!(!preview_path.exists());

        // Second clear with nothing attached must be a no-op, not an error.
        draft.clear_image();
        assert!(draft.image.is_none());
        assert!(!draft.image_path.is_empty(), "typed path survives clear");
    }

    #[test]
    fn double_release_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut handle =
            PreviewHandle::create(dir.path(), b"\x89PNG\r\n\x1a\nxx", ImageFormat::Png).unwrap();
        let path = handle.path().unwrap().to_path_buf();

        handle.release();
        assert!(handle.path().is_none());
        assert!(!path.exists());

        handle.release();
        assert!(handle.path().is_none());
    }

    #[test]
    fn replacing_attachment_releases_old_preview_first() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("previews");
        let mut draft = InputDraft::default();

        draft.image_path = write_fake_png(dir.path(), "first.png");
        draft.attach_image(&cache).unwrap();
        let first_preview = draft
            .image
            .as_ref()
            .unwrap()
            .preview
            .path()
            .unwrap()
            .to_path_buf();

        draft.image_path = write_fake_png(dir.path(), "second.png");
        draft.attach_image(&cache).unwrap();
        let second_preview = draft
            .image
            .as_ref()
            .unwrap()
            .preview
            .path()
            .unwrap()
            .to_path_buf();

        assert!(!first_preview.exists(), "old preview must be released");
        assert!(second_preview.exists());
        assert_ne!(first_preview, second_preview);
    }

    #[test]
    fn failed_attach_leaves_prior_attachment_intact() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("previews");
        let mut draft = InputDraft::default();

        draft.image_path = write_fake_png(dir.path(), "good.png");
        draft.attach_image(&cache).unwrap();
        let old_preview = draft
            .image
            .as_ref()
            .unwrap()
            .preview
            .path()
            .unwrap()
            .to_path_buf();

        let text_file = dir.path().join("notes.txt");
        fs::write(&text_file, b"not an image").unwrap();
        draft.image_path = text_file.to_string_lossy().to_string();
        let err = draft.attach_image(&cache).unwrap_err();
        assert!(matches!(err, TruthLensError::Resource(_)));

        let kept = draft.image.as_ref().expect("prior attachment survives");
        assert!(kept.source_path.ends_with("good.png"));
        assert_eq!(kept.preview.path(), Some(old_preview.as_path()));
        assert!(old_preview.exists(), "prior preview file survives");

        // A missing path must fail the same way.
        draft.image_path = dir.path().join("missing.png").to_string_lossy().to_string();
        assert!(draft.attach_image(&cache).is_err());
        assert!(draft.image.is_some());
        assert!(old_preview.exists());
    }

    #[test]
    fn attach_rejects_unrecognized_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("previews");
        let text_file = dir.path().join("notes.txt");
        fs::write(&text_file, b"not an image").unwrap();

        let mut draft = InputDraft::default();
        draft.image_path = text_file.to_string_lossy().to_string();

        let err = draft.attach_image(&cache).unwrap_err();
        assert!(matches!(err, TruthLensError::Resource(_)));
        assert!(draft.image.is_none());
    }

    #[test]
    fn attach_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = InputDraft::default();
        draft.image_path = dir
            .path()
            .join("missing.png")
            .to_string_lossy()
            .to_string();

        let err = draft.attach_image(dir.path()).unwrap_err();
        assert!(matches!(err, TruthLensError::Resource(_)));
    }
}
