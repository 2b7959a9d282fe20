//! Turns a directory of image files into carousel items.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::media::{ImageFormat, MediaItem};

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Lists the supported image files of `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(Error::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// One image item per path: the file name is the id, the stem the alt text.
pub fn items_from_paths(paths: &[PathBuf]) -> Vec<MediaItem> {
    paths
        .iter()
        .filter_map(|path| {
            let id = path.file_name()?.to_string_lossy().into_owned();
            let format = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ImageFormat::from_extension)?;
            let mut item = MediaItem::image(id, format, path.to_string_lossy());
            if let Some(stem) = path.file_stem() {
                item = item.with_alt_text(stem.to_string_lossy());
            }
            Some(item)
        })
        .collect()
}

/// Reads the EXIF orientation tag (1–8) of an encoded image.
///
/// Returns `None` when the data carries no EXIF block or no orientation.
pub fn exif_orientation(bytes: &[u8]) -> Option<u16> {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return None,
        Err(e) => {
            warn!("could not read EXIF data: {e}");
            return None;
        }
    };
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn finds_images_sorted_by_name() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        touch(dir.path(), "c.gif");
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "b.png");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("nested.png")).expect("failed to create dir");

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.JPG", "b.png", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        touch(dir.path(), "readme.md");
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoImages(_)));
    }

    #[test]
    fn unreadable_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = load_sorted_image_paths(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn items_use_file_names_as_ids() {
        let items = items_from_paths(&[PathBuf::from("/photos/harbour.jpg"), PathBuf::from("/photos/x.png")]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_str(), "harbour.jpg");
        assert_eq!(items[0].alt_text.as_deref(), Some("harbour"));
        assert_eq!(items[0].sources.get(ImageFormat::Jpeg), Some("/photos/harbour.jpg"));
        assert_eq!(items[1].thumbnail.get(ImageFormat::Png), Some("/photos/x.png"));
    }

    #[test]
    fn non_exif_data_has_no_orientation() {
        assert_eq!(exif_orientation(b"definitely not a jpeg"), None);
    }
}
