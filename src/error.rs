use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::media::ItemId;
use crate::surface::SurfaceElement;

#[derive(Debug, Error)]
pub enum Error {
    /// The host surface lacks an element the controller cannot work without.
    #[error("surface is missing required element: {0}")]
    MissingElement(SurfaceElement),

    #[error("surface has no thumbnail control for item `{0}`")]
    MissingThumbnail(ItemId),

    #[error("item id `{0}` appears more than once")]
    DuplicateItem(ItemId),

    #[error("dwell delay must be greater than zero")]
    InvalidDelay,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("no image files found in {}", .0.display())]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
