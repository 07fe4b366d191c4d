use crate::archive::error::ArchiveError;
use crate::attractions::error::AttractionError;
use crate::regions::error::RegionError;
use crate::types::date_window::DateWindowError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SofloError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Attraction(#[from] AttractionError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    DateWindow(#[from] DateWindowError),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),
}
