use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Picker view identifier
///
/// Serialized as the external value (`"docs-images"`). Deserialization also
/// accepts the symbolic name (`"DOCS_IMAGES"`).
///
/// See <https://developers.google.com/drive/picker/reference#view-id>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    /// All items in Google Drive. Default view of the picker.
    #[serde(rename = "all", alias = "DOCS")]
    Docs,
    #[serde(rename = "docs-images", alias = "DOCS_IMAGES")]
    DocsImages,
    #[serde(rename = "docs-images-and-videos", alias = "DOCS_IMAGES_AND_VIDEOS")]
    DocsImagesAndVideos,
    #[serde(rename = "docs-videos", alias = "DOCS_VIDEOS")]
    DocsVideos,
    #[serde(rename = "documents", alias = "DOCUMENTS")]
    Documents,
    #[serde(rename = "drawings", alias = "DRAWINGS")]
    Drawings,
    /// Folders only. As the only view, no file can be selected.
    #[serde(rename = "folders", alias = "FOLDERS")]
    Folders,
    #[serde(rename = "forms", alias = "FORMS")]
    Forms,
    #[serde(rename = "image-search", alias = "IMAGE_SEARCH")]
    ImageSearch,
    #[serde(rename = "maps", alias = "MAPS")]
    Maps,
    #[serde(rename = "pdfs", alias = "PDFS")]
    Pdfs,
    #[serde(rename = "photos", alias = "PHOTOS")]
    Photos,
    #[serde(rename = "photo-albums", alias = "PHOTO_ALBUMS")]
    PhotoAlbums,
    #[serde(rename = "photo-upload", alias = "PHOTO_UPLOAD")]
    PhotoUpload,
    #[serde(rename = "presentations", alias = "PRESENTATIONS")]
    Presentations,
    /// Recently picked files. Empty until something has been picked.
    #[serde(rename = "recently-picked", alias = "RECENTLY_PICKED")]
    RecentlyPicked,
    #[serde(rename = "spreadsheets", alias = "SPREADSHEETS")]
    Spreadsheets,
    #[serde(rename = "video-search", alias = "VIDEO_SEARCH")]
    VideoSearch,
    #[serde(rename = "webcam", alias = "WEBCAM")]
    Webcam,
    #[serde(rename = "youtube", alias = "YOUTUBE")]
    Youtube,
}

impl ViewId {
    const ALL: [ViewId; 20] = [
        ViewId::Docs,
        ViewId::DocsImages,
        ViewId::DocsImagesAndVideos,
        ViewId::DocsVideos,
        ViewId::Documents,
        ViewId::Drawings,
        ViewId::Folders,
        ViewId::Forms,
        ViewId::ImageSearch,
        ViewId::Maps,
        ViewId::Pdfs,
        ViewId::Photos,
        ViewId::PhotoAlbums,
        ViewId::PhotoUpload,
        ViewId::Presentations,
        ViewId::RecentlyPicked,
        ViewId::Spreadsheets,
        ViewId::VideoSearch,
        ViewId::Webcam,
        ViewId::Youtube,
    ];

    /// Every view in declaration order
    pub fn all() -> &'static [ViewId] {
        &Self::ALL
    }

    /// External value understood by the picker service
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Docs => "all",
            ViewId::DocsImages => "docs-images",
            ViewId::DocsImagesAndVideos => "docs-images-and-videos",
            ViewId::DocsVideos => "docs-videos",
            ViewId::Documents => "documents",
            ViewId::Drawings => "drawings",
            ViewId::Folders => "folders",
            ViewId::Forms => "forms",
            ViewId::ImageSearch => "image-search",
            ViewId::Maps => "maps",
            ViewId::Pdfs => "pdfs",
            ViewId::Photos => "photos",
            ViewId::PhotoAlbums => "photo-albums",
            ViewId::PhotoUpload => "photo-upload",
            ViewId::Presentations => "presentations",
            ViewId::RecentlyPicked => "recently-picked",
            ViewId::Spreadsheets => "spreadsheets",
            ViewId::VideoSearch => "video-search",
            ViewId::Webcam => "webcam",
            ViewId::Youtube => "youtube",
        }
    }

    /// Upstream symbolic name
    pub fn name(&self) -> &'static str {
        match self {
            ViewId::Docs => "DOCS",
            ViewId::DocsImages => "DOCS_IMAGES",
            ViewId::DocsImagesAndVideos => "DOCS_IMAGES_AND_VIDEOS",
            ViewId::DocsVideos => "DOCS_VIDEOS",
            ViewId::Documents => "DOCUMENTS",
            ViewId::Drawings => "DRAWINGS",
            ViewId::Folders => "FOLDERS",
            ViewId::Forms => "FORMS",
            ViewId::ImageSearch => "IMAGE_SEARCH",
            ViewId::Maps => "MAPS",
            ViewId::Pdfs => "PDFS",
            ViewId::Photos => "PHOTOS",
            ViewId::PhotoAlbums => "PHOTO_ALBUMS",
            ViewId::PhotoUpload => "PHOTO_UPLOAD",
            ViewId::Presentations => "PRESENTATIONS",
            ViewId::RecentlyPicked => "RECENTLY_PICKED",
            ViewId::Spreadsheets => "SPREADSHEETS",
            ViewId::VideoSearch => "VIDEO_SEARCH",
            ViewId::Webcam => "WEBCAM",
            ViewId::Youtube => "YOUTUBE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ViewId::Docs => "All items in Google Drive",
            ViewId::DocsImages => "Images in Google Drive",
            ViewId::DocsImagesAndVideos => "Images and videos in Google Drive",
            ViewId::DocsVideos => "Videos in Google Drive",
            ViewId::Documents => "Google Docs documents",
            ViewId::Drawings => "Google Drawings",
            ViewId::Folders => "Folders only, files cannot be selected",
            ViewId::Forms => "Google Forms",
            ViewId::Pdfs => "PDF files",
            ViewId::Presentations => "Google Slides presentations",
            ViewId::RecentlyPicked => "Recently picked files",
            ViewId::Spreadsheets => "Google Sheets spreadsheets",
            ViewId::ImageSearch
            | ViewId::Maps
            | ViewId::Photos
            | ViewId::PhotoAlbums
            | ViewId::PhotoUpload
            | ViewId::VideoSearch
            | ViewId::Webcam
            | ViewId::Youtube => "Deprecated, the picker answers with 403",
        }
    }

    /// Views retired by the picker service. Requesting one yields HTTP 403.
    pub fn is_deprecated(&self) -> bool {
        matches!(
            self,
            ViewId::ImageSearch
                | ViewId::Maps
                | ViewId::Photos
                | ViewId::PhotoAlbums
                | ViewId::PhotoUpload
                | ViewId::VideoSearch
                | ViewId::Webcam
                | ViewId::Youtube
        )
    }

    /// Look up a view by its symbolic name (`"DOCS_IMAGES"`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|view| view.name() == name)
    }

    /// Look up a view by its external value (`"docs-images"`)
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|view| view.as_str() == value)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = Error;

    /// Accepts the external value or the symbolic name
    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| Error::invalid(format!("unknown view '{}'", s)))
    }
}
