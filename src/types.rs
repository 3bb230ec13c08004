use serde::{Deserialize, Serialize};
use serde_with::DefaultOnNull;
use tabled::Tabled;

use crate::utils::{ParamValue, QueryParams};

#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaMetadata {
    pub tags: Vec<String>,
}

#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub content: Vec<String>,
}

#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoProperties {
    pub content: Vec<String>,
    #[serde(rename = "video-type")]
    pub video_type: String,
}

#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderInfo {
    #[serde(rename = "providerId")]
    pub id: String,
    #[serde(rename = "providerName")]
    pub name: String,
}

/// An individual artist.
#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub picture: Vec<Image>,
    #[serde(alias = "tidalURL")]
    pub tidal_url: String,
    /// Set when the artist is the main artist of the release it is attached to.
    pub main: bool,
}

/// An individual release, as returned by the album endpoints.
#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    #[serde(alias = "barcodeID")]
    pub barcode_id: String,
    pub title: String,
    pub artists: Vec<Artist>,
    /// Running time in seconds.
    pub duration: u32,
    pub release_date: String,
    pub image_cover: Vec<Image>,
    pub video_cover: Vec<Image>,
    pub number_of_volumes: u32,
    pub number_of_tracks: u32,
    pub number_of_videos: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub copyright: String,
    pub media_metadata: MediaMetadata,
    pub properties: Properties,
    pub tidal_url: String,
    pub provider_info: ProviderInfo,
}

/// The partial album embedded in tracks and videos.
///
/// This is a projection of [`Album`] and only carries the handful of fields
/// the API nests; fetch the album by ID for the full record.
#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumSummary {
    pub id: String,
    pub title: String,
    pub image_cover: Vec<Image>,
    pub video_cover: Vec<Image>,
}

/// An individual track on an album.
#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub version: String,
    pub isrc: String,
    pub artists: Vec<Artist>,
    pub album: AlbumSummary,
    pub duration: u32,
    pub track_number: u32,
    pub volume_number: u32,
    pub copyright: String,
    pub media_metadata: MediaMetadata,
    pub properties: Properties,
    pub tidal_url: String,
    pub provider_info: ProviderInfo,
}

/// An individual music video.
#[serde_with::apply(_ => #[serde_as(deserialize_as = "DefaultOnNull")])]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub version: String,
    #[serde(rename = "image")]
    pub images: Vec<Image>,
    pub album: AlbumSummary,
    pub release_date: String,
    pub artists: Vec<Artist>,
    pub duration: u32,
    pub track_number: u32,
    pub volume_number: u32,
    pub isrc: String,
    pub copyright: String,
    pub properties: VideoProperties,
    pub tidal_url: String,
    pub provider_info: ProviderInfo,
}

/// Results of a catalog search, one list per resource kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub albums: Vec<Album>,
    pub artists: Vec<Artist>,
    pub tracks: Vec<Track>,
    pub videos: Vec<Video>,
}

/// `{"resource": {...}}` wrapper the API puts around every entity.
#[derive(Debug, Deserialize)]
pub(crate) struct Resource<T> {
    pub resource: T,
}

/// One entry of a list envelope. Multi-status responses may report an
/// entry without a resource when it could not be resolved.
#[derive(Debug, Deserialize)]
pub(crate) struct DataItem<T> {
    pub resource: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Metadata {
    pub total: u32,
}

/// `{"data": [...], "metadata": {...}}` list envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub data: Vec<DataItem<T>>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl<T> Envelope<T> {
    pub fn into_resources(self) -> Vec<T> {
        self.data
            .into_iter()
            .filter_map(|item| item.resource)
            .collect()
    }
}

/// Only the ID of a related resource, as listed by the `similar` endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ResourceId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub albums: Vec<DataItem<Album>>,
    #[serde(default)]
    pub artists: Vec<DataItem<Artist>>,
    #[serde(default)]
    pub tracks: Vec<DataItem<Track>>,
    #[serde(default)]
    pub videos: Vec<DataItem<Video>>,
}

impl From<SearchResponse> for SearchResults {
    fn from(response: SearchResponse) -> Self {
        fn unwrap_all<T>(items: Vec<DataItem<T>>) -> Vec<T> {
            items.into_iter().filter_map(|item| item.resource).collect()
        }

        SearchResults {
            albums: unwrap_all(response.albums),
            artists: unwrap_all(response.artists),
            tracks: unwrap_all(response.tracks),
            videos: unwrap_all(response.videos),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub token_type: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub expires_in: u64,
}

/// Offset/limit pair accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u32,
    pub limit: u32,
}

impl QueryParams for PaginationParams {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("offset", self.offset.into()),
            ("limit", self.limit.into()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Albums,
    Artists,
    Tracks,
    Videos,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Albums => "ALBUMS",
            SearchType::Artists => "ARTISTS",
            SearchType::Tracks => "TRACKS",
            SearchType::Videos => "VIDEOS",
        }
    }
}

/// Which popularity ranking the search results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPopularity {
    Worldwide,
    Country,
}

impl SearchPopularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPopularity::Worldwide => "WORLDWIDE",
            SearchPopularity::Country => "COUNTRY",
        }
    }
}

/// Request parameters of the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query in plain text, e.g. `Beyoncé`. Required.
    pub query: String,
    /// Restricts the search to one resource kind. Searches all kinds when unset.
    pub kind: Option<SearchType>,
    pub offset: u32,
    pub limit: u32,
    /// ISO 3166-1 alpha-2 country code. Falls back to the client's country when empty.
    pub country_code: String,
    /// Worldwide popularity is used by the API when unset.
    pub popularity: Option<SearchPopularity>,
}

impl QueryParams for SearchParams {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("query", self.query.as_str().into()),
            ("type", self.kind.map(|k| k.as_str()).unwrap_or_default().into()),
            ("offset", self.offset.into()),
            ("limit", self.limit.into()),
            (
                "popularity",
                self.popularity
                    .map(|p| p.as_str())
                    .unwrap_or_default()
                    .into(),
            ),
        ]
    }
}

pub(crate) struct BarcodeParams<'a> {
    pub barcode_id: &'a str,
}

impl QueryParams for BarcodeParams<'_> {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("barcodeId", self.barcode_id.into())]
    }
}

pub(crate) struct IsrcParams<'a> {
    pub isrc: &'a str,
    pub pagination: PaginationParams,
}

impl QueryParams for IsrcParams<'_> {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)> {
        let mut fields = vec![("isrc", self.isrc.into())];
        fields.extend(self.pagination.query_fields());
        fields
    }
}

pub(crate) struct IdsParams {
    pub ids: String,
}

impl QueryParams for IdsParams {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("ids", self.ids.as_str().into())]
    }
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub released: String,
    pub tracks: u32,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    #[tabled(rename = "#")]
    pub position: String,
    pub title: String,
    pub artists: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct VideoTableRow {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub released: String,
}
