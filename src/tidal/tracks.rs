use crate::{
    error::{Result, TidalError},
    tidal::{Client, require},
    types::{IdsParams, IsrcParams, PaginationParams, Track},
    utils::join_ids,
};

impl Client {
    /// Retrieves a single track by its TIDAL ID.
    ///
    /// # Example
    ///
    /// ```
    /// let track = client.get_single_track("51584179")?;
    /// println!("{} - {}", track.title, track.album.title);
    /// ```
    pub fn get_single_track(&self, id: &str) -> Result<Track> {
        require(id, "id")?;
        self.get_resource("single track", &format!("/tracks/{}", id))
    }

    /// Retrieves the tracks registered under an ISRC.
    ///
    /// The same recording is usually released on several albums, so one
    /// ISRC resolves to many tracks. `params` pages through them.
    ///
    /// # Errors
    ///
    /// Fails with [`TidalError::MissingParameter`] for an empty ISRC.
    pub fn get_tracks_by_isrc(&self, isrc: &str, params: PaginationParams) -> Result<Vec<Track>> {
        require(isrc, "isrc")?;
        self.get_list(
            "tracks by ISRC",
            "/tracks/byIsrc",
            &IsrcParams {
                isrc,
                pagination: params,
            },
        )
    }

    pub fn get_multiple_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Track>> {
        if ids.is_empty() {
            return Err(TidalError::MissingParameter("ids"));
        }

        self.get_list("multiple tracks", "/tracks", &IdsParams { ids: join_ids(ids) })
    }
}
