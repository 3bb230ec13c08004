use crate::{
    error::{Result, TidalError},
    tidal::{Client, require},
    types::{Album, Artist, IdsParams, PaginationParams, ResourceId},
    utils::join_ids,
};

impl Client {
    /// Retrieves a single artist by its TIDAL ID.
    ///
    /// # Errors
    ///
    /// Fails with [`TidalError::MissingParameter`] for an empty ID without
    /// sending a request.
    ///
    /// # Example
    ///
    /// ```
    /// let artist = client.get_single_artist("5907")?;
    /// println!("{} - {}", artist.name, artist.tidal_url);
    /// ```
    pub fn get_single_artist(&self, id: &str) -> Result<Artist> {
        require(id, "id")?;
        self.get_resource("single artist", &format!("/artists/{}", id))
    }

    /// Retrieves one page of an artist's albums.
    ///
    /// The caller drives pagination through `params`; see
    /// [`Client::get_all_albums_by_artist`] for the whole discography.
    pub fn get_albums_by_artist(&self, id: &str, params: PaginationParams) -> Result<Vec<Album>> {
        require(id, "id")?;
        self.get_list("albums by artist", &format!("/artists/{}/albums", id), &params)
    }

    /// Retrieves every album of an artist, 100 albums per request.
    pub fn get_all_albums_by_artist(&self, id: &str) -> Result<Vec<Album>> {
        require(id, "id")?;
        self.paginate("albums by artist", &format!("/artists/{}/albums", id))
    }

    /// Retrieves several artists in one request.
    ///
    /// # Errors
    ///
    /// Fails with [`TidalError::MissingParameter`] when `ids` is empty.
    pub fn get_multiple_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Artist>> {
        if ids.is_empty() {
            return Err(TidalError::MissingParameter("ids"));
        }

        self.get_list("multiple artists", "/artists", &IdsParams { ids: join_ids(ids) })
    }

    /// Lists the IDs of artists similar to the given one.
    ///
    /// Feed the result to [`Client::get_multiple_artists`] to load the
    /// artists.
    pub fn get_similar_artists(&self, id: &str, params: PaginationParams) -> Result<Vec<String>> {
        require(id, "id")?;
        let similar: Vec<ResourceId> =
            self.get_list("similar artists", &format!("/artists/{}/similar", id), &params)?;
        Ok(similar.into_iter().map(|r| r.id).collect())
    }
}
