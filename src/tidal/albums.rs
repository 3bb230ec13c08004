use crate::{
    error::{Result, TidalError},
    tidal::{Client, require},
    types::{Album, BarcodeParams, IdsParams, PaginationParams, ResourceId, Track},
    utils::join_ids,
};

impl Client {
    /// Retrieves a single album by its TIDAL ID.
    ///
    /// # Arguments
    ///
    /// * `id` - TIDAL album ID, e.g. `51584178`
    ///
    /// # Errors
    ///
    /// Fails with [`TidalError::MissingParameter`] for an empty ID without
    /// sending a request. Transport, status and decoding errors are wrapped
    /// with the endpoint name.
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.get_single_album("51584178")?;
    /// println!("{} - {}", album.title, album.artists[0].name);
    /// ```
    pub fn get_single_album(&self, id: &str) -> Result<Album> {
        require(id, "id")?;
        self.get_resource("single album", &format!("/albums/{}", id))
    }

    /// Retrieves the albums matching a barcode (EAN/UPC).
    ///
    /// A barcode can map to several releases, one per territory or edition,
    /// so the result is a list.
    ///
    /// # Example
    ///
    /// ```
    /// for album in client.get_album_by_barcode_id("197189111396")? {
    ///     println!("{}", album.title);
    /// }
    /// ```
    pub fn get_album_by_barcode_id(&self, barcode_id: &str) -> Result<Vec<Album>> {
        require(barcode_id, "barcodeId")?;
        self.get_list(
            "album by barcode",
            "/albums/byBarcodeId",
            &BarcodeParams { barcode_id },
        )
    }

    /// Retrieves several albums in one request.
    ///
    /// The endpoint answers with `207 Multi-Status`; IDs that could not be
    /// resolved are left out of the result.
    ///
    /// # Errors
    ///
    /// Fails with [`TidalError::MissingParameter`] when `ids` is empty.
    pub fn get_multiple_albums<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Album>> {
        if ids.is_empty() {
            return Err(TidalError::MissingParameter("ids"));
        }

        self.get_list(
            "multiple albums",
            "/albums/byIds",
            &IdsParams { ids: join_ids(ids) },
        )
    }

    /// Retrieves every item (tracks and videos) of an album.
    ///
    /// The listing is fetched 100 items at a time until the total reported
    /// by the API is covered. Items keep the order of the album.
    ///
    /// # Example
    ///
    /// ```
    /// for item in client.get_album_tracks("37267701")? {
    ///     println!("#{} (Vol #{}) - {}", item.track_number, item.volume_number, item.title);
    /// }
    /// ```
    pub fn get_album_tracks(&self, id: &str) -> Result<Vec<Track>> {
        require(id, "id")?;
        self.paginate("album items", &format!("/albums/{}/items", id))
    }

    /// Lists the IDs of albums similar to the given one.
    ///
    /// Only IDs are returned; pass them to [`Client::get_multiple_albums`]
    /// to load the albums themselves.
    ///
    /// # Example
    ///
    /// ```
    /// let ids = client.get_similar_albums("3992356", PaginationParams { offset: 0, limit: 10 })?;
    /// let albums = client.get_multiple_albums(&ids)?;
    /// ```
    pub fn get_similar_albums(&self, id: &str, params: PaginationParams) -> Result<Vec<String>> {
        require(id, "id")?;
        let similar: Vec<ResourceId> =
            self.get_list("similar albums", &format!("/albums/{}/similar", id), &params)?;
        Ok(similar.into_iter().map(|r| r.id).collect())
    }
}
