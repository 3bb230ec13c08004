use reqwest::Method;

use crate::{
    error::{Result, TidalError},
    tidal::{Client, decode},
    types::{SearchParams, SearchResponse, SearchResults},
};

impl Client {
    /// Searches the catalog for albums, artists, tracks and videos.
    ///
    /// All four resource kinds come back in one response unless
    /// `params.kind` narrows the search. The country code of `params` takes
    /// precedence over the one of the client.
    ///
    /// # Arguments
    ///
    /// * `params` - Query, optional type filter, pagination, country and
    ///   popularity ranking
    ///
    /// # Errors
    ///
    /// Fails with [`TidalError::MissingParameter`] before any request when
    /// the query is empty or no country code is available.
    ///
    /// # Example
    ///
    /// ```
    /// let params = SearchParams {
    ///     query: "Peso Pluma".to_string(),
    ///     country_code: "MX".to_string(),
    ///     limit: 5,
    ///     popularity: Some(SearchPopularity::Country),
    ///     ..SearchParams::default()
    /// };
    ///
    /// let results = client.search(&params)?;
    /// for album in results.albums {
    ///     println!("{} - {}", album.title, album.release_date);
    /// }
    /// ```
    pub fn search(&self, params: &SearchParams) -> Result<SearchResults> {
        let country_code = if params.country_code.is_empty() {
            self.country_code()
        } else {
            params.country_code.as_str()
        };

        if params.query.is_empty() {
            return Err(TidalError::MissingParameter("query"));
        }
        if country_code.is_empty() {
            return Err(TidalError::MissingParameter("countryCode"));
        }

        let body = self
            .request_in(Method::GET, "/search", country_code, Some(params))
            .map_err(|e| e.at("search"))?;
        let response: SearchResponse = decode("search", &body)?;

        Ok(response.into())
    }
}
