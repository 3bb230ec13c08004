use crate::{
    error::{Result, TidalError},
    tidal::{Client, require},
    types::{IdsParams, Video},
    utils::join_ids,
};

impl Client {
    pub fn get_single_video(&self, id: &str) -> Result<Video> {
        require(id, "id")?;
        self.get_resource("single video", &format!("/videos/{}", id))
    }

    pub fn get_multiple_videos<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Video>> {
        if ids.is_empty() {
            return Err(TidalError::MissingParameter("ids"));
        }

        self.get_list("multiple videos", "/videos", &IdsParams { ids: join_ids(ids) })
    }
}
