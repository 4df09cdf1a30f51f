//! Site settings endpoints, including the homepage banner upload.

use mayan_core::SiteSettings;
use reqwest::multipart;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Accessor for `/settings` endpoints.
#[derive(Debug)]
pub struct SettingsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl SettingsApi<'_> {
    /// `GET /settings`.
    pub async fn get(&self) -> ApiResult<SiteSettings> {
        self.client.get("/settings").await
    }

    /// `PUT /settings`.
    pub async fn update(&self, settings: &SiteSettings) -> ApiResult<SiteSettings> {
        self.client.put("/settings", settings).await
    }

    /// `POST /settings/banner` - multipart upload of the homepage banner
    /// image. Returns the settings with the new banner URL.
    pub async fn upload_banner(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<SiteSettings> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("banner", part);
        self.client.post_multipart("/settings/banner", form).await
    }
}
