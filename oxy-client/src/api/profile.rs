use super::ProfileApi;
use crate::attachment::Attachment;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use async_trait::async_trait;
use reqwest::multipart::Form;
use shared::models::{ProfileUpdate, ProfileView};

#[async_trait]
impl ProfileApi for NetworkHttpClient {
    async fn profile(&self) -> ClientResult<ProfileView> {
        self.get("/profile").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileView> {
        update.validate()?;
        self.put("/profile", update).await
    }

    async fn upload_profile_image(&self, image: &Attachment) -> ClientResult<ProfileView> {
        let form = Form::new().part("profileImage", image.to_part()?);
        self.post_multipart("/profile/image", form).await
    }
}
