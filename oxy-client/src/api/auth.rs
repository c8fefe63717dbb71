use super::AuthApi;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use async_trait::async_trait;
use shared::client::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use shared::models::User;

#[async_trait]
impl AuthApi for NetworkHttpClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        request.validate()?;
        self.post("/auth/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> ClientResult<SignupResponse> {
        request.validate()?;
        self.post("/auth/signup", request).await
    }

    async fn me(&self) -> ClientResult<User> {
        self.get("/auth/me").await
    }

    fn token(&self) -> Option<String> {
        NetworkHttpClient::token(self)
    }

    fn set_token(&self, token: Option<String>) {
        NetworkHttpClient::set_token(self, token)
    }
}
