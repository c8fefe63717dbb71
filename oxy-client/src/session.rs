//! Session / identity
//!
//! Explicit session object: it owns the persisted token and the resolved
//! user, and is handed to whatever needs to know who is logged in.

use crate::api::AuthApi;
use crate::credential::TokenStore;
use crate::error::ClientResult;
use shared::client::{LoginRequest, SignupRequest, SignupResponse};
use shared::models::{Role, User};
use tracing::{info, warn};

/// Authenticated identity plus the token store backing it
pub struct Session<A: AuthApi> {
    auth: A,
    store: TokenStore,
    user: Option<User>,
}

impl<A: AuthApi> Session<A> {
    /// Create an anonymous session; call [`restore`](Self::restore) to pick
    /// up a persisted token
    pub fn new(auth: A, store: TokenStore) -> Self {
        Self {
            auth,
            store,
            user: None,
        }
    }

    /// Create a session and immediately restore any persisted token
    pub async fn init(auth: A, store: TokenStore) -> Self {
        let mut session = Self::new(auth, store);
        session.restore().await;
        session
    }

    /// Resolve the persisted token into a user
    ///
    /// No token leaves the session anonymous. A token the backend no longer
    /// accepts (or any failure resolving it) is deleted; the failure is
    /// logged, not returned.
    pub async fn restore(&mut self) -> Option<&User> {
        let Some(stored) = self.store.load() else {
            self.user = None;
            return None;
        };

        self.auth.set_token(Some(stored.token));
        match self.auth.me().await {
            Ok(user) => {
                info!(user_id = user.id, role = user.role_name().unwrap_or("-"), "session restored");
                self.user = Some(user);
            }
            Err(e) => {
                warn!(error = %e, "session restore failed, discarding stored token");
                self.auth.set_token(None);
                if let Err(e) = self.store.delete() {
                    warn!(path = %self.store.path().display(), error = %e, "failed to delete token file");
                }
                self.user = None;
            }
        }
        self.user.as_ref()
    }

    /// Log in, persist the token and record the user
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<&User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.auth.login(&request).await?;
        self.store.save(&response.token)?;
        self.auth.set_token(Some(response.token));
        info!(user_id = response.user.id, role = response.user.role_name().unwrap_or("-"), "logged in");
        Ok(self.user.insert(response.user))
    }

    /// Create an account; does not log in
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<SignupResponse> {
        let request = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.auth.signup(&request).await?;
        info!(username, "account created");
        Ok(response)
    }

    /// Forget the user, the client token and the persisted token
    pub fn logout(&mut self) -> ClientResult<()> {
        if let Some(user) = self.user.take() {
            info!(user_id = user.id, "logged out");
        }
        self.auth.set_token(None);
        self.store.delete()?;
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Normalized role of the current user
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(User::role)
    }

    /// Raw role name, including names outside the known set
    pub fn role_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(User::role_name)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use async_trait::async_trait;
    use shared::client::LoginResponse;
    use shared::models::RoleRef;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct FakeAuth {
        token: Arc<Mutex<Option<String>>>,
    }

    fn engineer() -> User {
        User {
            id: 7,
            username: "E7".into(),
            email: Some("e7@oxy.example".into()),
            role: None,
            role_ref: Some(RoleRef {
                name: "Engineer".into(),
            }),
            customer_id: None,
            customer: None,
        }
    }

    #[async_trait]
    impl AuthApi for FakeAuth {
        async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
            if request.password != "secret" {
                return Err(ClientError::Unauthorized("Invalid credentials".into()));
            }
            Ok(LoginResponse {
                token: "good-token".into(),
                user: engineer(),
            })
        }

        async fn signup(&self, _request: &SignupRequest) -> ClientResult<SignupResponse> {
            Ok(SignupResponse::default())
        }

        async fn me(&self) -> ClientResult<User> {
            match self.token().as_deref() {
                Some("good-token") => Ok(engineer()),
                _ => Err(ClientError::Unauthorized("Token expired".into())),
            }
        }

        fn token(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }

        fn set_token(&self, token: Option<String>) {
            *self.token.lock().unwrap() = token;
        }
    }

    fn store(dir: &TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("token.json"))
    }

    #[tokio::test]
    async fn test_restore_without_token_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let session = Session::init(FakeAuth::default(), store(&dir)).await;
        assert!(!session.is_authenticated());
        assert!(session.auth().token().is_none());
    }

    #[tokio::test]
    async fn test_restore_valid_token() {
        let dir = TempDir::new().unwrap();
        store(&dir).save("good-token").unwrap();

        let session = Session::init(FakeAuth::default(), store(&dir)).await;
        assert_eq!(session.role(), Some(Role::Engineer));
        assert_eq!(session.auth().token().as_deref(), Some("good-token"));
    }

    #[tokio::test]
    async fn test_restore_rejected_token_is_deleted() {
        let dir = TempDir::new().unwrap();
        store(&dir).save("stale-token").unwrap();

        let session = Session::init(FakeAuth::default(), store(&dir)).await;
        assert!(!session.is_authenticated());
        assert!(session.auth().token().is_none());
        assert!(!store(&dir).exists());
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(FakeAuth::default(), store(&dir));

        let err = session.login("e7@oxy.example", "wrong").await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized(_)));
        assert!(!store(&dir).exists());

        let user = session.login("e7@oxy.example", "secret").await.unwrap();
        assert_eq!(user.username, "E7");
        assert_eq!(store(&dir).load().unwrap().token, "good-token");
        assert_eq!(session.role_name(), Some("Engineer"));

        session.logout().unwrap();
        assert!(session.user().is_none());
        assert!(session.auth().token().is_none());
        assert!(!store(&dir).exists());
    }
}
