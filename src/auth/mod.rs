//! Login, registration and logout

use crate::api::{routes, ApiClient};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, Result};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Sign in and persist the returned token and role
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.api.post(routes::LOGIN, &body).await?;
        self.api.session().save(&auth)?;
        tracing::info!(role = ?auth.role, "Signed in");
        Ok(auth)
    }

    /// Create an account. The backend does not sign the new user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.api.post_empty(routes::REGISTER, request).await?;
        tracing::info!(role = %request.role, "Registered account");
        Ok(())
    }

    pub fn logout(&self) {
        self.api.session().clear();
    }
}
