//! Authentication operations.

use serde::Serialize;

use aperture_shared::{AuthTokens, User};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    nickname: &'a str,
}

impl ApiClient {
    /// `POST /iam/auth/login`: exchange credentials for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens> {
        let body = LoginRequest { email, password };
        self.send(self.post("/iam/auth/login").json(&body)).await
    }

    /// `POST /iam/auth/signup`: create an account, then log in with the
    /// same credentials to obtain the token pair.
    pub async fn signup(&self, email: &str, password: &str, nickname: &str) -> Result<AuthTokens> {
        let body = SignupRequest {
            email,
            password,
            nickname,
        };
        self.send_unit(self.post("/iam/auth/signup").json(&body))
            .await?;

        self.login(email, password).await
    }

    /// `GET /iam/user/me`: the account behind the installed bearer token.
    pub async fn current_user(&self) -> Result<User> {
        self.send(self.get("/iam/user/me")).await
    }
}
