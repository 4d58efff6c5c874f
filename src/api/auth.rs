use super::ApiClient;
use crate::errors::AppResult;
use crate::models::session::{
    LoginRequest, LoginResponse, PasswordUpdate, ServerMessage, Session, SessionCheck,
};
use reqwest::Method;

impl ApiClient {
    /// `POST /login`. The caller persists the returned session.
    pub fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        self.send_json(
            Method::POST,
            &["login"],
            &LoginRequest { username, password },
        )
    }

    /// `POST /check_session`. `Err(Unauthenticated)` means revoked (HTTP 401).
    pub fn check_session(&self, token: &str, username: &str) -> AppResult<()> {
        self.send_for_message(
            Method::POST,
            &["check_session"],
            Some(&SessionCheck { token, username }),
        )?;
        Ok(())
    }

    pub fn update_password(
        &self,
        session: &Session,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<ServerMessage> {
        self.send_for_message(
            Method::POST,
            &["update_password"],
            Some(&PasswordUpdate {
                username: session.username(),
                token: &session.token,
                current_password,
                new_password,
            }),
        )
    }
}
