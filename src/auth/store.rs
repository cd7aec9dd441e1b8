use bevy::log::{error, info};

use super::error::AuthError;
use super::transport::{LoginRequest, LoginTransport, User};

#[derive(Debug, Clone, PartialEq)]
struct Session {
    token: String,
    user: User,
}

/// Observable snapshot of the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Token and user for the current login, if any.
///
/// `login` borrows the store mutably for the whole request, so one store never has
/// two logins in flight.
#[derive(Debug)]
pub struct AuthStore<T> {
    transport: T,
    session: Option<Session>,
}

impl<T: LoginTransport> AuthStore<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            session: None,
        }
    }

    pub fn state(&self) -> AuthState {
        match &self.session {
            Some(s) => AuthState {
                user: Some(s.user.clone()),
                token: Some(s.token.clone()),
                is_authenticated: true,
            },
            None => AuthState::default(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces the session on success. On failure the previous state is kept and
    /// the error is handed back.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let request = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        match self.transport.post_login(&request).await {
            Ok(response) => {
                self.session = Some(Session {
                    token: response.token,
                    user: response.user,
                });
                info!(target: "auth", "login succeeded for {email}");
                Ok(())
            }
            Err(err) => {
                error!(target: "auth", "Login failed: {err}");
                Err(err)
            }
        }
    }

    /// Local only; nothing is sent to the server.
    pub fn logout(&mut self) {
        self.session = None;
    }
}
