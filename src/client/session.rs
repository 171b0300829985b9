use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::members::LoginResponse;

pub const MEMBER_ID: &str = "memberId";
pub const USERS_NAME: &str = "usersName";
pub const USER_EMAIL: &str = "userEmail";
pub const CURRENT_PORTFOLIO: &str = "currentPortfolio";
pub const SESSION_TOKEN: &str = "sessionToken";

/// Client-side key-value session storage.
///
/// Lives for one browser session; logout clears every key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remember the identity returned by a successful login.
    pub fn remember_login(&mut self, login: &LoginResponse) {
        self.set(MEMBER_ID, login.member.id.to_string());
        self.set(USERS_NAME, login.member.username.clone());
        self.set(USER_EMAIL, login.member.email.clone());
        self.set(SESSION_TOKEN, login.token.clone());
    }

    pub fn member_id(&self) -> Option<Uuid> {
        self.get(MEMBER_ID).and_then(|id| Uuid::parse_str(id).ok())
    }

    pub fn username(&self) -> Option<&str> {
        self.get(USERS_NAME)
    }

    pub fn token(&self) -> Option<&str> {
        self.get(SESSION_TOKEN)
    }

    pub fn current_portfolio(&self) -> Option<Uuid> {
        self.get(CURRENT_PORTFOLIO)
            .and_then(|id| Uuid::parse_str(id).ok())
    }

    pub fn is_logged_in(&self) -> bool {
        self.username().is_some()
    }
}
