//! crates/edubloom_core/src/auth.rs
//!
//! The mock sign-in flow. Nothing is verified except the built-in admin
//! credentials; the signed-in identity lives in a small key-value store so
//! it can be restored later.

use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Role, User};

pub const ADMIN_EMAIL: &str = "admin@wetute.com";
pub const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_ID: &str = "1";
const ADMIN_NAME: &str = "Administrator";

pub const KEY_IS_AUTHENTICATED: &str = "isAuthenticated";
pub const KEY_USER_ROLE: &str = "userRole";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_USER_ID: &str = "userId";

const ALL_KEYS: [&str; 5] = [
    KEY_IS_AUTHENTICATED,
    KEY_USER_ROLE,
    KEY_USER_EMAIL,
    KEY_USER_NAME,
    KEY_USER_ID,
];

//=========================================================================================
// Persistence
//=========================================================================================

/// String-keyed persistence for the signed-in identity.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

//=========================================================================================
// Session
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// What the front-end reads from the auth context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthView {
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

pub struct AuthSession<S: KeyValueStore> {
    storage: S,
    user: Option<AuthUser>,
    loading: bool,
}

impl<S: KeyValueStore> AuthSession<S> {
    /// Rebuilds the signed-in user from `storage`.
    ///
    /// Needs the flag, role and email; name and id fall back to `"User"` and `"1"`.
    /// A stored role of `"user"` is read as a student.
    pub fn restore(storage: S) -> Self {
        let user = match (
            storage.get(KEY_IS_AUTHENTICATED),
            storage.get(KEY_USER_ROLE),
            storage.get(KEY_USER_EMAIL),
        ) {
            (Some(_), Some(role), Some(email)) => Some(AuthUser {
                id: storage.get(KEY_USER_ID).unwrap_or_else(|| ADMIN_ID.to_string()),
                name: storage.get(KEY_USER_NAME).unwrap_or_else(|| "User".to_string()),
                role: parse_stored_role(&role),
                email,
            }),
            _ => None,
        };

        Self {
            storage,
            user,
            loading: false,
        }
    }

    /// Signs in. `known` is the stored user with this email, if any.
    ///
    /// Only a blank email fails.
    pub fn login(&mut self, email: &str, password: &str, known: Option<&User>) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        self.loading = true;

        let user = if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            AuthUser {
                id: ADMIN_ID.to_string(),
                email: ADMIN_EMAIL.to_string(),
                name: ADMIN_NAME.to_string(),
                role: Role::Admin,
            }
        } else {
            match known {
                // Stored admins other than the built-in credentials sign in as students.
                Some(user) if user.role != Role::Admin || password == ADMIN_PASSWORD => AuthUser {
                    id: user.id.clone(),
                    email: user.email.clone(),
                    name: user.name.clone(),
                    role: user.role,
                },
                _ => AuthUser {
                    id: Uuid::new_v4().to_string(),
                    email: email.to_string(),
                    name: local_part(email).to_string(),
                    role: Role::Student,
                },
            }
        };

        info!(email = %user.email, role = %user.role, "signed in");
        self.sign_in(user);
        true
    }

    /// Registers a new student and signs them in. Only a blank email fails.
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        self.loading = true;

        let user = AuthUser {
            id: Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: Role::Student,
        };
        info!(email = %user.email, "signed up");
        self.sign_in(user);
        true
    }

    pub fn logout(&mut self) {
        for key in ALL_KEYS {
            self.storage.remove(key);
        }
        self.user = None;
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn view(&self) -> AuthView {
        AuthView {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
            loading: self.loading,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn sign_in(&mut self, user: AuthUser) {
        self.storage.set(KEY_IS_AUTHENTICATED, "true".to_string());
        self.storage.set(KEY_USER_ROLE, user.role.as_str().to_string());
        self.storage.set(KEY_USER_EMAIL, user.email.clone());
        self.storage.set(KEY_USER_NAME, user.name.clone());
        self.storage.set(KEY_USER_ID, user.id.clone());
        self.user = Some(user);
        self.loading = false;
    }
}

fn parse_stored_role(raw: &str) -> Role {
    raw.parse().unwrap_or(Role::Student)
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
