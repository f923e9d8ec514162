use crate::error::{Error, Result};
use secrecy::SecretString;
use std::sync::{Arc, RwLock};

/// Environment variable holding the login username.
pub const USERNAME_VAR: &str = "ORANGEHRM_USERNAME";
/// Environment variable holding the login password.
pub const PASSWORD_VAR: &str = "ORANGEHRM_PASSWORD";

/// Login credentials for the application under test.
///
/// Both values are held as [`SecretString`] so they never show up in `Debug`
/// output or error messages; callers expose them only at the point of use.
pub struct Credentials {
    username: SecretString,
    password: SecretString,
}

impl Credentials {
    /// Load credentials from the process environment, reading a local `.env`
    /// file first if one exists.
    ///
    /// Both variables are required and must be non-blank; validation fails
    /// here, before any browser session is created.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            username: SecretString::from(required_var(USERNAME_VAR)?),
            password: SecretString::from(required_var(PASSWORD_VAR)?),
        })
    }

    pub fn username(&self) -> &SecretString {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(Error::ConfigValidation(format!("{name} must not be blank"))),
        Err(_) => Err(Error::ConfigValidation(format!("{name} is not set"))),
    }
}

/// Process-wide credential cache with an explicit lifecycle.
///
/// Credentials are loaded lazily on first [`get`](Self::get) and reused for
/// the life of the store. Tests that mutate the underlying environment
/// variables call [`refresh`](Self::refresh) (or [`invalidate`](Self::invalidate))
/// to rebuild the cached value; nothing refreshes implicitly.
pub struct SecretStore {
    cached: RwLock<Option<Arc<Credentials>>>,
}

impl SecretStore {
    pub const fn new() -> Self {
        Self { cached: RwLock::new(None) }
    }

    /// Get the cached credentials, loading them from the environment on
    /// first access.
    pub fn get(&self) -> Result<Arc<Credentials>> {
        if let Some(credentials) = self.cached.read().expect("secret store lock poisoned").as_ref() {
            return Ok(credentials.clone());
        }

        self.refresh()
    }

    /// Reload credentials from the environment and replace the cached value.
    pub fn refresh(&self) -> Result<Arc<Credentials>> {
        let credentials = Arc::new(Credentials::from_env()?);
        *self.cached.write().expect("secret store lock poisoned") = Some(credentials.clone());
        Ok(credentials)
    }

    /// Drop the cached value; the next [`get`](Self::get) reloads.
    pub fn invalidate(&self) {
        *self.cached.write().expect("secret store lock poisoned") = None;
    }
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}
