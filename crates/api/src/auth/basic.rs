//! HTTP Basic credential parsing and verification for the admin gate.
//!
//! The admin username is fixed; the password is a single process-wide secret
//! read at startup. Both fields are compared in constant time over SHA-256
//! digests so neither their contents nor their lengths leak through timing.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// The only accepted admin username.
pub const ADMIN_USERNAME: &str = "admin";

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const REALM: &str = "Collective";

/// Value of the `WWW-Authenticate` header sent with every 401.
pub const CHALLENGE: &str = "Basic realm=\"Collective\"";

/// Username and password decoded from an `Authorization: Basic` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decode an `Authorization` header value of the form `Basic <base64>`.
///
/// Returns `None` for any other scheme, invalid base64, non-UTF-8 content or
/// a payload without a `:` separator. The scheme name is case-insensitive.
pub fn parse_basic_auth(header: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// The admin secret, compared against incoming Basic credentials.
#[derive(Clone)]
pub struct AdminCredentials {
    password: String,
}

impl AdminCredentials {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Check `credentials` against `admin` and the configured password.
    ///
    /// Both comparisons always run, so a wrong username costs the same as a
    /// wrong password.
    pub fn verify(&self, credentials: &BasicCredentials) -> bool {
        let username_ok =
            constant_time_eq(credentials.username.as_bytes(), ADMIN_USERNAME.as_bytes());
        let password_ok =
            constant_time_eq(credentials.password.as_bytes(), self.password.as_bytes());
        username_ok & password_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &ADMIN_USERNAME)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let hash_a = Sha256::digest(a);
    let hash_b = Sha256::digest(b);
    hash_a.ct_eq(&hash_b).into()
}

/// Build the header value a client would send for `username:password`.
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
