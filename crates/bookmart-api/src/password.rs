use anyhow::{Result, anyhow};
use argon2::{
    Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use rand_core::OsRng;

/// How account passwords are stored and checked. Handlers only ever talk to
/// this trait, so the scheme can change without touching route logic.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    /// `Ok(false)` on a wrong password; `Err` only if `stored` is unreadable.
    fn verify(&self, password: &str, stored: &str) -> Result<bool>;
}

/// Argon2id with a random per-password salt, stored in PHC string format.
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom cost parameters, e.g. cheap ones for tests.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Password hashing failed: {}", e))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool> {
        let parsed =
            PasswordHash::new(stored).map_err(|e| anyhow!("Stored password hash unreadable: {}", e))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow!("Password verification failed: {}", e)),
        }
    }
}
