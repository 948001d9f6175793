//! Account registration and login.
//!
//! Password storage uses a per-user random salt with a SHA-256 digest; the
//! plain credential never reaches the data layer. Login failures for an
//! unknown email and for a wrong password are deliberately indistinguishable.

use rand::RngCore;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{RegisterParams, User},
    service::token::TokenService,
};

const SALT_LENGTH: usize = 16;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account.
    ///
    /// # Arguments
    /// - `params`: Email, plain password, and role for the new account
    ///
    /// # Returns
    /// - `Ok(User)`: The created account
    /// - `Err(AppError::BadRequest)`: The email is already taken
    /// - `Err(AppError)`: Database error
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "There is a user with that email already.".to_string(),
            ));
        }

        let user = repo
            .create(params.email, hash_password(&params.password), params.role)
            .await?;

        tracing::info!(user_id = user.id, "account created");

        Ok(User::from_entity(user))
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Arguments
    /// - `email`: Account email
    /// - `password`: Plain password
    ///
    /// # Returns
    /// - `Ok((token, user))`: Signed bearer token and the logged-in account
    /// - `Err(AppError::BadRequest)`: Unknown email or wrong password
    /// - `Err(AppError)`: Database error
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AppError::BadRequest("Invalid email or password.".to_string()));
        };

        if !verify_password(password, &user.password) {
            return Err(AppError::BadRequest("Invalid email or password.".to_string()));
        }

        let token = self.tokens.issue(user.id);

        Ok((token, User::from_entity(user)))
    }
}

/// Hashes a plain password with a fresh random salt.
///
/// The stored form is `<salt_hex>$<digest_hex>`.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH];
    rand::rng().fill_bytes(&mut salt);

    format!("{}${}", hex::encode(salt), hex::encode(digest(&salt, password)))
}

/// Checks a plain password against its stored salted hash.
///
/// Unparseable stored values simply fail the check.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    hex::encode(digest(&salt, password)) == digest_hex
}

fn digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
