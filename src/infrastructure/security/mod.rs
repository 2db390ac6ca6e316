// src/infrastructure/security/mod.rs
mod password;
mod token;

pub use password::Argon2PasswordHasher;
pub use token::JwtTokenManager;
