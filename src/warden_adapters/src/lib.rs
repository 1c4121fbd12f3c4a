pub mod clock;
pub mod config;
pub mod hashing;
pub mod persistence;
pub mod token;

pub use clock::SystemClock;
pub use config::{AllowedOrigins, AuthServiceSetting};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapAccountStore, PostgresAccountStore};
pub use token::{JwtConfig, JwtTokenCodec};
