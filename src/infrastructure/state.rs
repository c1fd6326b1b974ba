use crate::domain::links::KeyGenerator;
use crate::domain::password::PasswordHasher;
use crate::domain::tokens::TokenCodec;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::keygen::RandomKeyGenerator;
use crate::infrastructure::password::Argon2PasswordHasher;
use crate::infrastructure::tokens::JwtTokenCodec;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub tokens: Arc<dyn TokenCodec>,
    pub password: Arc<dyn PasswordHasher>,
    pub keys: Arc<dyn KeyGenerator>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self {
            pool,
            tokens: Arc::new(JwtTokenCodec::new(&config.jwt_secret)),
            password: Arc::new(Argon2PasswordHasher::new()),
            keys: Arc::new(RandomKeyGenerator::new()),
            config: Arc::new(config),
        }
    }

    /// State with a caller-supplied key generator, used by tests that shrink
    /// the key space.
    pub fn with_key_generator(mut self, keys: Arc<dyn KeyGenerator>) -> Self {
        self.keys = keys;
        self
    }
}
