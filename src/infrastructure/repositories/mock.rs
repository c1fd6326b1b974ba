use crate::domain::links::{InsertLinkError, KeyGenerator, Link, LinkRepository, NewLink};
use crate::domain::users::{CreateUserError, NewUser, User, UserRepository};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

/// In-memory user store mirroring the Postgres repository's visibility
/// rules: disabled users are invisible to reads.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    /// Flip the disabled flag directly, bypassing `disable`, for tests that
    /// need a user to vanish mid-scenario.
    pub fn set_disabled(&self, id: i64, disabled: bool) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.disabled = disabled;
        }
    }

    pub fn stored_refresh_token(&self, id: i64) -> Option<String> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.id == id).map(|u| u.refresh_token.clone())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, CreateUserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.login == new_user.login) {
            return Err(CreateUserError::LoginTaken);
        }
        let user = User {
            id: users.len() as i64 + 1,
            login: new_user.login,
            password_hash: new_user.password_hash,
            refresh_token: String::new(),
            disabled: false,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id && !u.disabled).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.login == login && !u.disabled)
            .cloned())
    }

    async fn update_refresh_token(
        &self,
        id: i64,
        token_hash: &str,
    ) -> Result<bool, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id && !u.disabled) {
            Some(user) => {
                user.refresh_token = token_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn disable(&self, id: i64) -> Result<bool, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id && !u.disabled) {
            Some(user) => {
                user.disabled = true;
                user.refresh_token = String::new();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory link store enforcing short-key uniqueness the way the database
/// constraint does, so the collision-retry path is testable without Postgres.
#[derive(Clone, Default)]
pub struct MockLinkRepository {
    links: Arc<Mutex<Vec<Link>>>,
}

#[async_trait]
impl LinkRepository for MockLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, InsertLinkError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.short_key == new_link.short_key) {
            return Err(InsertLinkError::DuplicateKey);
        }
        let link = Link {
            id: links.len() as i64 + 1,
            short_key: new_link.short_key,
            original_url: new_link.original_url,
            user_id: new_link.user_id,
            created_at: OffsetDateTime::now_utc(),
            last_access_at: OffsetDateTime::now_utc(),
            view_count: 0,
            disabled: false,
        };
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_key_for_user(
        &self,
        key: &str,
        user_id: i64,
    ) -> Result<Option<Link>, anyhow::Error> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .find(|l| l.short_key == key && l.user_id == user_id && !l.disabled)
            .cloned())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Link>, anyhow::Error> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .filter(|l| l.user_id == user_id && !l.disabled)
            .cloned()
            .collect())
    }

    async fn disable(&self, key: &str, user_id: i64) -> Result<bool, anyhow::Error> {
        let mut links = self.links.lock().unwrap();
        match links
            .iter_mut()
            .find(|l| l.short_key == key && l.user_id == user_id && !l.disabled)
        {
            Some(link) => {
                link.disabled = true;
                link.last_access_at = OffsetDateTime::now_utc();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_view(&self, key: &str) -> Result<Option<Link>, anyhow::Error> {
        let mut links = self.links.lock().unwrap();
        match links
            .iter_mut()
            .find(|l| l.short_key == key && !l.disabled)
        {
            Some(link) => {
                link.view_count += 1;
                link.last_access_at = OffsetDateTime::now_utc();
                Ok(Some(link.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Key generator that replays a fixed sequence, then repeats the last key.
/// Stands in for a saturated key space.
pub struct SequenceKeyGenerator {
    keys: Vec<String>,
    cursor: Mutex<usize>,
}

impl SequenceKeyGenerator {
    pub fn new(keys: &[&str]) -> Self {
        assert!(!keys.is_empty());
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            cursor: Mutex::new(0),
        }
    }
}

impl KeyGenerator for SequenceKeyGenerator {
    fn generate(&self) -> String {
        let mut cursor = self.cursor.lock().unwrap();
        let key = self.keys[(*cursor).min(self.keys.len() - 1)].clone();
        *cursor += 1;
        key
    }
}
