use crate::domain::links::{InsertLinkError, Link, LinkRepository, NewLink};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;

#[derive(Clone)]
pub struct PostgresLinkRepository {
    pool: DbPool,
}

impl PostgresLinkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PostgresLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, InsertLinkError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (short_key, original_url, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, short_key, original_url, user_id,
                      created_at, last_access_at, view_count, disabled
            "#,
        )
        .bind(new_link.short_key)
        .bind(new_link.original_url)
        .bind(new_link.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => InsertLinkError::DuplicateKey,
            e => InsertLinkError::Other(e.into()),
        })?;

        Ok(link)
    }

    async fn find_by_key_for_user(
        &self,
        key: &str,
        user_id: i64,
    ) -> Result<Option<Link>, anyhow::Error> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, short_key, original_url, user_id,
                   created_at, last_access_at, view_count, disabled
            FROM links
            WHERE short_key = $1 AND user_id = $2 AND disabled = FALSE
            "#,
        )
        .bind(key)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Link>, anyhow::Error> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, short_key, original_url, user_id,
                   created_at, last_access_at, view_count, disabled
            FROM links
            WHERE user_id = $1 AND disabled = FALSE
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn disable(&self, key: &str, user_id: i64) -> Result<bool, anyhow::Error> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET disabled = TRUE, last_access_at = NOW()
            WHERE short_key = $1 AND user_id = $2 AND disabled = FALSE
            "#,
        )
        .bind(key)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_view(&self, key: &str) -> Result<Option<Link>, anyhow::Error> {
        // Single statement so concurrent views never lose an increment.
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET view_count = view_count + 1, last_access_at = NOW()
            WHERE short_key = $1 AND disabled = FALSE
            RETURNING id, short_key, original_url, user_id,
                      created_at, last_access_at, view_count, disabled
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }
}
