use anyhow::Context;
use async_trait::async_trait;

use crate::db::PgStore;
use crate::posts::repo_types::Post;

/// Storage for the shared post collection. Every method is a single statement.
#[async_trait]
pub trait PostRepo: Send + Sync {
    /// All posts, newest first.
    async fn list(&self) -> anyhow::Result<Vec<Post>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Post>>;
    async fn create(&self, body: &str) -> anyhow::Result<Post>;
    /// Overwrites `body` only; `None` if no row has this id.
    async fn update(&self, id: i64, body: &str) -> anyhow::Result<Option<Post>>;
    async fn delete(&self, id: i64) -> anyhow::Result<Option<Post>>;
    /// Returns the number of rows removed.
    async fn delete_all(&self) -> anyhow::Result<u64>;
}

#[async_trait]
impl PostRepo for PgStore {
    async fn list(&self) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, body, created_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool())
        .await
        .context("list posts")?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, body, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .context("get post")?;
        Ok(row)
    }

    async fn create(&self, body: &str) -> anyhow::Result<Post> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (body)
            VALUES ($1)
            RETURNING id, body, created_at
            "#,
        )
        .bind(body)
        .fetch_one(self.pool())
        .await
        .context("insert post")?;
        Ok(row)
    }

    async fn update(&self, id: i64, body: &str) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
               SET body = $2
             WHERE id = $1
            RETURNING id, body, created_at
            "#,
        )
        .bind(id)
        .bind(body)
        .fetch_optional(self.pool())
        .await
        .context("update post")?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            DELETE FROM posts
             WHERE id = $1
            RETURNING id, body, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .context("delete post")?;
        Ok(row)
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM posts")
            .execute(self.pool())
            .await
            .context("delete all posts")?;
        Ok(result.rows_affected())
    }
}
