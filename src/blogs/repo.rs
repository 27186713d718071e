use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::blogs::dto::UpdateBlogRequest;

/// Blog post record. `is_deleted` is the soft-delete flag: trash sets it,
/// restore clears it, hard delete removes the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub synopsis: String,
    pub content: String,
    pub featured_image_url: String,
    pub is_deleted: bool,
    pub created_at: OffsetDateTime,
}

const BLOG_COLUMNS: &str =
    "id, user_id, title, synopsis, content, featured_image_url, is_deleted, created_at";

impl Blog {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        synopsis: &str,
        featured_image_url: &str,
        content: &str,
    ) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            r#"
            INSERT INTO blogs (user_id, title, synopsis, featured_image_url, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(title)
        .bind(synopsis)
        .bind(featured_image_url)
        .bind(content)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }

    /// Every record, trashed included; the listing endpoint does not
    /// filter on `is_deleted`.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Blog>> {
        let blogs = sqlx::query_as::<_, Blog>(&format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(db)
        .await?;
        Ok(blogs)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(blog)
    }

    /// Overwrites only the fields present in the request.
    pub async fn update_fields(
        db: &PgPool,
        id: Uuid,
        fields: &UpdateBlogRequest,
    ) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            r#"
            UPDATE blogs
            SET title = COALESCE($2, title),
                synopsis = COALESCE($3, synopsis),
                featured_image_url = COALESCE($4, featured_image_url),
                content = COALESCE($5, content)
            WHERE id = $1
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.synopsis)
        .bind(&fields.featured_image_url)
        .bind(&fields.content)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }

    pub async fn set_deleted(db: &PgPool, id: Uuid, is_deleted: bool) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            r#"
            UPDATE blogs
            SET is_deleted = $2
            WHERE id = $1
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(is_deleted)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }

    /// Permanent removal; returns the row's last known values.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(&format!(
            r#"
            DELETE FROM blogs
            WHERE id = $1
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_serializes_camel_case() {
        let blog = Blog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Hello".into(),
            synopsis: "A greeting".into(),
            content: "Hello, world.".into(),
            featured_image_url: "https://example.com/hello.png".into(),
            is_deleted: false,
            created_at: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_value(&blog).unwrap();
        assert!(json.get("featuredImageUrl").is_some());
        assert!(json.get("isDeleted").is_some());
        assert!(json.get("userId").is_some());
        assert_eq!(json["isDeleted"], serde_json::json!(false));
    }
}
