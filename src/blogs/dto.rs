use serde::{Deserialize, Serialize};

use crate::blogs::repo::Blog;

/// Request body for creating a blog. The owner id always comes from the
/// session, never from the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub synopsis: String,
    pub featured_image_url: String,
    pub content: String,
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub featured_image_url: Option<String>,
    pub content: Option<String>,
}

/// Blog record wrapped with the confirmation message the API returns on
/// get/update/trash/restore/delete.
#[derive(Debug, Serialize)]
pub struct BlogEnvelope {
    pub message: String,
    pub blog: Blog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_allows_any_subset_of_fields() {
        let req: UpdateBlogRequest = serde_json::from_str(r#"{"title": "New title"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("New title"));
        assert!(req.synopsis.is_none());
        assert!(req.featured_image_url.is_none());
        assert!(req.content.is_none());

        let req: UpdateBlogRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
    }

    #[test]
    fn create_request_reads_camel_case_body() {
        let body = r#"{
            "title": "Hello",
            "synopsis": "A greeting",
            "featuredImageUrl": "https://example.com/hello.png",
            "content": "Hello, world."
        }"#;
        let req: CreateBlogRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.featured_image_url, "https://example.com/hello.png");
    }
}
