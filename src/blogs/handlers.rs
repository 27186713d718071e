use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthSession,
    blogs::{
        dto::{BlogEnvelope, CreateBlogRequest, UpdateBlogRequest},
        repo::Blog,
    },
    error::ApiError,
    state::AppState,
};

pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog).get(list_blogs))
        .route(
            "/blogs/:id",
            get(get_blog).patch(update_blog).delete(delete_blog),
        )
        .route("/blogs/trash/:id", patch(trash_blog))
        .route("/blogs/restore/:id", patch(restore_blog))
}

/// The owner id is stamped from the session claims; a `userId` supplied
/// in the body is ignored.
#[instrument(skip(state, session, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    let blog = Blog::create(
        &state.db,
        session.0.user.id,
        &payload.title,
        &payload.synopsis,
        &payload.featured_image_url,
        &payload.content,
    )
    .await?;

    info!(blog_id = %blog.id, user_id = %blog.user_id, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}

/// Public read; returns every record, trashed posts included.
#[instrument(skip(state))]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    let blogs = Blog::list_all(&state.db).await?;
    Ok(Json(blogs))
}

#[instrument(skip(state, _session))]
pub async fn get_blog(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogEnvelope>, ApiError> {
    let blog = Blog::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Blog not found"))?;
    Ok(Json(BlogEnvelope {
        message: "Blog found".into(),
        blog,
    }))
}

#[instrument(skip(state, _session, payload))]
pub async fn update_blog(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<BlogEnvelope>, ApiError> {
    let blog = Blog::update_fields(&state.db, id, &payload).await?;
    info!(blog_id = %blog.id, "blog updated");
    Ok(Json(BlogEnvelope {
        message: "Your blog updated successfully".into(),
        blog,
    }))
}

#[instrument(skip(state, _session))]
pub async fn trash_blog(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogEnvelope>, ApiError> {
    let blog = Blog::set_deleted(&state.db, id, true).await?;
    info!(blog_id = %blog.id, "blog trashed");
    Ok(Json(BlogEnvelope {
        message: "Your Blog has been put into trash".into(),
        blog,
    }))
}

#[instrument(skip(state, _session))]
pub async fn restore_blog(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogEnvelope>, ApiError> {
    let blog = Blog::set_deleted(&state.db, id, false).await?;
    info!(blog_id = %blog.id, "blog restored");
    Ok(Json(BlogEnvelope {
        message: "Your Blog has been restored".into(),
        blog,
    }))
}

#[instrument(skip(state, _session))]
pub async fn delete_blog(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogEnvelope>, ApiError> {
    let blog = Blog::delete(&state.db, id).await?;
    info!(blog_id = %blog.id, "blog deleted");
    Ok(Json(BlogEnvelope {
        message: "Your Blog has been deleted successfully".into(),
        blog,
    }))
}
