use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PostDoc { pub id: u64, pub title: String, pub content: String }

#[derive(ToSchema)]
pub struct CreatePostDoc { pub title: String, pub content: String }

#[derive(ToSchema)]
pub struct UpdatePostDoc { pub title: Option<String>, pub content: Option<String> }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::posts::list_posts,
        crate::routes::posts::search_posts,
        crate::routes::posts::create_post,
        crate::routes::posts::get_post,
        crate::routes::posts::update_post,
        crate::routes::posts::delete_post,
    ),
    components(
        schemas(
            HealthResponse,
            PostDoc,
            CreatePostDoc,
            UpdatePostDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts")
    )
)]
pub struct ApiDoc;
