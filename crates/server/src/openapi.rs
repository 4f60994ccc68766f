use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StarredViewDoc { pub id: Uuid, pub comment: Option<String>, pub name: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct StarredEntryDoc { pub id: Uuid, pub restaurantId: String, pub comment: Option<String> }

/// `id` is the catalog restaurant id.
#[derive(ToSchema)]
pub struct CreateStarredRequestDoc { pub id: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UpdateCommentRequestDoc { pub newComment: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::starred::list,
        crate::routes::starred::get,
        crate::routes::starred::create,
        crate::routes::starred::delete,
        crate::routes::starred::update_comment,
    ),
    components(
        schemas(
            HealthResponse,
            StarredViewDoc,
            StarredEntryDoc,
            CreateStarredRequestDoc,
            UpdateCommentRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "starred")
    )
)]
pub struct ApiDoc;
