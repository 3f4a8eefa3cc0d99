/**
 * OpenAPI Document
 *
 * Collects the `#[utoipa::path]` annotations of every handler into one
 * OpenAPI document. Swagger UI is served under `/api-docs/` and reads the
 * document from `GET /api-docs/openapi.json`.
 *
 * The form structs below exist only to describe multipart request bodies
 * and error payloads; handlers read those bodies through `UploadForm` and
 * `BackendError`.
 */

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi, ToSchema,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, SignupResponse, UserResponse};
use crate::backend::blog::types::{BlogResponse, BlogSavedResponse, BlogWithAuthor, MessageResponse};
use crate::backend::comment::types::{AddCommentRequest, CommentAddedResponse, CommentResponse, CommentThreadEntry};
use crate::shared::FieldError;

/// Error payload: `message` for most failures, `errors` for validation
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<FieldError>>,
}

/// Signup form
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SignupForm {
    email: String,
    password: String,
    /// Image file
    #[schema(value_type = Option<String>)]
    profile_image: Option<Vec<u8>>,
}

/// Blog creation form
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BlogForm {
    title: String,
    description: String,
    /// Image file
    #[schema(value_type = String)]
    blog_image: Vec<u8>,
}

/// Blog update form; every field is optional
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BlogUpdateForm {
    title: Option<String>,
    description: Option<String>,
    /// Keep or point at an already uploaded image
    current_image: Option<String>,
    /// Replacement image file
    #[schema(value_type = Option<String>)]
    blog_image: Option<Vec<u8>>,
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Inkpost API", description = "Blogs, threaded comments and token authentication"),
    paths(
        crate::backend::auth::handlers::signup::signup,
        crate::backend::auth::handlers::login::login,
        crate::backend::users::handlers::get_me,
        crate::backend::users::handlers::get_user,
        crate::backend::blog::handlers::create_blog,
        crate::backend::blog::handlers::get_blogs,
        crate::backend::blog::handlers::get_blog_by_id,
        crate::backend::blog::handlers::update_blog,
        crate::backend::blog::handlers::delete_blog,
        crate::backend::comment::handlers::add_comment,
        crate::backend::comment::handlers::get_comments_for_blog,
    ),
    components(schemas(
        ErrorBody,
        FieldError,
        SignupForm,
        BlogForm,
        BlogUpdateForm,
        LoginRequest,
        LoginResponse,
        SignupResponse,
        UserResponse,
        BlogResponse,
        BlogWithAuthor,
        BlogSavedResponse,
        MessageResponse,
        AddCommentRequest,
        CommentResponse,
        CommentThreadEntry,
        CommentAddedResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "users", description = "User lookups"),
        (name = "blogs", description = "Blog posts"),
        (name = "comments", description = "Threaded comments"),
    )
)]
pub struct ApiDoc;

/// Mount point of the Swagger UI page
pub const DOCS_PATH: &str = "/api-docs";

/// Where the JSON document is served
pub const DOCUMENT_PATH: &str = "/api-docs/openapi.json";

/// Swagger UI over the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(DOCUMENT_PATH, ApiDoc::openapi())
}
