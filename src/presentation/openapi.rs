use crate::application::auth::login::LoginRequest;
use crate::application::auth::refresh::RefreshTokenRequest;
use crate::application::auth::token_utils::TokenResponse;
use crate::application::links::create::CreateLinkRequest;
use crate::application::users::create::RegisterUserRequest;
use crate::domain::links::Link;
use crate::domain::users::User;
use crate::presentation::handlers::links::LinkStats;
use crate::shared::error::{ErrorDetail, ErrorResponse};
use crate::shared::response::ApiResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kurz API",
        version = "0.1.0",
        description = "URL-shortening service with token-based authentication"
    ),
    paths(
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::refresh_token,
        crate::presentation::handlers::users::register_user,
        crate::presentation::handlers::users::get_me,
        crate::presentation::handlers::users::disable_me,
        crate::presentation::handlers::links::create_link,
        crate::presentation::handlers::links::list_links,
        crate::presentation::handlers::links::get_link,
        crate::presentation::handlers::links::disable_link,
        crate::presentation::handlers::links::link_stats,
        crate::presentation::handlers::redirect::resolve,
    ),
    components(
        schemas(
            // Request DTOs
            LoginRequest,
            RefreshTokenRequest,
            RegisterUserRequest,
            CreateLinkRequest,

            // Response types
            TokenResponse,
            User,
            Link,
            LinkStats,
            ApiResponse<TokenResponse>,
            ApiResponse<User>,
            ApiResponse<Link>,
            ApiResponse<Vec<Link>>,
            ApiResponse<LinkStats>,

            // Error types
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User registration and account endpoints"),
        (name = "links", description = "Link management endpoints"),
        (name = "redirect", description = "Public short-link redirection")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

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
            )
        }
    }
}
