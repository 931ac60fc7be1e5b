//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::GuestResponse;

#[derive(OpenApi)]
#[openapi(
    paths(super::guests::list_guests),
    components(schemas(GuestResponse)),
    tags(
        (name = "Guests", description = "Wedding guest directory")
    ),
    info(
        title = "Fumi API",
        description = "Guest directory for the wedding letter"
    )
)]
pub struct ApiDoc;
