use utoipa::OpenApi;

use crate::{
    api::models::ErrorResponse,
    core::models::{Group, GroupPayload, Member},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_groups,
        super::handlers::get_group,
        super::handlers::create_group,
        super::handlers::update_group
    ),
    components(schemas(Group, GroupPayload, Member, ErrorResponse)),
    info(
        title = "Groupease API",
        description = "API for managing groups within channels",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
