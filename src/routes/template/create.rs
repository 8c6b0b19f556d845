use actix_web::{post, web};

use crate::db::store::SharedStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::template::{RTemplateCreate, TemplateRes};

/// Create checklist template
#[utoipa::path(
    post,
    path = "/api/templates",
    tag = "Template",
    request_body = RTemplateCreate,
    responses(
        (status = 201, description = "The checklist template successfully created", body = TemplateRes),
        (status = 400, description = "Payload failed validation", body = ErrorBody),
    )
)]
#[post("")]
pub async fn create_template(
    _req: actix_web::HttpRequest,
    db: web::Data<SharedStore>,
    body: web::Json<RTemplateCreate>,
) -> ApiResult<TemplateRes> {
    let body = body.into_inner();
    body.validate()?;

    let template = db.create_template(body.data).await?;

    Ok(ApiResponse::Created(template.into()))
}
