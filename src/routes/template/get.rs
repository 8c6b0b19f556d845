use actix_web::{get, web};

use crate::db::store::SharedStore;
use crate::routes::template::parse_template_id;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::template::TemplateRes;

/// Get checklist template by given templateId
///
/// Answers `null` when no template has the id.
#[utoipa::path(
    get,
    path = "/api/templates/{templateId}",
    tag = "Template",
    params(("templateId" = String, Path, description = "checklist template ID")),
    responses(
        (status = 200, description = "The checklist template by id, or null", body = Option<TemplateRes>),
        (status = 400, description = "Malformed template id", body = ErrorBody),
    )
)]
#[get("/{template_id}")]
pub async fn get_template(
    _req: actix_web::HttpRequest,
    db: web::Data<SharedStore>,
    path: web::Path<String>,
) -> ApiResult<Option<TemplateRes>> {
    let id = parse_template_id(&path.into_inner())?;

    let template = db.get_template(id).await?;

    Ok(ApiResponse::Ok(template.map(TemplateRes::from)))
}
