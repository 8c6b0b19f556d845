use actix_web::{put, web};
use tracing::warn;

use crate::db::store::SharedStore;
use crate::routes::template::parse_template_id;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::template::{RTemplateUpdate, TemplateUpdateRes};

/// Edit Checklist Template by given templateId
///
/// `name`, `age` and `email` are not fields of the template document, so the
/// summary always reports `modified_count = 0`.
#[utoipa::path(
    put,
    path = "/api/templates/{templateId}",
    tag = "Template",
    params(("templateId" = String, Path, description = "checklist template ID")),
    request_body = RTemplateUpdate,
    responses(
        (status = 200, description = "The update summary", body = TemplateUpdateRes),
        (status = 400, description = "Malformed template id or body", body = ErrorBody),
    )
)]
#[put("/{template_id}")]
pub async fn update_template(
    _req: actix_web::HttpRequest,
    db: web::Data<SharedStore>,
    path: web::Path<String>,
    body: web::Json<RTemplateUpdate>,
) -> ApiResult<TemplateUpdateRes> {
    let id = parse_template_id(&path.into_inner())?;
    let patch = body.into_inner();

    let dropped = patch.supplied_fields();
    if !dropped.is_empty() {
        warn!("Template {} update names fields outside the document: {:?}", id, dropped);
    }

    let summary = db.update_template(id, patch).await?;

    Ok(ApiResponse::Ok(summary))
}
