use actix_web::{delete, web};
use tracing::info;

use crate::db::store::SharedStore;
use crate::routes::template::parse_template_id;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::template::TemplateDeleteRes;

/// Remove the checklist template by templateId
#[utoipa::path(
    delete,
    path = "/api/templates/{templateId}",
    tag = "Template",
    params(("templateId" = String, Path, description = "The templateId")),
    responses(
        (status = 200, description = "The deletion summary", body = TemplateDeleteRes),
        (status = 400, description = "Malformed template id", body = ErrorBody),
    )
)]
#[delete("/{template_id}")]
pub async fn delete_template(
    _req: actix_web::HttpRequest,
    db: web::Data<SharedStore>,
    path: web::Path<String>,
) -> ApiResult<TemplateDeleteRes> {
    let id = parse_template_id(&path.into_inner())?;

    let summary = db.delete_template(id).await?;
    if summary.deleted_count > 0 {
        info!("Deleted template {}", id);
    }

    Ok(ApiResponse::Ok(summary))
}
