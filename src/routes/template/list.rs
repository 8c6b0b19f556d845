use actix_web::{get, web};
use tracing::debug;

use crate::db::store::SharedStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::template::{RTemplateListQuery, TemplateRes};

/// List all checklists templates
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = "Template",
    params(RTemplateListQuery),
    responses(
        (status = 200, description = "The list all checklists template", body = [TemplateRes]),
    )
)]
#[get("")]
pub async fn list_templates(
    _req: actix_web::HttpRequest,
    db: web::Data<SharedStore>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<Vec<TemplateRes>> {
    // raw pairs so repeated or unknown keys can never fail extraction
    let pairs = query.into_inner();
    if !pairs.is_empty() {
        // filtering, sorting, projection and paging are not applied
        debug!(
            "Ignoring list query parameters: {:?}",
            RTemplateListQuery::from_pairs(&pairs)
        );
    }

    let templates = db.list_templates().await?;

    Ok(ApiResponse::Ok(templates.into_iter().map(TemplateRes::from).collect()))
}
