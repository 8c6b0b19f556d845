use actix_web::{get, HttpResponse};
use entity::template::{Checklist, ChecklistItem, DueUnit, TemplateData};
use utoipa::OpenApi;

use crate::routes::template;
use crate::types::error::ErrorBody;
use crate::types::template::{RTemplateCreate, RTemplateUpdate, TemplateDeleteRes, TemplateRes, TemplateUpdateRes};

#[derive(OpenApi)]
#[openapi(
    info(title = "Checklist Templates API", version = "1.0.0"),
    paths(
        template::create::create_template,
        template::list::list_templates,
        template::get::get_template,
        template::update::update_template,
        template::delete::delete_template,
    ),
    components(schemas(
        RTemplateCreate,
        RTemplateUpdate,
        TemplateRes,
        TemplateUpdateRes,
        TemplateDeleteRes,
        ErrorBody,
        TemplateData,
        Checklist,
        ChecklistItem,
        DueUnit,
    )),
    tags((name = "Template", description = "Checklist template management"))
)]
pub struct ApiDoc;

#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

const REDOC_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Checklist Templates API</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body>
    <redoc spec-url="/api-doc/openapi.json"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
  </body>
</html>
"#;

/// Interactive reader over the OpenAPI document. Assets load from the Redoc CDN.
#[get("")]
pub async fn api_doc_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(REDOC_PAGE)
}
