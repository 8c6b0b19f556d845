use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::db::store::SharedStore;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[get("")]
pub async fn health(
    _req: actix_web::HttpRequest,
    db: web::Data<SharedStore>,
) -> ApiResult<Response> {
    db.ping().await?;

    Ok(ApiResponse::EmptyOk)
}
