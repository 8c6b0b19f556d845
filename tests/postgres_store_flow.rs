// Store flows against a real Postgres. Needs a Docker daemon:
//   cargo test --test postgres_store_flow -- --ignored

mod common;

use actix_web::{http::StatusCode, test};
use checklist_templates::db::store::{SharedStore, TemplateStore};
use checklist_templates::types::template::{RTemplateUpdate, TemplateRes};
use common::{client::TestClient, test_data, PostgresContext};
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_and_get_round_trip() {
    let ctx = PostgresContext::new().await;

    let payload = test_data::full_template("Office");
    let created = ctx.db.create_template(payload.data.clone()).await.unwrap();

    let fetched = ctx.db.get_template(created.id).await.unwrap();
    assert!(fetched.is_some());

    let fetched = fetched.unwrap();
    assert_eq!(fetched.data, payload.data);
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_get_missing_is_none() {
    let ctx = PostgresContext::new().await;

    let fetched = ctx.db.get_template(Uuid::new_v4()).await;
    assert!(fetched.is_ok());
    assert!(fetched.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_list_delete_flow() {
    let ctx = PostgresContext::new().await;

    let mut ids = Vec::new();
    for name in ["one", "two", "three"] {
        let created = ctx.db
            .create_template(test_data::full_template(name).data)
            .await
            .unwrap();
        ids.push(created.id);
    }

    let listed = ctx.db.list_templates().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed.iter().map(|t| t.id).collect::<Vec<_>>(), ids);

    let summary = ctx.db.delete_template(ids[0]).await.unwrap();
    assert!(summary.acknowledged);
    assert_eq!(summary.deleted_count, 1);

    let listed = ctx.db.list_templates().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|t| t.id != ids[0]));

    let summary = ctx.db.delete_template(ids[0]).await.unwrap();
    assert_eq!(summary.deleted_count, 0);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_leaves_document_untouched() {
    let ctx = PostgresContext::new().await;

    let created = ctx.db
        .create_template(test_data::full_template("Office").data)
        .await
        .unwrap();

    let summary = ctx.db
        .update_template(created.id, RTemplateUpdate {
            name: Some("X".to_string()),
            age: Some(1),
            email: Some("e".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(summary.matched_count, 1);
    assert_eq!(summary.modified_count, 0);

    let fetched = ctx.db.get_template(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.data, created.data);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_ping() {
    let ctx = PostgresContext::new().await;

    assert!(ctx.db.ping().await.is_ok());
}

#[actix_web::test]
#[ignore = "requires docker"]
async fn test_http_flow_on_postgres() {
    let ctx = PostgresContext::new().await;
    let store: SharedStore = ctx.db.clone();
    let client = TestClient::new(store);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/templates")
        .set_json(test_data::sample_template_json("T1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TemplateRes = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/templates/{}", created.id))
        .to_request();
    let fetched: TemplateRes = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.data.name, "T1");
}
