mod common;

use anyhow::Result;
use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, unique_name, TEST_SECRET};
use mod_api_rust::auth::TokenService;
use mod_api_rust::types::Role;

#[tokio::test]
async fn reads_require_a_token() -> Result<()> {
    let app = spawn_app().await?;

    for path in ["/mods", "/mods/1", "/whoami"] {
        let res = app.client.get(app.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", path);
        let body = res.json::<Value>().await?;
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    let res = app.get("/mods", "not-a-token").send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn user_token_reads_but_cannot_write() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.user_token().await?;

    let res = app.get("/mods", &token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let mods = res.json::<Vec<Value>>().await?;
    assert_eq!(mods.len(), 3);
    assert_eq!(mods[0]["name"], "Bite");

    let res = app.get("/mods/2", &token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["name"], "Ulfrun's Endurance");

    let record = json!({ "id": "9", "name": "Nope", "description": "" });
    let writes = [
        app.post("/mods", &token).json(&record),
        app.put("/mods/1", &token).json(&record),
        app.delete("/mods/1", &token),
    ];
    for request in writes {
        let res = request.send().await?;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body = res.json::<Value>().await?;
        assert_eq!(body["message"], "forbidden: admin access required");
    }

    // nothing changed
    let mods = app.get("/mods", &token).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(mods.len(), 3);
    assert_eq!(mods[0]["name"], "Bite");
    Ok(())
}

#[tokio::test]
async fn forbidden_is_decided_before_the_body_is_read() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.user_token().await?;

    let res = app
        .post("/mods", &token)
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn admin_crud_round_trip() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.admin_token().await?;
    let id = unique_name("mod");
    let record = json!({ "id": id, "name": "Primed Continuity", "description": "+55% Ability Duration" });

    let res = app.post("/mods", &token).json(&record).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, record);

    let fetched = app.get(&format!("/mods/{}", id), &token).send().await?;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>().await?, record);

    let updated = json!({ "id": id, "name": "Primed Continuity", "description": "+55% Duration (max rank)" });
    let res = app.put(&format!("/mods/{}", id), &token).json(&updated).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, updated);

    // new record went to the end and stayed there after the update
    let mods = app.get("/mods", &token).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(mods.last(), Some(&updated));

    let res = app.delete(&format!("/mods/{}", id), &token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "mod deleted");

    let res = app.get(&format!("/mods/{}", id), &token).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["message"], "mod not found");
    Ok(())
}

#[tokio::test]
async fn update_of_missing_id_leaves_store_unchanged() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.admin_token().await?;
    let before = app.get("/mods", &token).send().await?.json::<Value>().await?;

    let res = app
        .put("/mods/does-not-exist", &token)
        .json(&json!({ "id": "does-not-exist", "name": "x", "description": "y" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let after = app.get("/mods", &token).send().await?.json::<Value>().await?;
    assert_eq!(before, after);

    let res = app.delete("/mods/does-not-exist", &token).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_keeps_remaining_order() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.admin_token().await?;

    assert_eq!(app.delete("/mods/2", &token).send().await?.status(), StatusCode::OK);

    let mods = app.get("/mods", &token).send().await?.json::<Vec<Value>>().await?;
    let ids: Vec<&str> = mods.iter().filter_map(|m| m["id"].as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    Ok(())
}

#[tokio::test]
async fn duplicate_ids_are_allowed_and_first_wins() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.admin_token().await?;

    let res = app
        .post("/mods", &token)
        .json(&json!({ "id": "1", "name": "Shadow Bite", "description": "" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let first = app.get("/mods/1", &token).send().await?.json::<Value>().await?;
    assert_eq!(first["name"], "Bite");
    Ok(())
}

#[tokio::test]
async fn malformed_record_body_is_bad_request_for_admin() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.admin_token().await?;

    let res = app
        .post("/mods", &token)
        .header("content-type", "application/json")
        .body("42")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .put("/mods/1", &token)
        .header("content-type", "application/json")
        .body("{")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn foreign_and_expired_tokens_are_rejected() -> Result<()> {
    let app = spawn_app().await?;

    let foreign = TokenService::new("some-other-secret", Duration::minutes(5)).issue("admin", Role::Admin)?;
    let res = app.get("/mods", &foreign).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let ours = TokenService::new(TEST_SECRET, Duration::minutes(5));
    let stale = ours.issue_at("admin", Role::Admin, Utc::now() - Duration::minutes(6))?;
    let res = app.get("/mods", &stale).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let fresh = ours.issue_at("admin", Role::Admin, Utc::now() - Duration::minutes(4))?;
    let res = app.get("/mods", &fresh).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn bearer_prefix_is_accepted() -> Result<()> {
    let app = spawn_app().await?;
    let token = app.user_token().await?;

    let res = app.get("/mods", &format!("Bearer {}", token)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
