use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::{startup::build_app, AppState};
use service::{assets::HttpAssetService, users::FileUserStore};

struct TestApp {
    base_url: String,
}

async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

/// Fake market-data provider: prices derive from the symbol length, and
/// `DOWN` always answers 503.
async fn fake_day_summary(
    Path((symbol, _year, _month, _day)): Path<(String, i32, u32, u32)>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if symbol == "DOWN" {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    let base = symbol.len() as f64;
    Ok(Json(json!({"opening": base, "closing": base, "lowest": base, "highest": base * 2.0, "volume": 1.0})))
}

async fn start_server() -> anyhow::Result<TestApp> {
    let upstream = Router::new().route("/api/:symbol/day-summary/:year/:month/:day/", get(fake_day_summary));
    let upstream_url = serve(upstream).await?;

    let data_path = std::env::temp_dir().join(format!("e2e_{}.json", Uuid::new_v4()));
    let store = Arc::new(FileUserStore::open(&data_path).await?);
    let assets = HttpAssetService::new(&format!("{upstream_url}/api"), Duration::from_secs(5))?;
    let state = AppState::new(store.clone(), store, Arc::new(assets));

    let base_url = serve(build_app(state)).await?;
    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_user_favorites_and_day_summary() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/user/create", app.base_url)).json(&json!({"name": "Tester"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let users = c.get(format!("{}/user/list", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    let id = users[0]["id"].as_i64().expect("user id");

    for symbol in ["BTC", "USDC"] {
        let res = c
            .post(format!("{}/user/favorite/add", app.base_url))
            .json(&json!({"user_id": id, "symbol": symbol}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }

    let res = c.get(format!("{}/assets/day_summary/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body,
        json!([
            {"symbol": "BTC", "highest": 6.0, "lowest": 3.0},
            {"symbol": "USDC", "highest": 8.0, "lowest": 4.0}
        ])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_upstream_failure_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    c.post(format!("{}/user/create", app.base_url)).json(&json!({"name": "Tester"})).send().await?;
    for symbol in ["BTC", "DOWN"] {
        c.post(format!("{}/user/favorite/add", app.base_url))
            .json(&json!({"user_id": 1, "symbol": symbol}))
            .send()
            .await?;
    }

    let res = c.get(format!("{}/assets/day_summary/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["detail"].as_str().unwrap_or_default().contains("503"));
    Ok(())
}
