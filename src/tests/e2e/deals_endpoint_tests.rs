// End to end tests through the full router: publish with the admin token, then list.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::deals::adapters::outbound::deal_store_in_memory::InMemoryDealStore;
use crate::modules::deals::use_cases::list_deals::filter::RESULT_LIMIT;
use crate::shell::http::router;
use crate::tests::fixtures::app::{TOKEN, read_json, test_state};
use crate::tests::fixtures::deals::DealBuilder;

type BeforeEachReturn = (Arc<InMemoryDealStore>, Router);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let store = Arc::new(InMemoryDealStore::new());
    let app = router(test_state(store.clone(), Some(TOKEN)));
    (store, app)
}

fn post_deal(token: &str, body: serde_json::Value) -> Request<Body> {
    Request::post("/deals")
        .header("content-type", "application/json")
        .header("x-admin-token", token)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_deals(query: &str) -> Request<Body> {
    Request::get(format!("/deals{query}"))
        .body(Body::empty())
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_list_a_published_deal_with_normalized_fields(before_each: BeforeEachReturn) {
    let (_, app) = before_each;

    let response = app
        .clone()
        .oneshot(post_deal(
            TOKEN,
            serde_json::json!({
                "title": "Game X",
                "platform": "ps5",
                "retailer": "Store",
                "url": "http://x",
                "priceEur": 30,
                "regularEur": 50
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = read_json(response).await;
    let id = created["id"].as_str().expect("expected an id").to_string();

    let response = app.oneshot(get_deals("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    let deals = listed.as_array().unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0]["id"], serde_json::json!(id));
    assert_eq!(deals[0]["platform"], "PS5");
    assert_eq!(deals[0]["cut"], 40);
    assert_eq!(deals[0]["country"], "FR");
    assert_eq!(deals[0]["format"], "PHYSICAL");
    assert_eq!(deals[0]["ean"], serde_json::Value::Null);
    assert!(deals[0]["createdAt"].is_i64());
}

#[rstest]
#[tokio::test]
async fn it_should_not_create_a_deal_with_a_wrong_token(before_each: BeforeEachReturn) {
    let (store, app) = before_each;

    let response = app
        .clone()
        .oneshot(post_deal(
            "not-the-token",
            serde_json::json!({
                "title": "Game X",
                "platform": "ps5",
                "retailer": "Store",
                "url": "http://x",
                "priceEur": 30,
                "regularEur": 50
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(store.len().await, 0);
    let listed = read_json(app.oneshot(get_deals("")).await.unwrap()).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_rank_and_filter_published_deals(before_each: BeforeEachReturn) {
    let (_, app) = before_each;
    let submissions = [
        ("Pokémon Écarlate", "switch", 35.0, 60.0),
        ("Pokemon Violet", "switch", 50.0, 60.0),
        ("Elden Ring", "ps5", 20.0, 70.0),
        ("Pokémon Legends", "switch", 80.0, 60.0),
    ];
    for (title, platform, price, regular) in submissions {
        let response = app
            .clone()
            .oneshot(post_deal(
                TOKEN,
                serde_json::json!({
                    "title": title,
                    "platform": platform,
                    "retailer": "Store",
                    "url": "http://x",
                    "priceEur": price,
                    "regularEur": regular
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let listed = read_json(app.clone().oneshot(get_deals("")).await.unwrap()).await;
    let cuts: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["cut"].as_i64().unwrap())
        .collect();
    assert_eq!(cuts, vec![71, 42, 17]);

    let listed = read_json(
        app.oneshot(get_deals("?q=POKEMON&minDiscount=20&maxPrice=40"))
            .await
            .unwrap(),
    )
    .await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Pokémon Écarlate"]);
}

#[rstest]
#[tokio::test]
async fn it_should_cap_the_listing(before_each: BeforeEachReturn) {
    let (store, app) = before_each;
    for i in 0..150 {
        let deal = DealBuilder::new().id(format!("d-{i}")).created_at(i);
        store.seed(deal.build()).await;
    }

    let listed = read_json(app.oneshot(get_deals("")).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), RESULT_LIMIT);
}
