use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use limelight_db::Database;
use limelight_mailer::Mailer;
use limelight_web::{AppState, AppStateInner, router};

fn state() -> AppState {
    let db = Database::open_in_memory().unwrap();
    Arc::new(AppStateInner {
        db,
        mailer: Mailer::disabled(),
    })
}

fn seeded_state() -> AppState {
    let state = state();
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch(
                "
                INSERT INTO news (title, body, date) VALUES
                    ('First stream',  'We are live.',     '2026-05-01'),
                    ('Merch drop',    'New merch.',       '2026-06-10'),
                    ('Anniversary',   'One year in.',     '2026-07-20'),
                    ('Collab week',   'Guests all week.', '2026-08-02');

                INSERT INTO livers (name_id, name, tagline, pick) VALUES
                    ('aoi', 'Aoi Hoshino',  'Night-owl FPS runs', 1),
                    ('rin', 'Rin Kisaragi', 'Cozy art streams',   0);
                ",
            )?;
            Ok(())
        })
        .unwrap();
    state
}

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_form(state: AppState, uri: &str, body: &str) -> axum::http::Response<Body> {
    router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn home_shows_latest_three_news_and_picked_livers() {
    let state = seeded_state();
    let (status, body) = get(state, "/").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("Collab week"));
    assert!(body.contains("Anniversary"));
    assert!(body.contains("Merch drop"));
    assert!(!body.contains("First stream"));

    assert!(body.contains("Aoi Hoshino"));
    assert!(!body.contains("Rin Kisaragi"));
}

#[tokio::test]
async fn livers_page_lists_everyone() {
    let state = seeded_state();
    let (status, body) = get(state, "/livers").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Aoi Hoshino"));
    assert!(body.contains("Rin Kisaragi"));
}

#[tokio::test]
async fn liver_detail_renders_subject() {
    let state = seeded_state();
    let (status, body) = get(state, "/liver/aoi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Aoi Hoshino"));
    assert!(body.contains("Night-owl FPS runs"));
}

#[tokio::test]
async fn news_page_lists_everything_date_descending() {
    let state = seeded_state();
    let (status, body) = get(state, "/news").await;
    assert_eq!(status, StatusCode::OK);

    let positions: Vec<usize> = ["Collab week", "Anniversary", "Merch drop", "First stream"]
        .iter()
        .map(|title| body.find(title).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn topic_page_renders_subject() {
    let state = seeded_state();
    let (status, body) = get(state, "/topic/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("First stream"));
    assert!(body.contains("We are live."));
}

#[tokio::test]
async fn unknown_liver_slug_still_renders_not_a_404() {
    let state = seeded_state();
    let (status, body) = get(state, "/liver/ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("could not be found"));
}

#[tokio::test]
async fn unknown_topic_id_still_renders_not_a_404() {
    let state = seeded_state();
    let (status, body) = get(state, "/topic/999").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("could not be found"));
}

#[tokio::test]
async fn static_pages_render() {
    for uri in ["/audition", "/auditionSuc", "/contact", "/contactSuc", "/PrivacyPolicy"] {
        let (status, _) = get(state(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn audition_submission_persists_before_redirect() {
    let state = state();
    let response = post_form(
        state.clone(),
        "/audition",
        "name=A&email=a%40b.com&message=hi",
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/auditionSuc");

    // The row is visible as soon as the redirect is issued.
    let row: (String, String, String) = state
        .db
        .with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT name, email, message FROM auditions",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?)
        })
        .unwrap();
    assert_eq!(row, ("A".into(), "a@b.com".into(), "hi".into()));
}

#[tokio::test]
async fn contact_submission_round_trip() {
    let state = state();
    let response = post_form(
        state.clone(),
        "/contact",
        "name=A&email=a%40b.com&message=hi",
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/contactSuc");

    let count: i64 = state
        .db
        .with_conn(|conn| {
            Ok(conn.query_row("SELECT count(*) FROM contacts", [], |row| row.get(0))?)
        })
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn contact_submission_attempts_applicant_and_operator_sends() {
    let db = Database::open_in_memory().unwrap();
    let state: AppState = Arc::new(AppStateInner {
        db,
        mailer: Mailer::memory("staff@example.com"),
    });

    let response = post_form(
        state.clone(),
        "/contact",
        "name=A&email=a%40b.com&message=hi",
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    // Notifications run detached from the redirect; wait for both attempts.
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(2);
    while state.mailer.sent().len() < 2 {
        assert!(
            tokio::time::Instant::now() < deadline,
            "notification task never attempted both sends"
        );
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let sent = state.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "a@b.com");
    assert_eq!(sent[0].subject, "We received your message");
    assert_eq!(sent[1].to, "staff@example.com");
    assert_eq!(sent[1].subject, "New contact message");
}

#[tokio::test]
async fn failed_insert_is_a_500_with_no_redirect() {
    let state = state();
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch("DROP TABLE contacts;")?;
            Ok(())
        })
        .unwrap();

    let response = post_form(
        state.clone(),
        "/contact",
        "name=A&email=a%40b.com&message=hi",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Internal Server Error");
}
