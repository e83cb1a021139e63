use crate::helpers::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn the_registration_form_is_served() {
    let app = spawn_app().await;

    let response = app.get_registration_form().await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form action="/inscription" method="post">"#));
}

#[tokio::test]
async fn registering_persists_the_adherent_and_redirects_to_the_donation_step() {
    let app = spawn_app().await;

    let response = app
        .post_registration(&serde_json::json!({
            "email": "jerome@example.com",
            "first_name": "Jérôme",
            "last_name": "Pichoud",
        }))
        .await;

    assert_is_redirect_to(&response, "/inscription/don");
    let saved: (String, String, String) = sqlx::query_as(
        "SELECT email_address, first_name, last_name FROM adherents",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("Failed to fetch the saved adherent.");
    assert_eq!(saved.0, "jerome@example.com");
    assert_eq!(saved.1, "Jérôme");
    assert_eq!(saved.2, "Pichoud");
}

#[tokio::test]
async fn registering_returns_a_400_when_data_is_missing_or_invalid() {
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({"first_name": "Jérôme", "last_name": "Pichoud"}),
            "missing the email",
        ),
        (
            serde_json::json!({"email": "jerome@example.com"}),
            "missing the names",
        ),
        (
            serde_json::json!({
                "email": "definitely-not-an-email",
                "first_name": "Jérôme",
                "last_name": "Pichoud",
            }),
            "invalid email",
        ),
        (
            serde_json::json!({
                "email": "jerome@example.com",
                "first_name": "",
                "last_name": "Pichoud",
            }),
            "empty first name",
        ),
    ];

    for (body, description) in test_cases {
        let response = app.post_registration(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn registering_twice_with_the_same_email_is_a_conflict() {
    let app = spawn_app().await;
    app.register_adherent().await;

    let response = app
        .post_registration(&serde_json::json!({
            "email": "jerome@example.com",
            "first_name": "Jérôme",
            "last_name": "Pichoud",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
}
