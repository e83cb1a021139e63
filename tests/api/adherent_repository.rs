use claim::{assert_none, assert_ok, assert_some_eq};
use uuid::Uuid;

use membership::adherent_repository::{AdherentRepository, PostgresAdherentRepository};

use crate::helpers::spawn_app;

#[tokio::test]
async fn finding_a_malformed_id_returns_nothing() {
    let app = spawn_app().await;
    let repository = PostgresAdherentRepository::new(app.db_pool.clone());

    let outcome = assert_ok!(repository.find("fake").await);

    assert_none!(outcome);
}

#[tokio::test]
async fn finding_an_unknown_id_returns_nothing() {
    let app = spawn_app().await;
    let repository = PostgresAdherentRepository::new(app.db_pool.clone());

    let outcome = assert_ok!(repository.find(&Uuid::new_v4().to_string()).await);

    assert_none!(outcome);
}

#[tokio::test]
async fn finding_a_registered_id_returns_the_adherent() {
    let app = spawn_app().await;
    let adherent_id = app.register_adherent().await;
    let repository = PostgresAdherentRepository::new(app.db_pool.clone());

    let outcome = assert_ok!(repository.find(&adherent_id.to_string()).await);

    assert_some_eq!(
        outcome.map(|adherent| (adherent.id, adherent.full_name())),
        (adherent_id, "Jérôme Pichoud".to_string())
    );
}
