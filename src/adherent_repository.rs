use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Adherent, AdherentEmail, DonationRequest, NewAdherent, PersonName};

/// Single-key lookup of adherents.
#[allow(async_fn_in_trait)]
pub trait AdherentRepository {
    async fn find(&self, id: &str) -> Result<Option<Adherent>, anyhow::Error>;
}

#[derive(Clone)]
pub struct PostgresAdherentRepository {
    pool: PgPool,
}

impl PostgresAdherentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AdherentRow {
    id: Uuid,
    email_address: String,
    first_name: String,
    last_name: String,
}

impl TryFrom<AdherentRow> for Adherent {
    type Error = String;

    fn try_from(row: AdherentRow) -> Result<Self, Self::Error> {
        Ok(Adherent {
            id: row.id,
            email: AdherentEmail::parse(row.email_address)?,
            first_name: PersonName::parse(row.first_name)?,
            last_name: PersonName::parse(row.last_name)?,
        })
    }
}

impl AdherentRepository for PostgresAdherentRepository {
    #[tracing::instrument(name = "Find adherent by id", skip(self))]
    async fn find(&self, id: &str) -> Result<Option<Adherent>, anyhow::Error> {
        // Ids come from the session; anything that is not a UUID cannot match a row.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, AdherentRow>(
            r#"SELECT id, email_address, first_name, last_name FROM adherents WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to perform a query to retrieve an adherent")?;

        row.map(Adherent::try_from)
            .transpose()
            .map_err(|e| anyhow::anyhow!(e))
            .context("The stored adherent details are invalid")
    }
}

#[tracing::instrument(name = "Saving new adherent details in database", skip(pool, new_adherent))]
pub async fn insert_adherent(
    pool: &PgPool,
    new_adherent: &NewAdherent,
) -> Result<Uuid, sqlx::Error> {
    let adherent_id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO adherents (id, email_address, first_name, last_name, registered_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(adherent_id)
    .bind(new_adherent.email.as_ref())
    .bind(new_adherent.first_name.as_ref())
    .bind(new_adherent.last_name.as_ref())
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;

    Ok(adherent_id)
}

#[tracing::instrument(name = "Saving pending donation in database", skip(pool, donation_request))]
pub async fn insert_donation(
    pool: &PgPool,
    adherent_id: Uuid,
    donation_request: &DonationRequest,
) -> Result<Uuid, anyhow::Error> {
    let amount = donation_request
        .amount
        .context("A donation cannot be stored without an amount")?;
    let donation_id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO donations (id, adherent_id, amount, email_address, first_name, last_name, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(donation_id)
    .bind(adherent_id)
    .bind(i64::from(amount))
    .bind(donation_request.email_address.as_deref())
    .bind(donation_request.first_name.as_deref())
    .bind(donation_request.last_name.as_deref())
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .context("Failed to insert a pending donation")?;

    Ok(donation_id)
}

#[tracing::instrument(name = "Count adherents", skip(pool))]
pub async fn count_adherents(pool: &PgPool) -> Result<u64, anyhow::Error> {
    count_rows(pool, r#"SELECT COUNT(*) FROM adherents"#).await
}

#[tracing::instrument(name = "Count committees", skip(pool))]
pub async fn count_committees(pool: &PgPool) -> Result<u64, anyhow::Error> {
    count_rows(pool, r#"SELECT COUNT(*) FROM committees"#).await
}

async fn count_rows(pool: &PgPool, query: &'static str) -> Result<u64, anyhow::Error> {
    let count: i64 = sqlx::query_scalar(query)
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to execute `{}`", query))?;
    u64::try_from(count).context("A row count cannot be negative")
}
