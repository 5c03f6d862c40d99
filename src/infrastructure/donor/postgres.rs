//! PostgreSQL donor repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::donor::{BloodGroup, Donor, DonorId, DonorRepository, DonorUpdate, NewDonor};
use crate::domain::DomainError;

/// PostgreSQL implementation of DonorRepository against the `donors` table
#[derive(Debug, Clone)]
pub struct PostgresDonorRepository {
    pool: PgPool,
}

impl PostgresDonorRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorRepository for PostgresDonorRepository {
    async fn list(&self) -> Result<Vec<Donor>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, age, blood_group, phone, created_at
            FROM donors
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list donors: {}", e)))?;

        let mut donors = Vec::with_capacity(rows.len());

        for row in rows {
            donors.push(row_to_donor(&row)?);
        }

        Ok(donors)
    }

    async fn get(&self, id: &DonorId) -> Result<Option<Donor>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, age, blood_group, phone, created_at
            FROM donors
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get donor: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_donor(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, fields: NewDonor) -> Result<Donor, DomainError> {
        let id = Uuid::new_v4().to_string();

        let row = sqlx::query(
            r#"
            INSERT INTO donors (id, name, age, blood_group, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, name, age, blood_group, phone, created_at
            "#,
        )
        .bind(&id)
        .bind(fields.name())
        .bind(i32::from(fields.age()))
        .bind(fields.blood_group().as_str())
        .bind(fields.phone())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert donor: {}", e)))?;

        row_to_donor(&row)
    }

    async fn update(&self, id: &DonorId, update: DonorUpdate) -> Result<Donor, DomainError> {
        // Absent fields keep their stored values
        let row = sqlx::query(
            r#"
            UPDATE donors
            SET name = COALESCE($2, name),
                age = COALESCE($3, age),
                blood_group = COALESCE($4, blood_group),
                phone = COALESCE($5, phone)
            WHERE id = $1
            RETURNING id, name, age, blood_group, phone, created_at
            "#,
        )
        .bind(id.as_str())
        .bind(update.name.as_deref())
        .bind(update.age.map(i32::from))
        .bind(update.blood_group.map(|g| g.as_str()))
        .bind(update.phone.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update donor: {}", e)))?;

        match row {
            Some(row) => row_to_donor(&row),
            None => Err(DomainError::not_found(format!("Donor '{}' not found", id))),
        }
    }

    async fn delete(&self, id: &DonorId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM donors WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete donor: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_donor(row: &sqlx::postgres::PgRow) -> Result<Donor, DomainError> {
    let id: String = row.get("id");
    let name: String = row.get("name");
    let age: i32 = row.get("age");
    let blood_group: String = row.get("blood_group");
    let phone: String = row.get("phone");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    let donor_id = DonorId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid donor ID in database: {}", e)))?;

    let age = u8::try_from(age)
        .map_err(|_| DomainError::storage(format!("Invalid donor age in database: {}", age)))?;

    let blood_group: BloodGroup = blood_group.parse().map_err(|e| {
        DomainError::storage(format!("Invalid blood group in database: {}", e))
    })?;

    Ok(Donor::from_stored(
        donor_id, name, age, blood_group, phone, created_at,
    ))
}
