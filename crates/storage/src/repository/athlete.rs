use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::dto::athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const SELECT_ATHLETE: &str = r#"
    SELECT a.pk_id, a.id, a.name, a.cpf, a.age, a.weight, a.height, a.sex, a.created_at,
           a.category_id, c.name AS category_name,
           a.training_center_id, t.name AS training_center_name
    FROM athletes a
    INNER JOIN categories c ON a.category_id = c.pk_id
    INNER JOIN training_centers t ON a.training_center_id = t.pk_id
"#;

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List one page of athletes matching every filter that is set, in insertion order
    pub async fn list(
        &self,
        filter: &AthleteFilter,
        params: &PaginationParams,
    ) -> Result<(Vec<Athlete>, i64)> {
        let total = self.count(filter).await?;

        let mut query = QueryBuilder::<Sqlite>::new(SELECT_ATHLETE);
        query.push(" WHERE 1=1");
        push_filter(&mut query, filter);
        query.push(" ORDER BY a.pk_id LIMIT ");
        query.push_bind(params.limit());
        query.push(" OFFSET ");
        query.push_bind(params.offset());

        let athletes: Vec<Athlete> = query.build_query_as().fetch_all(self.pool).await?;

        Ok((athletes, total))
    }

    async fn count(&self, filter: &AthleteFilter) -> Result<i64> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM athletes a WHERE 1=1");
        push_filter(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// CPF of the earliest registered athlete with exactly this name
    pub async fn first_cpf_by_name(&self, name: &str) -> Result<Option<String>> {
        let cpf = sqlx::query_scalar::<_, String>(
            "SELECT cpf FROM athletes WHERE name = ? ORDER BY pk_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(cpf)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!("{SELECT_ATHLETE} WHERE a.id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Insert an athlete whose category and training center were already resolved
    /// to their internal keys.
    pub async fn create(
        &self,
        req: &CreateAthleteRequest,
        category_id: i64,
        training_center_id: i64,
    ) -> Result<Athlete> {
        let id = Uuid::new_v4();

        let result = sqlx::query(
            r#"
            INSERT INTO athletes (id, name, cpf, age, weight, height, sex, created_at,
                                  category_id, training_center_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.cpf)
        .bind(req.age)
        .bind(req.weight)
        .bind(req.height)
        .bind(&req.sex)
        .bind(Utc::now().naive_utc())
        .bind(category_id)
        .bind(training_center_id)
        .execute(self.pool)
        .await
        .map_err(StorageError::from);

        match result {
            Ok(_) => self.find_by_id(id).await,
            Err(e) if e.is_unique_violation() => Err(StorageError::ConstraintViolation(format!(
                "An athlete with cpf {} is already registered",
                req.cpf
            ))),
            Err(e) if e.is_foreign_key_violation() => Err(StorageError::ConstraintViolation(
                "Category or training center no longer exists".to_string(),
            )),
            Err(e) => Err(e),
        }
    }

    /// Apply the fields present in `req` and return the refreshed row
    pub async fn update(&self, existing: &Athlete, req: &UpdateAthleteRequest) -> Result<Athlete> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let age = req.age.unwrap_or(existing.age);

        let result = sqlx::query("UPDATE athletes SET name = ?, age = ? WHERE pk_id = ?")
            .bind(name)
            .bind(age)
            .bind(existing.pk_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(existing.id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Sqlite>, filter: &AthleteFilter) {
    if let Some(ref name) = filter.name {
        query.push(" AND a.name = ");
        query.push_bind(name.clone());
    }

    if let Some(ref cpf) = filter.cpf {
        query.push(" AND a.cpf = ");
        query.push_bind(cpf.clone());
    }
}
