//! Database queries for school records.
//!
//! The only code path allowed to touch the `schools` relation. Every
//! underlying store error is wrapped into `AppError::Database`, including
//! zero-row results on reads and updates. Each call is a single
//! non-transactional statement (plus the update's read-after-write pair).

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::school::{self, ActiveModel, Entity as School};
use crate::error::{AppError, AppResult};
use crate::models::{NewSchool, SchoolUpdate};

impl super::DbPool {
    /// Insert a new school and return the freshly created record.
    pub async fn create_school(&self, data: NewSchool) -> AppResult<school::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            name: Set(data.name),
            address: Set(data.address),
            city: Set(data.city),
            state: Set(data.state),
            contact: Set(data.contact),
            email_id: Set(data.email_id),
            image: Set(data.image),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert school: {}", e)))?;

        // Re-read by the assigned id so callers get exactly what the store holds.
        self.get_school_by_id(inserted.id).await
    }

    /// Get a school by id. Zero matching rows is a database error.
    pub async fn get_school_by_id(&self, id: i32) -> AppResult<school::Model> {
        School::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get school: {}", e)))?
            .ok_or_else(|| AppError::Database(format!("School {} not found", id)))
    }

    /// List every school, newest first. Empty table yields an empty vec.
    pub async fn list_schools(&self) -> AppResult<Vec<school::Model>> {
        School::find()
            .order_by_desc(school::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list schools: {}", e)))
    }

    /// Apply a partial update and return the updated record.
    ///
    /// Only the fields present in `update` are written; `updated_at` is
    /// always refreshed. An empty update or a missing row is an error.
    pub async fn update_school(&self, id: i32, update: SchoolUpdate) -> AppResult<school::Model> {
        if update.is_empty() {
            return Err(AppError::Database("No fields to update".to_string()));
        }

        let existing = self.get_school_by_id(id).await?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(address) = update.address {
            active.address = Set(address);
        }
        if let Some(city) = update.city {
            active.city = Set(city);
        }
        if let Some(state) = update.state {
            active.state = Set(state);
        }
        if let Some(contact) = update.contact {
            active.contact = Set(contact);
        }
        if let Some(email_id) = update.email_id {
            active.email_id = Set(email_id);
        }
        if let Some(image) = update.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(Utc::now());

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update school: {}", e)))
    }

    /// Delete a school by id.
    ///
    /// Returns true if a row was removed, false if nothing matched; deleting
    /// a non-existent id is a benign no-op, not an error. The record's image
    /// file, if any, is left on disk.
    pub async fn delete_school(&self, id: i32) -> AppResult<bool> {
        let result = School::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete school: {}", e)))?;

        Ok(result.rows_affected == 1)
    }

    /// List schools in a city, exact match, ordered by name.
    pub async fn list_schools_by_city(&self, city: &str) -> AppResult<Vec<school::Model>> {
        School::find()
            .filter(school::Column::City.eq(city))
            .order_by_asc(school::Column::Name)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list schools by city: {}", e)))
    }

    /// List schools in a state, exact match, ordered by city then name.
    pub async fn list_schools_by_state(&self, state: &str) -> AppResult<Vec<school::Model>> {
        School::find()
            .filter(school::Column::State.eq(state))
            .order_by_asc(school::Column::City)
            .order_by_asc(school::Column::Name)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list schools by state: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::db::DbPool;
    use crate::entity::school;
    use crate::error::AppError;
    use crate::models::{NewSchool, SchoolUpdate};

    fn sample_row(id: i32) -> school::Model {
        let at = Utc.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap();
        school::Model {
            id,
            name: "Riverside High".to_string(),
            address: "12 River Road".to_string(),
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
            contact: "+1 541 555 0100".to_string(),
            email_id: "office@riverside.example".to_string(),
            image: Some("/schoolImages/riverside.png".to_string()),
            created_at: at,
            updated_at: at,
        }
    }

    fn sample_input() -> NewSchool {
        NewSchool {
            name: "Riverside High".to_string(),
            address: "12 River Road".to_string(),
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
            contact: "+1 541 555 0100".to_string(),
            email_id: "office@riverside.example".to_string(),
            image: Some("/schoolImages/riverside.png".to_string()),
        }
    }

    fn pool_with(db: MockDatabase) -> DbPool {
        DbPool::from_connection(db.into_connection())
    }

    #[tokio::test]
    async fn test_create_school_round_trips_stored_record() {
        // One result for the insert, one for the re-read by assigned id.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_row(7)], vec![sample_row(7)]]);
        let pool = pool_with(db);

        let created = pool.create_school(sample_input()).await.expect("create");

        assert_eq!(created.id, 7);
        let input = sample_input();
        assert_eq!(created.name, input.name);
        assert_eq!(created.address, input.address);
        assert_eq!(created.city, input.city);
        assert_eq!(created.state, input.state);
        assert_eq!(created.contact, input.contact);
        assert_eq!(created.email_id, input.email_id);
        assert_eq!(created.image, input.image);
    }

    #[tokio::test]
    async fn test_get_school_by_id_missing_row_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<school::Model>::new()]);
        let pool = pool_with(db);

        let err = pool.get_school_by_id(42).await.expect_err("missing row");
        match err {
            AppError::Database(msg) => assert!(msg.contains("School 42 not found")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_school_reports_absence_as_false() {
        // First delete removes the row, second finds nothing; both are Ok.
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);
        let pool = pool_with(db);

        assert!(pool.delete_school(7).await.expect("first delete"));
        assert!(!pool.delete_school(7).await.expect("second delete"));
    }

    #[tokio::test]
    async fn test_update_school_rejects_empty_update() {
        let pool = pool_with(MockDatabase::new(DatabaseBackend::Postgres));

        let err = pool
            .update_school(1, SchoolUpdate::default())
            .await
            .expect_err("empty update");
        match err {
            AppError::Database(msg) => assert_eq!(msg, "No fields to update"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_schools_empty_table_yields_empty_vec() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<school::Model>::new()]);
        let pool = pool_with(db);

        let schools = pool.list_schools().await.expect("list");
        assert!(schools.is_empty());
    }
}
