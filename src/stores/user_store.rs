use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use crate::errors::internal::UserError;
use crate::errors::InternalError;
use crate::stores::UserLookup;
use crate::types::db::user::{self, ActiveModel, Entity as User};
use crate::types::internal::{PreparedUser, UserRecord};

/// UserStore persists user records in the database
///
/// Emails are expected to arrive normalized (trimmed, lowercased). The unique
/// index on `users.email` rejects duplicates that slip past validation, and those
/// rejections surface as `UserError::EmailTaken`.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new user
    ///
    /// Assigns a UUID and the creation timestamp.
    ///
    /// # Returns
    /// * `Ok(UserRecord)` - The stored record
    /// * `Err(InternalError)` - `UserError::EmailTaken` on a uniqueness violation,
    ///   otherwise a database error
    pub async fn insert(&self, prepared: PreparedUser) -> Result<UserRecord, InternalError> {
        let now = Utc::now().timestamp();
        let email = prepared.email.clone();

        let new_user = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(prepared.name),
            email: Set(prepared.email),
            password_digest: Set(prepared.password_digest),
            remember_token: Set(prepared.remember_token),
            admin: Set(prepared.is_admin),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_user
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("insert_user", email, e))?;

        Ok(model.into())
    }

    /// Overwrite an existing user with a prepared update
    ///
    /// The digest column is written only when the update carries a freshly hashed
    /// password; otherwise the digest currently in the row is kept.
    ///
    /// # Returns
    /// * `Ok(UserRecord)` - The stored record after the update
    /// * `Err(InternalError)` - `UserError::UserIdNotFound` if the record is gone,
    ///   `UserError::EmailTaken` on a uniqueness violation, otherwise a database error
    pub async fn update(&self, id: &str, prepared: PreparedUser) -> Result<UserRecord, InternalError> {
        let existing = User::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_for_update", e))?
            .ok_or_else(|| UserError::UserIdNotFound { user_id: id.to_owned() })?;

        let email = prepared.email.clone();
        let mut active: ActiveModel = existing.into();
        active.name = Set(prepared.name);
        active.email = Set(prepared.email);
        if prepared.rehashed {
            active.password_digest = Set(prepared.password_digest);
        }
        active.remember_token = Set(prepared.remember_token);
        active.admin = Set(prepared.is_admin);
        active.updated_at = Set(Utc::now().timestamp());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| Self::map_write_error("update_user", email, e))?;

        Ok(model.into())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, InternalError> {
        let user = User::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))?;

        Ok(user.map(UserRecord::from))
    }

    /// All records whose email equals `email`, used as the uniqueness input to
    /// validation. At most one row exists while the unique index holds.
    pub async fn find_all_by_email(&self, email: &str) -> Result<Vec<UserRecord>, InternalError> {
        let users = User::find()
            .filter(user::Column::Email.eq(email))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_all_users_by_email", e))?;

        Ok(users.into_iter().map(UserRecord::from).collect())
    }

    pub async fn find_by_remember_token(&self, token: &str) -> Result<Option<UserRecord>, InternalError> {
        let user = User::find()
            .filter(user::Column::RememberToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_remember_token", e))?;

        Ok(user.map(UserRecord::from))
    }

    /// Delete a user by id
    ///
    /// # Returns
    /// * `Ok(())` - The record was deleted
    /// * `Err(InternalError)` - `UserError::UserIdNotFound` if nothing was deleted
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        let result = User::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_user", e))?;

        if result.rows_affected == 0 {
            return Err(UserError::UserIdNotFound { user_id: id.to_owned() }.into());
        }

        Ok(())
    }

    fn map_write_error(operation: &'static str, email: String, e: DbErr) -> InternalError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => UserError::EmailTaken { email }.into(),
            _ => InternalError::database(operation, e),
        }
    }
}

#[async_trait::async_trait]
impl UserLookup for UserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError> {
        let user = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))?;

        Ok(user.map(UserRecord::from))
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("db", &"<connection>")
            .finish()
    }
}
