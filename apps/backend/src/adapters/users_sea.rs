//! SeaORM adapter for the account repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, Set,
};
use tracing::warn;

use crate::entities::users;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;
use crate::repos::{AccountRepo, NewUser, User};

// Free functions return DbErr; the repo impl below maps to DomainError.

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn count_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<u64, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .count(conn)
        .await
}

pub async fn insert_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user: NewUser,
) -> Result<users::Model, sea_orm::DbErr> {
    let active = users::ActiveModel {
        id: NotSet,
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        nationality: Set(user.nationality),
        role: Set(user.role.as_str().to_string()),
    };
    active.insert(conn).await
}

impl TryFrom<users::Model> for User {
    type Error = DomainError;

    fn try_from(model: users::Model) -> Result<Self, Self::Error> {
        let role = model.role.parse().map_err(|e: String| {
            warn!(user_id = model.id, error = %e, "Stored user has an unknown role");
            DomainError::infra(InfraErrorKind::Other("CorruptRow".into()), "Stored role is invalid")
        })?;
        Ok(User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            nationality: model.nationality,
            role,
        })
    }
}

/// `AccountRepo` over a SeaORM connection.
#[derive(Clone)]
pub struct SeaAccountRepo {
    db: DatabaseConnection,
}

impl SeaAccountRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepo for SeaAccountRepo {
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let count = count_by_email(&self.db, email).await.map_err(map_db_err)?;
        Ok(count > 0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        find_by_email(&self.db, email)
            .await
            .map_err(map_db_err)?
            .map(User::try_from)
            .transpose()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        let model = insert_user(&self.db, user).await.map_err(map_db_err)?;
        User::try_from(model)
    }
}
