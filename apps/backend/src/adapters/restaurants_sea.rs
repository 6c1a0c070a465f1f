//! SeaORM adapter for the restaurant repository.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, NullOrdering};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, NotSet, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    Set,
};

use crate::entities::restaurants;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::{
    NewRestaurant, Page, PageRequest, Restaurant, RestaurantPatch, RestaurantRepo, SortBy,
    SortDirection,
};

/// Escape LIKE wildcards so the phrase matches literally.
fn like_pattern(phrase: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(phrase.len() + 2);
    escaped.push('%');
    for c in phrase.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape('\\')
}

fn filtered(request: &PageRequest) -> Select<restaurants::Entity> {
    let mut query = restaurants::Entity::find();
    if let Some(phrase) = request.normalized_phrase() {
        query = query.filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col(restaurants::Column::Name)))
                        .like(like_pattern(&phrase)),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col(restaurants::Column::Description)))
                        .like(like_pattern(&phrase)),
                ),
        );
    }
    query
}

fn sort_column(column: SortBy) -> restaurants::Column {
    match column {
        SortBy::Name => restaurants::Column::Name,
        SortBy::Category => restaurants::Column::Category,
        SortBy::Description => restaurants::Column::Description,
    }
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    request: &PageRequest,
) -> Result<(Vec<restaurants::Model>, u64), sea_orm::DbErr> {
    let total = filtered(request).count(conn).await?;

    let mut query = filtered(request);
    if let Some((column, direction)) = request.sort {
        // NULL sorts as the largest value on every backend.
        let (order, nulls) = match direction {
            SortDirection::Asc => (Order::Asc, NullOrdering::Last),
            SortDirection::Desc => (Order::Desc, NullOrdering::First),
        };
        query = query.order_by_with_nulls(sort_column(column), order, nulls);
    }
    let rows = query
        .order_by_asc(restaurants::Column::Id)
        .offset(request.offset())
        .limit(u64::from(request.page_size))
        .all(conn)
        .await?;

    Ok((rows, total))
}

pub async fn insert_restaurant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: NewRestaurant,
) -> Result<restaurants::Model, sea_orm::DbErr> {
    let active = restaurants::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        category: Set(dto.category),
        has_delivery: Set(dto.has_delivery),
        contact_email: Set(dto.contact_email),
        contact_number: Set(dto.contact_number),
        city: Set(dto.city),
        street: Set(dto.street),
        postal_code: Set(dto.postal_code),
        created_by_id: Set(dto.created_by_id),
    };
    active.insert(conn).await
}

pub async fn update_restaurant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: RestaurantPatch,
) -> Result<Option<restaurants::Model>, sea_orm::DbErr> {
    let Some(existing) = restaurants::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };
    let mut active = existing.into_active_model();
    active.name = Set(patch.name);
    active.description = Set(patch.description);
    active.has_delivery = Set(patch.has_delivery);
    active.update(conn).await.map(Some)
}

impl From<restaurants::Model> for Restaurant {
    fn from(model: restaurants::Model) -> Self {
        Restaurant {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
            has_delivery: model.has_delivery,
            contact_email: model.contact_email,
            contact_number: model.contact_number,
            city: model.city,
            street: model.street,
            postal_code: model.postal_code,
            created_by_id: model.created_by_id,
        }
    }
}

/// `RestaurantRepo` over a SeaORM connection.
#[derive(Clone)]
pub struct SeaRestaurantRepo {
    db: DatabaseConnection,
}

impl SeaRestaurantRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepo for SeaRestaurantRepo {
    async fn list(&self, request: &PageRequest) -> Result<Page<Restaurant>, DomainError> {
        let (rows, total_items) = list_page(&self.db, request).await.map_err(map_db_err)?;
        Ok(Page {
            items: rows.into_iter().map(Restaurant::from).collect(),
            total_items,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DomainError> {
        let row = restaurants::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Restaurant::from))
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, DomainError> {
        insert_restaurant(&self.db, restaurant)
            .await
            .map(Restaurant::from)
            .map_err(map_db_err)
    }

    async fn update(
        &self,
        id: i32,
        patch: RestaurantPatch,
    ) -> Result<Option<Restaurant>, DomainError> {
        let row = update_restaurant(&self.db, id, patch)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Restaurant::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = restaurants::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

