use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Nationality,
    Role,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
    Name,
    Description,
    Category,
    HasDelivery,
    ContactEmail,
    ContactNumber,
    City,
    Street,
    PostalCode,
    CreatedById,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Nationality).string().null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(16)
                            .not_null()
                            .default("User"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::Name).string_len(25).not_null())
                    .col(ColumnDef::new(Restaurants::Description).text().null())
                    .col(ColumnDef::new(Restaurants::Category).string().null())
                    .col(
                        ColumnDef::new(Restaurants::HasDelivery)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Restaurants::ContactEmail).string().null())
                    .col(ColumnDef::new(Restaurants::ContactNumber).string().null())
                    .col(ColumnDef::new(Restaurants::City).string_len(50).not_null())
                    .col(ColumnDef::new(Restaurants::Street).string_len(50).not_null())
                    .col(ColumnDef::new(Restaurants::PostalCode).string().null())
                    .col(ColumnDef::new(Restaurants::CreatedById).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurants_created_by")
                            .from(Restaurants::Table, Restaurants::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurants_created_by")
                    .table(Restaurants::Table)
                    .col(Restaurants::CreatedById)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
