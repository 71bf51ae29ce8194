//! Create schools table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Schools::Address).string_len(500).not_null())
                    .col(ColumnDef::new(Schools::City).string_len(100).not_null())
                    .col(ColumnDef::new(Schools::State).string_len(100).not_null())
                    .col(ColumnDef::new(Schools::Contact).string_len(20).not_null())
                    .col(ColumnDef::new(Schools::EmailId).string_len(255).not_null())
                    .col(ColumnDef::new(Schools::Image).string_len(255))
                    .col(
                        ColumnDef::new(Schools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Schools::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schools_city")
                    .table(Schools::Table)
                    .col(Schools::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schools_state")
                    .table(Schools::Table)
                    .col(Schools::State)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schools_name")
                    .table(Schools::Table)
                    .col(Schools::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Name,
    Address,
    City,
    State,
    Contact,
    EmailId,
    Image,
    CreatedAt,
    UpdatedAt,
}
