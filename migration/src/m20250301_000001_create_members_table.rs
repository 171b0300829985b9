use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `members` table and its columns.
#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    About,
    Location,
    Website,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Members::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Members::Username).string().not_null())
                    .col(ColumnDef::new(Members::Email).string().not_null())
                    .col(ColumnDef::new(Members::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Members::About).text().null())
                    .col(ColumnDef::new(Members::Location).string().null())
                    .col(ColumnDef::new(Members::Website).string().null())
                    .col(
                        ColumnDef::new(Members::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Registration relies on this index to reject duplicate usernames.
        manager
            .create_index(
                Index::create()
                    .name("idx_members_username_unique")
                    .table(Members::Table)
                    .col(Members::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await
    }
}
