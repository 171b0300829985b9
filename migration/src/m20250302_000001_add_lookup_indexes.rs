use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    MemberId,
    Category,
    Price,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    PortfolioId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on portfolios.member_id for the "my portfolios" listing
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolios_member_id")
                    .table(Portfolios::Table)
                    .col(Portfolios::MemberId)
                    .to_owned(),
            )
            .await?;

        // Composite index for category + price range filtering
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolios_category_price")
                    .table(Portfolios::Table)
                    .col(Portfolios::Category)
                    .col(Portfolios::Price)
                    .to_owned(),
            )
            .await?;

        // Index on comments.portfolio_id for the detail view
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_portfolio_id")
                    .table(Comments::Table)
                    .col(Comments::PortfolioId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_comments_portfolio_id")
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolios_category_price")
                    .table(Portfolios::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolios_member_id")
                    .table(Portfolios::Table)
                    .to_owned(),
            )
            .await
    }
}
