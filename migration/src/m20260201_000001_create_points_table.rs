use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(string(Points::UserId).primary_key())
                    .col(big_integer(Points::Score).default(0))
                    .to_owned(),
            )
            .await?;

        // Leaderboard reads order by score
        manager
            .create_index(
                Index::create()
                    .name("idx_points_score")
                    .table(Points::Table)
                    .col(Points::Score)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_points_score")
                    .table(Points::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Points {
    Table,
    UserId,
    Score,
}
