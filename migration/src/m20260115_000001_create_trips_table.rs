use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trips::Table)
                    .if_not_exists()
                    .col(pk_auto(Trips::Id))
                    .col(string(Trips::TripName))
                    .col(string(Trips::Destination))
                    .col(date(Trips::StartDate))
                    .col(date(Trips::EndDate))
                    .col(integer(Trips::NumPeople))
                    .col(integer(Trips::UserId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trips::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trips {
    Table,
    Id,
    TripName,
    Destination,
    StartDate,
    EndDate,
    NumPeople,
    UserId,
}
