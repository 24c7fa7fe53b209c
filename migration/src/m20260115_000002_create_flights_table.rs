use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_trips_table::Trips;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(pk_auto(Flights::Id))
                    .col(string(Flights::Number))
                    .col(string(Flights::DepartureLocation))
                    .col(string(Flights::ArrivalLocation))
                    .col(date(Flights::DepartureTime))
                    .col(date(Flights::ArrivalTime))
                    .col(integer(Flights::TripId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_trip_id")
                            .from(Flights::Table, Flights::TripId)
                            .to(Trips::Table, Trips::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flights {
    Table,
    Id,
    Number,
    DepartureLocation,
    ArrivalLocation,
    DepartureTime,
    ArrivalTime,
    TripId,
}
