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
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(pk_auto(Activities::Id))
                    .col(string(Activities::ActivityName))
                    .col(string(Activities::ActivityAddress))
                    .col(double(Activities::Longitude))
                    .col(double(Activities::Latitude))
                    .col(double(Activities::Rating))
                    .col(string(Activities::PictureUrl))
                    .col(double(Activities::HotelDistance))
                    .col(integer(Activities::TripId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_trip_id")
                            .from(Activities::Table, Activities::TripId)
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
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activities {
    Table,
    Id,
    ActivityName,
    ActivityAddress,
    Longitude,
    Latitude,
    Rating,
    PictureUrl,
    HotelDistance,
    TripId,
}
