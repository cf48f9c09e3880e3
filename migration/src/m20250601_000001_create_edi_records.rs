use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dates are stored as text; malformed dates must not fail inserts.
        manager
            .create_table(
                Table::create()
                    .table(EdiRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EdiRecords::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(EdiRecords::ClientCode).string_len(50).not_null())
                    .col(ColumnDef::new(EdiRecords::ProductCode).string_len(50).not_null())
                    .col(ColumnDef::new(EdiRecords::Date).string_len(20).not_null())
                    .col(ColumnDef::new(EdiRecords::Quantity).integer().not_null())
                    .col(ColumnDef::new(EdiRecords::EdiWeekNumber).integer())
                    .col(ColumnDef::new(EdiRecords::ExpectedDeliveryDate).string_len(20))
                    .col(ColumnDef::new(EdiRecords::DeliveryNature).string_len(100))
                    .col(ColumnDef::new(EdiRecords::DeliveredQuantity).integer())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EdiRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EdiRecords {
    #[sea_orm(iden = "EDITunisia")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "ClientCode")]
    ClientCode,
    #[sea_orm(iden = "ProductCode")]
    ProductCode,
    #[sea_orm(iden = "Date")]
    Date,
    #[sea_orm(iden = "Quantity")]
    Quantity,
    #[sea_orm(iden = "EDIWeekNumber")]
    EdiWeekNumber,
    #[sea_orm(iden = "ExpectedDeliveryDate")]
    ExpectedDeliveryDate,
    #[sea_orm(iden = "DeliveryNature")]
    DeliveryNature,
    #[sea_orm(iden = "DeliveredQuantity")]
    DeliveredQuantity,
}
