use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The vessel list is populated by another service; we only make sure it exists
        manager
            .create_table(
                Table::create()
                    .table(Vessels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vessels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vessels::Imo).integer().not_null())
                    .col(ColumnDef::new(Vessels::Name).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vessels_imo")
                    .table(Vessels::Table)
                    .if_not_exists()
                    .col(Vessels::Imo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vessels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vessels {
    Table,
    Id,
    Imo,
    Name,
}
