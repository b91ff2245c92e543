use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut id = ColumnDef::new(Expenses::Id);
        let mut tags = ColumnDef::new(Expenses::Tags);

        // Postgres keeps tags in a native text array; other backends get a JSON
        // encoded list in a plain text column.
        match manager.get_database_backend() {
            DbBackend::Postgres => {
                id.big_integer();
                tags.array(ColumnType::Text);
            }
            _ => {
                id.integer();
                tags.text();
            }
        }

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(id.not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Expenses::Title).text())
                    .col(ColumnDef::new(Expenses::Amount).double())
                    .col(ColumnDef::new(Expenses::Note).text())
                    .col(&mut tags)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub enum Expenses {
    Table,
    Id,
    Title,
    Amount,
    Note,
    Tags,
}
