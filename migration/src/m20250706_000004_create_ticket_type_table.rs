use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketType::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketType::Id))
                    .col(string(TicketType::Name))
                    .col(integer(TicketType::Price))
                    .col(boolean(TicketType::IsRemote))
                    .col(boolean(TicketType::IncludesHotel))
                    .col(
                        timestamp(TicketType::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketType {
    Table,
    Id,
    Name,
    Price,
    IsRemote,
    IncludesHotel,
    CreatedAt,
}
