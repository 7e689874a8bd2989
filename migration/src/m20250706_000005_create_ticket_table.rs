use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250705_000003_create_enrollment_table::Enrollment,
    m20250706_000004_create_ticket_type_table::TicketType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::TicketTypeId))
                    .col(integer(Ticket::EnrollmentId))
                    .col(string_len(Ticket::Status, 16))
                    .col(
                        timestamp(Ticket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Ticket::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_ticket_type_id")
                            .from(Ticket::Table, Ticket::TicketTypeId)
                            .to(TicketType::Table, TicketType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_enrollment_id")
                            .from(Ticket::Table, Ticket::EnrollmentId)
                            .to(Enrollment::Table, Enrollment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    TicketTypeId,
    EnrollmentId,
    Status,
    CreatedAt,
    UpdatedAt,
}
