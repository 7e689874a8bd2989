use super::*;

/// Tests flipping a reserved ticket to PAID.
///
/// Expected: Ok with the stored status updated
#[tokio::test]
async fn marks_ticket_paid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _enrollment, _ticket_type, ticket) =
        factory::helpers::create_ticket_with_dependencies(
            db,
            entity::ticket::TicketStatus::Reserved,
            false,
            true,
        )
        .await?;

    let repo = TicketRepository::new(db);
    let paid = repo.set_paid(ticket.id).await?;

    assert_eq!(paid.ticket.status, TicketStatus::Paid);

    let stored = entity::prelude::Ticket::find_by_id(ticket.id)
        .one(db)
        .await?
        .expect("ticket should exist");
    assert_eq!(stored.status, entity::ticket::TicketStatus::Paid);

    Ok(())
}

/// Tests set_paid for a ticket that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    let result = repo.set_paid(999999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
