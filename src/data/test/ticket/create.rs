use super::*;

/// Tests reserving a ticket for an enrollment.
///
/// Expected: Ok with a RESERVED ticket joined to its type
#[tokio::test]
async fn creates_reserved_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let enrollment = factory::create_enrollment(db, user.id).await?;
    let ticket_type = factory::create_hotel_ticket_type(db).await?;

    let repo = TicketRepository::new(db);
    let created = repo
        .create(CreateTicketParams {
            ticket_type_id: ticket_type.id,
            enrollment_id: enrollment.id,
        })
        .await?;

    assert_eq!(created.ticket.status, TicketStatus::Reserved);
    assert_eq!(created.ticket.enrollment_id, enrollment.id);
    assert_eq!(created.ticket_type.id, ticket_type.id);

    let stored = entity::prelude::Ticket::find_by_id(created.ticket.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the foreign key constraint on ticket_type_id.
///
/// Expected: Err(DbErr) when the ticket type does not exist
#[tokio::test]
async fn fails_for_nonexistent_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let enrollment = factory::create_enrollment(db, user.id).await?;

    let repo = TicketRepository::new(db);
    let result = repo
        .create(CreateTicketParams {
            ticket_type_id: 999999,
            enrollment_id: enrollment.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
