use super::*;

/// Tests finding a user's ticket through their enrollment.
///
/// Expected: Ok(Some) with the ticket joined to its type
#[tokio::test]
async fn returns_ticket_with_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _enrollment, ticket_type, ticket) =
        factory::helpers::create_ticket_with_dependencies(
            db,
            entity::ticket::TicketStatus::Reserved,
            false,
            true,
        )
        .await?;

    let repo = TicketRepository::new(db);
    let found = repo
        .find_by_user_id(user.id)
        .await?
        .expect("ticket should exist");

    assert_eq!(found.ticket.id, ticket.id);
    assert_eq!(found.ticket.status, TicketStatus::Reserved);
    assert_eq!(found.ticket_type.id, ticket_type.id);
    assert!(found.ticket_type.includes_hotel);

    Ok(())
}

/// Tests the lookup for a user who never enrolled.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TicketRepository::new(db);
    let found = repo.find_by_user_id(user.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the lookup for an enrolled user without a ticket.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_enrollment(db, user.id).await?;

    let repo = TicketRepository::new(db);
    let found = repo.find_by_user_id(user.id).await?;

    assert!(found.is_none());

    Ok(())
}
