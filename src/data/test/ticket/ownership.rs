use super::*;

/// Tests finding a ticket by id regardless of owner.
///
/// Expected: Ok(Some) with the ticket joined to its type
#[tokio::test]
async fn find_by_id_returns_any_users_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _enrollment, ticket_type, ticket) =
        factory::helpers::create_ticket_with_dependencies(
            db,
            entity::ticket::TicketStatus::Reserved,
            false,
            true,
        )
        .await?;

    let repo = TicketRepository::new(db);
    let found = repo.find_by_id(ticket.id).await?.expect("ticket should exist");

    assert_eq!(found.ticket.id, ticket.id);
    assert_eq!(found.ticket_type.id, ticket_type.id);

    Ok(())
}

/// Tests find_by_id for a ticket that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    let found = repo.find_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the ownership check for the ticket's actual owner.
///
/// Expected: true for the owner, false for everyone else
#[tokio::test]
async fn belongs_to_user_distinguishes_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _enrollment, _ticket_type, ticket) =
        factory::helpers::create_ticket_with_dependencies(
            db,
            entity::ticket::TicketStatus::Reserved,
            false,
            true,
        )
        .await?;
    let other = factory::create_user(db).await?;

    let repo = TicketRepository::new(db);

    assert!(repo.belongs_to_user(ticket.id, owner.id).await?);
    assert!(!repo.belongs_to_user(ticket.id, other.id).await?);

    Ok(())
}
