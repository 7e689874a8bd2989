use super::*;

/// Tests finding the payment recorded for a ticket.
///
/// Expected: Ok(Some) with the payment's value and card fields
#[tokio::test]
async fn returns_payment_for_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _enrollment, ticket_type, ticket) =
        factory::helpers::create_ticket_with_dependencies(db, TicketStatus::Paid, false, true)
            .await?;
    let payment = factory::create_payment(db, ticket.id, ticket_type.price).await?;

    let repo = PaymentRepository::new(db);
    let found = repo
        .find_by_ticket_id(ticket.id)
        .await?
        .expect("payment should exist");

    assert_eq!(found.id, payment.id);
    assert_eq!(found.ticket_id, ticket.id);
    assert_eq!(found.value, ticket_type.price);

    Ok(())
}

/// Tests the lookup for a ticket without a payment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _enrollment, _ticket_type, ticket) =
        factory::helpers::create_ticket_with_dependencies(db, TicketStatus::Reserved, false, true)
            .await?;

    let repo = PaymentRepository::new(db);
    let found = repo.find_by_ticket_id(ticket.id).await?;

    assert!(found.is_none());

    Ok(())
}
