use super::*;

/// Tests inserting a payment row.
///
/// Expected: Ok with value and truncated card fields persisted as given
#[tokio::test]
async fn creates_payment() -> Result<(), DbErr> {
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
    let payment = repo
        .create(CreatePaymentRecord {
            ticket_id: ticket.id,
            value: 60000,
            card_issuer: "MASTERCARD".to_string(),
            card_last_digits: "9424".to_string(),
        })
        .await?;

    assert!(payment.id > 0);
    assert_eq!(payment.ticket_id, ticket.id);
    assert_eq!(payment.value, 60000);
    assert_eq!(payment.card_issuer, "MASTERCARD");
    assert_eq!(payment.card_last_digits, "9424");

    Ok(())
}

/// Tests the foreign key constraint on ticket_id.
///
/// Expected: Err(DbErr) when the ticket does not exist
#[tokio::test]
async fn fails_for_nonexistent_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let result = repo
        .create(CreatePaymentRecord {
            ticket_id: 999999,
            value: 60000,
            card_issuer: "VISA".to_string(),
            card_last_digits: "4242".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
