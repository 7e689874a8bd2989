use super::*;

/// Tests finding the user's enrollment.
///
/// Expected: Ok(Some) for an enrolled user, Ok(None) otherwise
#[tokio::test]
async fn finds_enrollment_by_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enrolled = factory::create_user(db).await?;
    let enrollment = factory::create_enrollment(db, enrolled.id).await?;
    let unenrolled = factory::create_user(db).await?;

    let repo = TicketRepository::new(db);

    let found = repo
        .find_enrollment_by_user_id(enrolled.id)
        .await?
        .expect("enrollment should exist");
    assert_eq!(found.id, enrollment.id);
    assert_eq!(found.user_id, enrolled.id);

    assert!(repo.find_enrollment_by_user_id(unenrolled.id).await?.is_none());

    Ok(())
}

/// Tests finding a ticket type by id.
///
/// Expected: Ok(Some) with matching flags, Ok(None) for a missing id
#[tokio::test]
async fn finds_type_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket_type = factory::create_remote_ticket_type(db).await?;

    let repo = TicketRepository::new(db);

    let found = repo
        .find_type_by_id(ticket_type.id)
        .await?
        .expect("type should exist");
    assert!(found.is_remote);
    assert!(!found.includes_hotel);

    assert!(repo.find_type_by_id(999999).await?.is_none());

    Ok(())
}

/// Tests listing every ticket type.
///
/// Expected: Ok with all types; an empty catalogue yields an empty list
#[tokio::test]
async fn lists_all_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);

    assert!(repo.find_all_types().await?.is_empty());

    factory::create_hotel_ticket_type(db).await?;
    factory::create_remote_ticket_type(db).await?;

    let types = repo.find_all_types().await?;
    assert_eq!(types.len(), 2);

    Ok(())
}
