use super::*;

/// Tests inserting a booking row.
///
/// Expected: Ok with the booking persisted for the user and room
#[tokio::test]
async fn creates_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_hotel_with_room(db, 2).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(room.id, user.id).await?;

    assert!(booking.id > 0);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.room_id, room.id);

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the foreign key constraint on room_id.
///
/// Expected: Err(DbErr) when the room does not exist
#[tokio::test]
async fn fails_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo.create(999999, user.id).await;

    assert!(result.is_err());

    Ok(())
}
