use super::*;

/// Tests re-pointing a booking at another room.
///
/// Expected: Ok with the booking now referencing the new room
#[tokio::test]
async fn moves_booking_to_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hotel = factory::create_hotel(db).await?;
    let room_a = factory::create_room(db, hotel.id, 2).await?;
    let room_b = factory::create_room(db, hotel.id, 2).await?;
    let booking = factory::create_booking(db, room_a.id, user.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo.update_room(booking.id, room_b.id).await?;

    assert_eq!(updated.id, booking.id);
    assert_eq!(updated.room_id, room_b.id);

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .expect("booking should exist");
    assert_eq!(stored.room_id, room_b.id);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hotel, room) = factory::helpers::create_hotel_with_room(db, 2).await?;

    let repo = BookingRepository::new(db);
    let result = repo.update_room(999999, room.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
