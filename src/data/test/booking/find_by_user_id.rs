use super::*;

/// Tests finding a user's booking joined with its room.
///
/// Expected: Ok(Some) with the booking id and the reserved room
#[tokio::test]
async fn returns_booking_with_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_hotel_with_room(db, 3).await?;
    let booking = factory::create_booking(db, room.id, user.id).await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_user_id(user.id).await?;

    let found = result.expect("booking should exist");
    assert_eq!(found.id, booking.id);
    assert_eq!(found.room.id, room.id);
    assert_eq!(found.room.capacity, 3);

    Ok(())
}

/// Tests the lookup for a user without a booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_user_id(user.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that another user's booking is not returned.
///
/// Expected: Ok(None) for the user without a booking
#[tokio::test]
async fn ignores_other_users_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_hotel, room) = factory::helpers::create_hotel_with_room(db, 3).await?;
    factory::create_booking(db, room.id, owner.id).await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_user_id(other.id).await?;

    assert!(result.is_none());

    Ok(())
}
