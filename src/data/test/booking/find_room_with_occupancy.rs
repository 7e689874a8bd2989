use super::*;

/// Tests counting the bookings held against a room.
///
/// Expected: Ok(Some) with the room and the number of its bookings
#[tokio::test]
async fn counts_existing_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hotel, room) = factory::helpers::create_hotel_with_room(db, 3).await?;
    let guest1 = factory::create_user(db).await?;
    let guest2 = factory::create_user(db).await?;
    factory::create_booking(db, room.id, guest1.id).await?;
    factory::create_booking(db, room.id, guest2.id).await?;

    let repo = BookingRepository::new(db);
    let occupancy = repo
        .find_room_with_occupancy(room.id)
        .await?
        .expect("room should exist");

    assert_eq!(occupancy.room.id, room.id);
    assert_eq!(occupancy.bookings, 2);
    assert!(!occupancy.is_full());

    Ok(())
}

/// Tests the occupancy read for a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let occupancy = repo.find_room_with_occupancy(999999).await?;

    assert!(occupancy.is_none());

    Ok(())
}

/// Tests that a room at capacity reports itself full.
///
/// Expected: is_full() true once the booking count reaches capacity
#[tokio::test]
async fn full_room_reports_full() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hotel, room) = factory::helpers::create_hotel_with_room(db, 1).await?;
    let guest = factory::create_user(db).await?;
    factory::create_booking(db, room.id, guest.id).await?;

    let repo = BookingRepository::new(db);
    let occupancy = repo
        .find_room_with_occupancy(room.id)
        .await?
        .expect("room should exist");

    assert!(occupancy.is_full());

    Ok(())
}

/// Tests that bookings in other rooms do not count toward occupancy.
///
/// Expected: occupancy zero for an untouched room
#[tokio::test]
async fn ignores_bookings_in_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let room_a = factory::create_room(db, hotel.id, 2).await?;
    let room_b = factory::create_room(db, hotel.id, 2).await?;
    let guest = factory::create_user(db).await?;
    factory::create_booking(db, room_a.id, guest.id).await?;

    let repo = BookingRepository::new(db);
    let occupancy = repo
        .find_room_with_occupancy(room_b.id)
        .await?
        .expect("room should exist");

    assert_eq!(occupancy.bookings, 0);

    Ok(())
}
