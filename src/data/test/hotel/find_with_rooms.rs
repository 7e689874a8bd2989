use super::*;

/// Tests loading a hotel with its rooms.
///
/// Expected: Ok(Some) with both rooms attached
#[tokio::test]
async fn returns_hotel_with_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let room_a = factory::create_room(db, hotel.id, 2).await?;
    let room_b = factory::create_room(db, hotel.id, 4).await?;

    let repo = HotelRepository::new(db);
    let result = repo
        .find_with_rooms(hotel.id)
        .await?
        .expect("hotel should exist");

    assert_eq!(result.hotel.id, hotel.id);
    assert_eq!(result.rooms.len(), 2);
    let ids: Vec<i32> = result.rooms.iter().map(|r| r.id).collect();
    assert!(ids.contains(&room_a.id));
    assert!(ids.contains(&room_b.id));

    Ok(())
}

/// Tests loading a hotel that has no rooms yet.
///
/// Expected: Ok(Some) with an empty room list
#[tokio::test]
async fn returns_hotel_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    let result = repo
        .find_with_rooms(hotel.id)
        .await?
        .expect("hotel should exist");

    assert!(result.rooms.is_empty());

    Ok(())
}

/// Tests loading a hotel that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let result = repo.find_with_rooms(999999).await?;

    assert!(result.is_none());

    Ok(())
}
