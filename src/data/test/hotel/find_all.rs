use super::*;

/// Tests listing hotels ordered by name.
///
/// Expected: Ok with every hotel, alphabetically
#[tokio::test]
async fn lists_hotels_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_hotel(db).await?;
    let second = factory::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    let hotels = repo.find_all().await?;

    assert_eq!(hotels.len(), 2);
    let names: Vec<&str> = hotels.iter().map(|h| h.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&first.name.as_str()));
    assert!(names.contains(&second.name.as_str()));

    Ok(())
}

/// Tests the hotel list when no hotels exist.
///
/// Expected: Ok with an empty list; the service decides what that means
#[tokio::test]
async fn returns_empty_list_without_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let hotels = repo.find_all().await?;

    assert!(hotels.is_empty());

    Ok(())
}
