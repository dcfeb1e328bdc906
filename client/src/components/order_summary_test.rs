use super::*;

#[test]
fn item_details_shows_size_when_present() {
    assert_eq!(item_details(Some("Large")), "Size: Large");
}

#[test]
fn item_details_falls_back_to_regular() {
    assert_eq!(item_details(None), "Regular");
}
