use super::*;

#[test]
fn resting_card_has_no_accent() {
    assert_eq!(card_class(CardAccent::Blue, false), "content-card");
    assert_eq!(card_class(CardAccent::Red, false), "content-card");
}

#[test]
fn hovered_card_uses_its_accent() {
    assert_eq!(card_class(CardAccent::Blue, true), "content-card content-card--hover-blue");
    assert_eq!(card_class(CardAccent::Red, true), "content-card content-card--hover-red");
}
