use jalali_store_admin::{audit::change_message, models::AdminAction};

#[test]
fn change_messages_read_like_sentences() {
    assert_eq!(change_message(&[]), "No fields changed.");
    assert_eq!(change_message(&["is_active"]), "Changed is_active.");
    assert_eq!(change_message(&["name", "price"]), "Changed name and price.");
    assert_eq!(
        change_message(&["name", "price", "created_at"]),
        "Changed name, price and created_at."
    );
}

#[test]
fn admin_actions_round_trip_through_storage_names() {
    for action in [AdminAction::Addition, AdminAction::Change] {
        assert_eq!(AdminAction::parse(action.as_str()), Some(action));
    }
    assert_eq!(AdminAction::parse("deletion"), None);
}
