use super::*;

#[test]
fn nothing_is_restored_outside_the_browser() {
    save_user(Some(&User { uid: "u1".into(), email: Some("a@b.c".into()), display_name: None, id_token: None }));
    assert_eq!(load_user(), None);
}

#[test]
fn clearing_without_a_browser_is_harmless() {
    save_user(None);
    assert_eq!(load_user(), None);
}
