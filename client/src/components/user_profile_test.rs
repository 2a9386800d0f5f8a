use super::*;

#[test]
fn avatar_src_uses_picture_when_present() {
    assert_eq!(avatar_src(Some("https://img.example.com/a.png")), "https://img.example.com/a.png");
}

#[test]
fn avatar_src_falls_back_to_placeholder() {
    assert_eq!(avatar_src(None), "https://via.placeholder.com/40");
    assert_eq!(avatar_src(Some(" ")), "https://via.placeholder.com/40");
}
