use super::*;

fn sample() -> Theme {
    let mut theme = Theme::new("main");
    theme.insert("bg.fgColor", ThemeValue::Color(Color(0x112233)));
    theme.insert("bg.padding", ThemeValue::Insets([1, 2, 3, 4]));
    theme.insert("bgColor", ThemeValue::Color(Color(0xFFFFFF)));
    theme.insert("bgx.fgColor", ThemeValue::Color(Color(0x000001)));
    theme.insert("Button.bgImage", ThemeValue::Image(Ref::Pending("btn".into())));
    theme
}

#[test]
fn key_suffix_picks_payload_shape() {
    assert_eq!(KeyShape::of("Button.fgColor"), Some(KeyShape::Color));
    assert_eq!(KeyShape::of("bgColor"), Some(KeyShape::Color));
    assert_eq!(KeyShape::of("Label.transparency"), Some(KeyShape::Transparency));
    assert_eq!(KeyShape::of("Label.margin"), Some(KeyShape::Insets));
    assert_eq!(KeyShape::of("Label.border"), Some(KeyShape::Border));
    assert_eq!(KeyShape::of("Label.font"), Some(KeyShape::Font));
    assert_eq!(KeyShape::of("Form.background"), Some(KeyShape::Background));
    assert_eq!(KeyShape::of("Form.bgImage"), Some(KeyShape::Image));
    assert_eq!(KeyShape::of("Form.scaledImage"), Some(KeyShape::ScaledImage));
    assert_eq!(KeyShape::of("Form.bgGradient"), Some(KeyShape::BackgroundGradient));
    assert_eq!(KeyShape::of("Form.width"), None);
}

#[test]
fn attributes_of_strips_only_the_exact_selector() {
    let theme = sample();
    let attributes: Vec<(&str, String)> = theme
        .attributes_of("bg")
        .map(|(key, value)| (key, value.to_string()))
        .collect();
    assert_eq!(
        attributes,
        vec![
            ("fgColor", "112233".to_string()),
            ("padding", "1,2,3,4".to_string()),
        ]
    );
}

#[test]
fn pending_references_list_unresolved_names() {
    let mut theme = sample();
    theme.insert(
        "Button.border",
        ThemeValue::Border(ThemeBorder::from(crate::Border::Image(crate::ImageBorder {
            images: vec![Ref::Pending("top".into()), Ref::Pending("corner".into())],
        }))),
    );
    assert_eq!(
        theme.pending_references(),
        vec![
            ("Button.bgImage", "btn"),
            ("Button.border", "top"),
            ("Button.border", "corner"),
        ]
    );
    assert!(!theme.is_wired());

    theme.remove("Button.bgImage");
    theme.remove("Button.border");
    assert!(theme.is_wired());
}

#[test]
fn remove_keeps_insertion_order() {
    let mut theme = sample();
    theme.remove("bg.padding");
    let keys: Vec<&str> = theme.entries().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["bg.fgColor", "bgColor", "bgx.fgColor", "Button.bgImage"]);
    assert_eq!(theme.color("bgColor"), Some(Color(0xFFFFFF)));
    assert_eq!(theme.color("Button.bgImage"), None);
}
