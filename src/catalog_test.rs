use super::*;

#[test]
fn lookup_by_product_key() {
    let headset = variant("headset").expect("headset exists");
    assert_eq!(headset.alt, "Headset");
    assert!(variant("Headset").is_none());
}

#[test]
fn speaker_has_two_colours_in_order() {
    let speaker = variant("Caixa de Som").expect("speaker exists");
    let keys: Vec<_> = speaker.colors.iter().map(|c| c.key).collect();
    assert_eq!(keys, ["Branco", "Verde"]);
    assert_eq!(speaker.color("Verde").map(|c| c.hex), Some("#18a324"));
}

#[test]
fn smartwatch_has_five_angles() {
    assert_eq!(variant("smartwatch").map(|v| v.angles.len()), Some(5));
}

#[test]
fn image_paths_follow_angle_order() {
    let headset = variant("headset").expect("headset exists");
    assert_eq!(
        headset.image_paths("img/", "preto"),
        vec!["img/headset/preto/frente.jpg".to_owned(), "img/headset/preto/lado.jpg".to_owned()]
    );
}

#[test]
fn image_paths_unknown_colour_is_empty() {
    let headset = variant("headset").expect("headset exists");
    assert!(headset.image_paths("img", "azul").is_empty());
}

#[test]
fn catalog_json_is_keyed_by_product() {
    let json: serde_json::Value = serde_json::from_str(&catalog_json().expect("serializes")).expect("valid json");
    assert_eq!(json["headset"]["colors"][0]["hex"], "#111111");
    assert_eq!(json["Caixa de Som"]["angles"][2], "3");
    assert!(json["smartwatch"].get("product").is_none());
}
