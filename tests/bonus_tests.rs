use weblab::web::grade::detect_bonuses;

#[test]
fn dark_theme_is_detected_in_the_stylesheet() {
    let css = "@media (prefers-color-scheme: dark) { body { background: #111; } }";
    let bonuses = detect_bonuses(None, Some(css));
    assert_eq!(bonuses, vec!["dark_theme".to_string()]);
}

#[test]
fn picture_element_counts_as_adaptive_images() {
    let html = "<picture><source srcset=\"a.webp\"><img src=\"a.png\" alt=\"a\"></picture>";
    let bonuses = detect_bonuses(Some(html), None);
    assert!(bonuses.contains(&"adaptive_images".to_string()));
}

#[test]
fn srcset_on_an_img_counts_as_adaptive_images() {
    let html = r#"<img src="a.png" srcset="a-2x.png 2x" alt="a">"#;
    let bonuses = detect_bonuses(Some(html), None);
    assert!(bonuses.contains(&"adaptive_images".to_string()));
}

#[test]
fn lazy_loading_counts_as_web_vitals() {
    let html = r#"<img src="a.png" loading="lazy" alt="a">"#;
    let bonuses = detect_bonuses(Some(html), None);
    assert!(bonuses.contains(&"web_vitals".to_string()));
}

#[test]
fn preconnect_hint_counts_as_web_vitals() {
    let html = r#"<head><link rel="preconnect" href="https://fonts.example"></head>"#;
    let bonuses = detect_bonuses(Some(html), None);
    assert!(bonuses.contains(&"web_vitals".to_string()));
}

#[test]
fn explicit_image_dimensions_count_as_web_vitals() {
    let html = r#"<img src="a.png" width="640" height="480" alt="a">"#;
    let bonuses = detect_bonuses(Some(html), None);
    assert!(bonuses.contains(&"web_vitals".to_string()));
}

#[test]
fn plain_sources_earn_no_bonuses() {
    let html = r#"<img src="a.png" alt="a">"#;
    let css = "body { color: black; }";
    assert!(detect_bonuses(Some(html), Some(css)).is_empty());
}

#[test]
fn missing_sources_earn_no_bonuses() {
    assert!(detect_bonuses(None, None).is_empty());
}
