use weblab::web::grade::responsive::{
    BreakpointThresholds, inspect_stylesheet, responsive_finding,
};

const FULL_SHEET: &str = r#"
body { display: flex; }
.cards { display: grid; }
a:focus { outline: 2px solid; }
@media (max-width: 600px) { body { font-size: 14px; } }
@media (min-width: 601px) and (max-width: 1024px) { body { font-size: 16px; } }
@media (min-width: 1025px) { body { font-size: 18px; } }
"#;

#[test]
fn full_sheet_satisfies_every_check() {
    let facts = inspect_stylesheet(Some(FULL_SHEET), &BreakpointThresholds::default());
    assert!(facts.breakpoints_ok);
    assert!(facts.has_narrow && facts.has_medium && facts.has_wide);
    assert!(facts.has_flex);
    assert!(facts.has_grid);
    assert!(facts.has_focus);
    assert_eq!(facts.conditions.len(), 3);

    let finding = responsive_finding(&facts);
    assert_eq!(finding.score, 25);
    assert!(finding.issues.is_empty());
}

#[test]
fn two_tiers_are_not_enough() {
    let css = r#"
@media (max-width: 600px) { body { color: red; } }
@media (min-width: 1025px) { body { color: blue; } }
"#;
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(!facts.breakpoints_ok);
    assert!(facts.has_narrow && facts.has_wide && !facts.has_medium);

    let finding = responsive_finding(&facts);
    assert_eq!(finding.score, 0);
    assert!(finding.issues.iter().any(|i| i.contains("medium")));
}

#[test]
fn min_width_zero_counts_as_narrow() {
    let css = "@media (min-width: 0) { body { margin: 0; } }";
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(facts.has_narrow);
}

#[test]
fn em_valued_breakpoints_are_not_pixel_tiers() {
    // 40em is roughly 640px; reading it as 40px would fake narrow coverage.
    let css = "@media (max-width: 40em) { body { color: red; } }";
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(!facts.has_narrow);
    assert!(!facts.has_medium && !facts.has_wide);
}

#[test]
fn unitless_zero_still_counts_as_narrow() {
    let css = "@media (min-width: 0) and (max-width: 37.5rem) { body { margin: 0; } }";
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(facts.has_narrow);
    assert!(!facts.has_medium);
}

#[test]
fn width_properties_inside_rules_are_not_breakpoints() {
    // max-width as a layout property must not count as a media condition.
    let css = ".container { max-width: 600px; } @media (min-width: 1200px) { body { color: blue; } }";
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(!facts.has_narrow);
    assert!(facts.has_wide);
}

#[test]
fn focus_visible_counts_as_focus_styling() {
    let css = "button:focus-visible { outline: 3px dashed; }";
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(facts.has_focus);
}

#[test]
fn hover_alone_is_not_focus_styling() {
    let css = "a:hover { color: red; }";
    let facts = inspect_stylesheet(Some(css), &BreakpointThresholds::default());
    assert!(!facts.has_focus);
}

#[test]
fn missing_sheet_yields_empty_facts() {
    let facts = inspect_stylesheet(None, &BreakpointThresholds::default());
    assert!(!facts.breakpoints_ok && !facts.has_flex && !facts.has_grid && !facts.has_focus);
    let finding = responsive_finding(&facts);
    assert_eq!(finding.score, 0);
    assert_eq!(finding.issues.len(), 3);
}

#[test]
fn malformed_css_never_panics() {
    let facts = inspect_stylesheet(
        Some("@media {{{ lol } body { display: flex"),
        &BreakpointThresholds::default(),
    );
    // Error recovery may still find the flex declaration; the point is that
    // nothing propagates.
    assert!(!facts.breakpoints_ok);
}

#[test]
fn custom_thresholds_shift_the_tiers() {
    let thresholds = BreakpointThresholds {
        narrow_max: 480,
        medium_min: 481,
        medium_max: 900,
        wide_min:   901,
    };
    let css = r#"
@media (max-width: 480px) { body { color: red; } }
@media (max-width: 900px) { body { color: green; } }
@media (min-width: 901px) { body { color: blue; } }
"#;
    let facts = inspect_stylesheet(Some(css), &thresholds);
    assert!(facts.breakpoints_ok);
}
