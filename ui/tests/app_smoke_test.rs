use egui_kittest::Harness;
use kittest::Queryable;
use modboard_ui::{ModboardApp, sample_records};

/// Boots the full eframe app shell and checks the table shows up with the
/// built-in sample records.
#[test]
fn test_app_renders_users_table() {
    let app = ModboardApp::new(sample_records());
    let mut harness = Harness::new_eframe(|_| app);

    harness.run();

    assert!(
        harness
            .query_by_label_contains("Users pending moderation")
            .is_some(),
        "heading should render"
    );
    assert!(
        harness.query_by_label("dana@example.com").is_some(),
        "sample record email should render"
    );
    assert!(
        harness.query_by_label("1,234.5").is_some(),
        "sample record amount should render formatted"
    );
}
