use super::*;

#[test]
fn browser_report_attests_clean_posture() {
    let report = browser_report();
    assert_eq!(report.device_id, WEB_DEVICE_ID);
    assert!(!report.is_rooted);
    assert!(report.app_signature_valid);
    assert!(!report.has_debugger);
    assert!(!report.is_emulator);
}
