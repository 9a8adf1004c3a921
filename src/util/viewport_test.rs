use super::*;

// =============================================================
// Width threshold
// =============================================================

#[test]
fn narrow_viewports_are_mobile() {
    assert!(is_mobile_width(320.0));
    assert!(is_mobile_width(767.9));
}

#[test]
fn threshold_width_is_desktop() {
    assert!(!is_mobile_width(768.0));
    assert!(!is_mobile_width(1920.0));
}

// =============================================================
// User agent markers
// =============================================================

#[test]
fn phone_user_agents_are_mobile() {
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
    ));
    assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14)"));
    assert!(is_mobile_user_agent("Opera Mini/8.0"));
}

#[test]
fn desktop_user_agents_are_not_mobile() {
    assert!(!is_mobile_user_agent(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36"
    ));
    assert!(!is_mobile_user_agent(""));
}

// =============================================================
// Low-power heuristic
// =============================================================

#[test]
fn mobile_is_always_low_power() {
    assert!(is_low_power(true, Some(16.0), Some(8)));
}

#[test]
fn scarce_memory_is_low_power() {
    assert!(is_low_power(false, Some(2.0), Some(8)));
    assert!(!is_low_power(false, Some(4.0), Some(8)));
}

#[test]
fn few_cores_is_low_power() {
    assert!(is_low_power(false, None, Some(2)));
    assert!(!is_low_power(false, None, Some(4)));
}

#[test]
fn absent_readings_stay_high_power() {
    assert!(!is_low_power(false, None, None));
}
