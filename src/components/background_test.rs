use super::*;

#[test]
fn full_profile_renders_all_layers() {
    assert_eq!(orb_count(false), 8);
    assert_eq!(particle_count(false), 30);
}

#[test]
fn low_power_profile_thins_layers() {
    assert_eq!(orb_count(true), 3);
    assert_eq!(particle_count(true), 10);
}
