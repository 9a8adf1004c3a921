use super::*;

#[test]
fn scatter_is_deterministic() {
    assert_eq!(scatter01(7), scatter01(7));
    assert_eq!(scatter_percent(42), scatter_percent(42));
}

#[test]
fn scatter_stays_in_unit_interval() {
    for seed in 0..1000 {
        let value = scatter01(seed);
        assert!((0.0..1.0).contains(&value), "seed {seed} gave {value}");
    }
}

#[test]
fn different_seeds_spread_out() {
    let a = scatter01(1);
    let b = scatter01(2);
    let c = scatter01(3);
    assert!(a != b && b != c && a != c);
}

#[test]
fn range_respects_bounds() {
    for seed in 0..100 {
        let value = scatter_range(seed, 20.0, 120.0);
        assert!((20.0..120.0).contains(&value));
    }
}
