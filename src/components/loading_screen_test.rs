use super::*;

// ====== Progress ramp ======

#[test]
fn progress_climbs_two_per_tick() {
    assert_eq!(advance_progress(0), 2);
    assert_eq!(advance_progress(42), 44);
}

#[test]
fn progress_caps_at_one_hundred() {
    assert_eq!(advance_progress(99), 100);
    assert_eq!(advance_progress(100), 100);
}

#[test]
fn full_ramp_takes_fifty_ticks() {
    let mut progress = 0u8;
    let mut ticks = 0u32;
    while progress < 100 {
        progress = advance_progress(progress);
        ticks += 1;
    }
    assert_eq!(ticks, 50);
}

// ====== Status line ======

#[test]
fn status_line_cycles_through_all_texts() {
    assert_eq!(LOADING_TEXTS.len(), 5);
    let mut index = 0;
    let seen: Vec<&str> = (0..LOADING_TEXTS.len())
        .map(|_| {
            let text = LOADING_TEXTS[index];
            index = next_text_index(index);
            text
        })
        .collect();
    assert_eq!(
        seen,
        [
            "Initializing",
            "Loading Assets",
            "Building Interface",
            "Almost Ready",
            "Finalizing",
        ]
    );
    assert_eq!(index, 0);
}
