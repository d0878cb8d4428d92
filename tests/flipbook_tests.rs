// Host-side tests for flip state, restacking and the click controller.
// The web crate is wasm-only, so these drive `flipbook_core` directly.

use flipbook_core::{BookController, BookEffect, Flipbook};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_stacking(book: &Flipbook) {
    let pages = book.pages();
    let max_unflipped = pages.iter().filter(|p| !p.flipped).map(|p| p.z_index).max();
    let min_flipped = pages.iter().filter(|p| p.flipped).map(|p| p.z_index).min();
    if let (Some(u), Some(f)) = (max_unflipped, min_flipped) {
        assert!(f > u, "flipped z {f} must be above unflipped z {u}");
    }
    let mut z = book.z_indices();
    z.sort_unstable();
    let expected: Vec<i32> = (1..=pages.len() as i32).collect();
    assert_eq!(z, expected, "z-indices must be a permutation of 1..=N");
}

#[test]
fn new_book_stacks_first_page_on_top() {
    let book = Flipbook::new(5, Some(4));
    assert_eq!(book.z_indices(), vec![5, 4, 3, 2, 1]);
    assert_eq!(book.flipped(), vec![false; 5]);
    assert_eq!(book.last_page(), Some(4));
}

#[test]
fn out_of_range_last_page_is_ignored() {
    let book = Flipbook::new(3, Some(10));
    assert_eq!(book.last_page(), None);
    assert!(!book.is_last_page(10));
}

#[test]
fn flipped_pages_stack_above_unflipped() {
    let mut book = Flipbook::new(5, None);
    assert_eq!(book.toggle(0), Some(true));
    assert_eq!(book.toggle(1), Some(true));
    // page 1 was turned last, so it sits on top of the flipped stack
    assert_eq!(book.z_indices(), vec![4, 5, 3, 2, 1]);
    assert_stacking(&book);
}

#[test]
fn toggling_twice_restores_state_and_order() {
    let mut book = Flipbook::new(6, None);
    book.toggle(0);
    book.toggle(1);
    let before_flipped = book.flipped();
    let before_z = book.z_indices();

    book.toggle(3);
    book.toggle(3);

    assert_eq!(book.flipped(), before_flipped);
    assert_eq!(book.z_indices(), before_z);
}

#[test]
fn toggle_out_of_range_is_none() {
    let mut book = Flipbook::new(2, None);
    assert_eq!(book.toggle(2), None);
    assert_eq!(book.z_indices(), vec![2, 1]);
}

#[test]
fn stacking_holds_over_random_click_sequences() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(1..20);
        let mut book = Flipbook::new(n, Some(n - 1));
        for _ in 0..200 {
            book.toggle(rng.gen_range(0..n));
            assert_stacking(&book);
        }
    }
}

#[test]
fn lazy_load_is_idempotent_and_range_checked() {
    let mut book = Flipbook::new(3, None);
    assert!(book.lazy_load(1));
    assert!(!book.lazy_load(1));
    assert!(book.page(1).map(|p| p.images_loaded).unwrap_or(false));
    assert!(!book.lazy_load(3));
    assert!(!book.lazy_load(usize::MAX));
}

#[test]
fn look_ahead_names_next_two_pages() {
    assert_eq!(Flipbook::look_ahead(3).as_slice(), &[4, 5]);
}

#[test]
fn first_click_starts_audio_and_flips() {
    let mut ctl = BookController::new(5, Some(4));
    let mut effects = Vec::new();
    ctl.on_page_click(0, &mut effects);

    assert_eq!(ctl.book.flipped(), vec![true, false, false, false, false]);
    assert!(ctl.audio.is_playing());
    assert_eq!(
        &effects[..5],
        &[
            BookEffect::StartPlayback,
            BookEffect::InitVisualizer,
            BookEffect::RevealImages(1),
            BookEffect::RevealImages(2),
            BookEffect::SetFlipped {
                index: 0,
                flipped: true
            },
        ]
    );
    let z_updates = effects
        .iter()
        .filter(|e| matches!(e, BookEffect::SetZIndex { .. }))
        .count();
    assert_eq!(z_updates, 5);
    assert!(!effects.contains(&BookEffect::PauseAudio));
}

#[test]
fn second_click_unflips_without_restarting_audio() {
    let mut ctl = BookController::new(5, Some(4));
    let initial_z = ctl.book.z_indices();
    let mut effects = Vec::new();
    ctl.on_page_click(0, &mut effects);
    effects.clear();
    ctl.on_page_click(0, &mut effects);

    assert_eq!(ctl.book.flipped(), vec![false; 5]);
    assert_eq!(ctl.book.z_indices(), initial_z);
    assert!(!effects.contains(&BookEffect::StartPlayback));
    assert!(!effects.contains(&BookEffect::InitVisualizer));
    assert!(!effects
        .iter()
        .any(|e| matches!(e, BookEffect::RevealImages(_))));
    assert_eq!(
        effects[0],
        BookEffect::SetFlipped {
            index: 0,
            flipped: false
        }
    );
}

#[test]
fn last_page_pauses_when_flipped_and_resumes_when_unflipped() {
    let mut ctl = BookController::new(3, Some(2));
    let mut effects = Vec::new();
    ctl.on_page_click(2, &mut effects);
    assert_eq!(effects.last(), Some(&BookEffect::PauseAudio));

    effects.clear();
    ctl.on_page_click(2, &mut effects);
    assert_eq!(effects.last(), Some(&BookEffect::ResumeAudio));
    assert!(!effects.contains(&BookEffect::PauseAudio));
}

#[test]
fn rejected_playback_is_retried_on_next_click() {
    let mut ctl = BookController::new(4, None);
    let mut effects = Vec::new();
    ctl.on_page_click(0, &mut effects);
    ctl.on_playback_rejected("NotAllowedError");
    assert!(!ctl.audio.is_playing());

    effects.clear();
    ctl.on_page_click(1, &mut effects);
    assert_eq!(effects[0], BookEffect::StartPlayback);
    // the analyser graph is only ever wired once
    assert!(!effects.contains(&BookEffect::InitVisualizer));
    assert!(ctl.audio.is_playing());
}

#[test]
fn click_out_of_range_does_nothing() {
    let mut ctl = BookController::new(2, Some(1));
    let mut effects = Vec::new();
    ctl.on_page_click(5, &mut effects);
    assert!(effects.is_empty());
    assert!(!ctl.audio.is_playing());
    assert_eq!(ctl.book.flipped(), vec![false, false]);
}

#[test]
fn initial_reveal_covers_first_pages_once() {
    let mut ctl = BookController::new(3, None);
    let mut effects = Vec::new();
    ctl.reveal_initial(2, &mut effects);
    assert_eq!(
        effects,
        vec![BookEffect::RevealImages(0), BookEffect::RevealImages(1)]
    );

    effects.clear();
    ctl.on_page_click(0, &mut effects);
    // page 1 was already revealed at startup
    let reveals: Vec<_> = effects
        .iter()
        .filter(|e| matches!(e, BookEffect::RevealImages(_)))
        .cloned()
        .collect();
    assert_eq!(reveals, vec![BookEffect::RevealImages(2)]);
}

#[test]
fn last_page_is_found_only_by_id() {
    let ids = ["page-1", "page-2", "page-16", "page-17"];
    assert_eq!(Flipbook::find_last_page(&ids, "page-16"), Some(2));

    let unnamed = ["page-1", "", "page-3"];
    assert_eq!(Flipbook::find_last_page(&unnamed, "page-16"), None);
    let empty: [&str; 0] = [];
    assert_eq!(Flipbook::find_last_page(&empty, "page-16"), None);
}

#[test]
fn book_without_last_page_never_pauses() {
    let ids = ["a", "b", "c"];
    let mut ctl = BookController::new(3, Flipbook::find_last_page(&ids, "page-16"));
    let mut effects = Vec::new();
    for index in [2, 2, 0, 1, 2] {
        ctl.on_page_click(index, &mut effects);
    }
    assert!(!effects.contains(&BookEffect::PauseAudio));
    assert!(!effects.contains(&BookEffect::ResumeAudio));
}

#[test]
fn first_click_on_last_page_starts_then_pauses() {
    let mut ctl = BookController::new(3, Some(2));
    let mut effects = Vec::new();
    ctl.on_page_click(2, &mut effects);
    assert_eq!(effects.first(), Some(&BookEffect::StartPlayback));
    assert_eq!(effects.last(), Some(&BookEffect::PauseAudio));

    // the pause supersedes the pending start; that is not a host refusal
    ctl.on_playback_rejected(
        "AbortError: The play() request was interrupted by a call to pause().",
    );
    assert!(ctl.audio.is_playing());

    effects.clear();
    ctl.on_page_click(0, &mut effects);
    assert!(!effects.contains(&BookEffect::StartPlayback));
}

#[test]
fn blocked_start_still_clears_playing() {
    let mut ctl = BookController::new(3, Some(2));
    let mut effects = Vec::new();
    ctl.on_page_click(0, &mut effects);
    ctl.on_playback_rejected("NotAllowedError: play() failed because the user didn't interact");
    assert!(!ctl.audio.is_playing());
}
