use lib::game::{Catalog, GameState};
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(state: &GameState, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => state.moves(state.turn()).len(),
        d => state
            .moves(state.turn())
            .into_iter()
            .par_bridge()
            .map(|m| {
                let mut next = state.clone();
                assert!(next.make_move(m, next.turn()));
                perft(&next, d - 1)
            })
            .sum(),
    }
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    // A monomino and a domino each.
    let catalog: Catalog = "*\n\n**".parse()?;
    let state = GameState::new(catalog);

    assert_eq!(perft(&state, 1), 5);
    assert_eq!(perft(&state, 2), 25);
    assert_eq!(perft(&state, 3), 120);
    assert_eq!(perft(&state, 4), 576);
    assert_eq!(perft(&state, 5), 0);
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn both_sides_have_as_many_opening_moves() {
    let mut state = GameState::default();
    let orange = perft(&state, 1);
    state.pass();
    let purple = perft(&state, 1);

    assert!(orange > 0);
    assert_eq!(orange, purple);
}
