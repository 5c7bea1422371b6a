use calcboard::visibility::{
    Section, SectionStates, Visibility, clear_all, compute_visibility, select_all, toggle,
};

#[test]
fn select_all_tracks_every_combination() {
    for bits in 0..8_u8 {
        let states = SectionStates { expression: bits & 1 != 0,
                                     linear:     bits & 2 != 0,
                                     quadratic:  bits & 4 != 0, };
        let board = compute_visibility(states);
        assert_eq!(board.sections, states);
        assert_eq!(board.select_all, bits == 7, "states {states:?}");
    }
}

#[test]
fn select_all_and_clear_all() {
    assert_eq!(select_all(true),
               Visibility { sections:   SectionStates::uniform(true),
                            select_all: true, });
    assert_eq!(select_all(false), clear_all());
    assert_eq!(clear_all().visible_sections().count(), 0);
}

#[test]
fn toggling_one_section() {
    let board = toggle(select_all(true), Section::Linear, false);
    assert!(!board.select_all);
    assert_eq!(board.visible_sections().collect::<Vec<_>>(),
               vec![Section::Expression, Section::Quadratic]);

    let board = toggle(clear_all(), Section::Quadratic, true);
    assert_eq!(board.visible_sections().collect::<Vec<_>>(), vec![Section::Quadratic]);

    let board = [Section::Expression, Section::Linear].into_iter()
                                                      .fold(board, |b, s| toggle(b, s, true));
    assert!(board.select_all);
}
