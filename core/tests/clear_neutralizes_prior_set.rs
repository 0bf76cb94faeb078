use gridcell_core::{Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn set_then_clear_matches_never_having_set() {
    let mut with_detour = Sheet::new();
    with_detour.set_cell(pos("B1"), "=A1+1").unwrap();
    with_detour.set_cell(pos("A1"), "1").unwrap();
    with_detour.clear_cell(pos("A1")).unwrap();

    let mut without_detour = Sheet::new();
    without_detour.set_cell(pos("B1"), "=A1+1").unwrap();

    assert_eq!(
        with_detour.get_value(pos("B1")).unwrap(),
        without_detour.get_value(pos("B1")).unwrap()
    );
}
