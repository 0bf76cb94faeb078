use gridcell_core::{Position, Sheet, SheetError};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn self_referencing_formula_is_rejected_as_a_cycle() {
    let mut sheet = Sheet::new();
    let err = sheet.set_cell(pos("A1"), "=A1").unwrap_err();
    assert_eq!(err, SheetError::CircularDependency(pos("A1")));
    assert!(sheet.get_text(pos("A1")).unwrap().is_none());
}
