use gridcell_core::{CellValue, Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn a_reference_to_a_never_set_cell_contributes_zero() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "=B1+1").unwrap();
    assert_eq!(
        sheet.get_value(pos("A1")).unwrap(),
        Some(CellValue::Number(1.0))
    );
}
