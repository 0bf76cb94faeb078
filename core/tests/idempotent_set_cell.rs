use gridcell_core::{CellValue, Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn reassigning_identical_text_is_a_no_op() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "=1+2").unwrap();
    sheet.get_value(pos("A1")).unwrap();

    sheet.set_cell(pos("A1"), "=1+2").unwrap();
    assert_eq!(
        sheet.get_value(pos("A1")).unwrap(),
        Some(CellValue::Number(3.0))
    );
}
