use gridcell_core::{CellValue, FormulaErrorKind, Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn referencing_non_numeric_text_is_a_value_error() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "hello").unwrap();
    sheet.set_cell(pos("A2"), "=A1+1").unwrap();
    assert_eq!(
        sheet.get_value(pos("A2")).unwrap(),
        Some(CellValue::Error(FormulaErrorKind::Value))
    );
}
