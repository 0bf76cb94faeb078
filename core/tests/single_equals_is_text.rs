use gridcell_core::{CellValue, Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn a_single_equals_sign_is_text_not_a_formula_attempt() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "=").unwrap();
    assert_eq!(sheet.get_text(pos("A1")).unwrap().as_deref(), Some("="));
    assert_eq!(
        sheet.get_value(pos("A1")).unwrap(),
        Some(CellValue::Text("=".to_string()))
    );
}
