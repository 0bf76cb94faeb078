use gridcell_core::{CellValue, Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn division_formula_evaluates_and_grows_printable_size() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "1").unwrap();
    sheet.set_cell(pos("A2"), "20").unwrap();
    sheet.set_cell(pos("B2"), "=A2/A1").unwrap();

    assert_eq!(
        sheet.get_value(pos("B2")).unwrap(),
        Some(CellValue::Number(20.0))
    );
    assert_eq!(sheet.get_text(pos("B2")).unwrap().as_deref(), Some("=A2/A1"));
    assert_eq!(sheet.printable_size(), gridcell_core::Size::new(2, 2));
}
