use gridcell_core::{CellValue, Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn sum_over_a_contiguous_range_includes_every_cell() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "1").unwrap();
    sheet.set_cell(pos("A2"), "2").unwrap();
    sheet.set_cell(pos("A3"), "3").unwrap();
    sheet.set_cell(pos("B1"), "=SUM(A1:A3)").unwrap();

    assert_eq!(
        sheet.get_value(pos("B1")).unwrap(),
        Some(CellValue::Number(6.0))
    );
}
