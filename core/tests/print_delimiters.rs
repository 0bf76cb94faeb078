use gridcell_core::{Position, Sheet};

fn pos(a1: &str) -> Position {
    Position::from_a1(a1).unwrap()
}

#[test]
fn print_texts_and_values_use_tab_and_newline_delimiters() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "1").unwrap();
    sheet.set_cell(pos("B2"), "hi").unwrap();

    let mut texts = String::new();
    sheet.print_texts(&mut texts).unwrap();
    assert_eq!(texts, "1\t\n\thi\n");

    let mut values = String::new();
    sheet.print_values(&mut values).unwrap();
    assert_eq!(values, "1\t\n\thi\n");
}
