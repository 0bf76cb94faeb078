use gridcell_core::{Position, Sheet, Size};

#[test]
fn clearing_the_bottom_right_corner_shrinks_the_bounding_box() {
    let mut sheet = Sheet::new();
    for row in 0..4 {
        for col in 0..4 {
            sheet
                .set_cell(Position::new(row, col), &(row * 4 + col).to_string())
                .unwrap();
        }
    }
    assert_eq!(sheet.printable_size(), Size::new(4, 4));

    sheet.clear_cell(Position::new(3, 3)).unwrap();
    assert_eq!(sheet.printable_size(), Size::new(3, 3));
}
