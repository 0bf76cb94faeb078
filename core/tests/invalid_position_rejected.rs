use gridcell_core::{Position, Sheet, SheetError};

#[test]
fn out_of_bounds_position_is_rejected_at_every_entry_point() {
    let mut sheet = Sheet::new();
    let huge = Position::new(u32::MAX, u32::MAX);

    assert_eq!(
        sheet.set_cell(huge, "1").unwrap_err(),
        SheetError::InvalidPosition(huge)
    );
    assert_eq!(
        sheet.clear_cell(huge).unwrap_err(),
        SheetError::InvalidPosition(huge)
    );
    assert_eq!(
        sheet.get_value(huge).unwrap_err(),
        SheetError::InvalidPosition(huge)
    );
    assert_eq!(
        sheet.get_text(huge).unwrap_err(),
        SheetError::InvalidPosition(huge)
    );
}
