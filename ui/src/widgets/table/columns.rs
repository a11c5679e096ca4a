//! Column layout for the admin tables.

use carona_admin_business::FieldSpec;
use egui_extras::Column;

/// Fixed sizes for consistent table layout
pub const ID_WIDTH: f32 = 48.0;
pub const ACTIONS_WIDTH: f32 = 170.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Column configuration derived from the field schema: a narrow fixed
/// id column, flexible data columns, and a fixed trailing actions
/// column.
#[inline]
pub fn table_columns(fields: &[FieldSpec]) -> Vec<Column> {
    let mut columns = Vec::with_capacity(fields.len() + 1);
    for field in fields {
        columns.push(if field.key == "id" {
            Column::exact(ID_WIDTH)
        } else {
            Column::remainder().at_least(80.0)
        });
    }
    columns.push(Column::exact(ACTIONS_WIDTH));
    columns
}
