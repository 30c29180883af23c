pub mod template;
pub mod xlsx;

pub use template::{write_template, TEMPLATE_FILE_NAME, TEMPLATE_SHEET_NAME};
pub use xlsx::read_employee_rows;
