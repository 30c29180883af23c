pub mod screen;

pub use screen::{EmployeesScreen, FlowState, FormFlow, ImportFlow, ImportState};
