//! Per-screen state that is not derivable from the record collection: the
//! create/edit popup flow, the import flow, and the employees screen's
//! selection and assignment choices.

use crate::domain::listview::{QueryState, SelectionSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    FormOpen,
    Submitting,
}

/// Create/edit popup lifecycle:
/// `Idle -> FormOpen -> Submitting -> Idle` on success, back to `FormOpen`
/// with an inline message on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFlow {
    state: FlowState,
    error: Option<String>,
}

impl FormFlow {
    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.state != FlowState::Idle
    }

    pub fn open(&mut self) {
        self.state = FlowState::FormOpen;
        self.error = None;
    }

    /// Closing only hides the popup; an in-flight request keeps running.
    pub fn close(&mut self) {
        self.state = FlowState::Idle;
        self.error = None;
    }

    /// Validation failed before the network was reached: the form stays
    /// open with the message inline.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.state = FlowState::FormOpen;
        self.error = Some(message.into());
    }

    pub fn begin_submit(&mut self) {
        if self.state == FlowState::FormOpen {
            self.state = FlowState::Submitting;
            self.error = None;
        }
    }

    /// Resolves the in-flight submit; ignored unless one is in flight.
    pub fn finish(&mut self, result: Result<(), String>) {
        if self.state != FlowState::Submitting {
            return;
        }
        match result {
            Ok(()) => self.close(),
            Err(message) => {
                self.state = FlowState::FormOpen;
                self.error = Some(message);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportState {
    #[default]
    Idle,
    ImportOpen,
    Importing,
}

/// Import popup lifecycle: the loop either finishes clean (`Idle`) or
/// leaves the popup open showing what went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportFlow {
    state: ImportState,
    error: Option<String>,
}

impl ImportFlow {
    pub fn state(&self) -> ImportState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.state = ImportState::ImportOpen;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.state = ImportState::Idle;
        self.error = None;
    }

    pub fn begin(&mut self) {
        if self.state == ImportState::ImportOpen {
            self.state = ImportState::Importing;
            self.error = None;
        }
    }

    /// Resolves the in-flight import; ignored unless one is in flight.
    pub fn finish(&mut self, result: Result<(), String>) {
        if self.state != ImportState::Importing {
            return;
        }
        match result {
            Ok(()) => self.close(),
            Err(message) => {
                self.state = ImportState::ImportOpen;
                self.error = Some(message);
            }
        }
    }
}

/// State the employees screen owns beyond its query: the cross-page
/// selection and the assign-leave-types popup choices.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeesScreen {
    pub query: QueryState,
    pub selection: SelectionSet,
    pub assign: FormFlow,
    pub year_period: i64,
    pub leave_type_ids: Vec<i64>,
}

impl EmployeesScreen {
    pub fn new(current_year: i64) -> Self {
        Self {
            query: QueryState::new("full_name"),
            selection: SelectionSet::new(),
            assign: FormFlow::default(),
            year_period: current_year,
            leave_type_ids: Vec::new(),
        }
    }

    /// Changing the year period invalidates the leave-type choices, which
    /// are scoped to that year.
    pub fn set_year_period(&mut self, year: i64) {
        if self.year_period != year {
            self.leave_type_ids.clear();
        }
        self.year_period = year;
    }

    pub fn toggle_leave_type(&mut self, leave_type_id: i64, checked: bool) {
        if checked {
            if !self.leave_type_ids.contains(&leave_type_id) {
                self.leave_type_ids.push(leave_type_id);
            }
        } else {
            self.leave_type_ids.retain(|id| *id != leave_type_id);
        }
    }

    /// Cancel or close of the assign popup drops every choice, including
    /// the selection itself.
    pub fn close_assign(&mut self, current_year: i64) {
        self.assign.close();
        self.selection.clear();
        self.leave_type_ids.clear();
        self.year_period = current_year;
    }

    /// After a successful batch submit the screen starts over.
    pub fn assign_succeeded(&mut self, current_year: i64) {
        self.close_assign(current_year);
        self.query.reset();
    }
}
