use shared::models::EmployeeId;

/// State of the add/edit form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    Editing(EmployeeId),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing_id(&self) -> Option<EmployeeId> {
        match self {
            Self::Editing(id) => Some(*id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Editing(_) => "Edit Employee",
            _ => "Add New Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Editing(_) => "Update",
            _ => "Add",
        }
    }
}

/// The dialog that currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Form(FormMode),
    /// Overlays the form when both are open
    ConfirmDelete(EmployeeId),
}
