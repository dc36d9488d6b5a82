/// Which screen the TUI is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Pick a time budget and spin
    Choose,
    /// Manage the task list
    Tasks,
}

impl Screen {
    pub fn toggle(self) -> Self {
        match self {
            Screen::Choose => Screen::Tasks,
            Screen::Tasks => Screen::Choose,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    CustomMinutes,
    ImportPath,
    /// Countdown ran out, waiting for "did you finish?"
    ConfirmExpired,
    ConfirmWipe,
}

impl UiMode {
    /// Modes that capture typed characters
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Self::AddingTask | Self::CustomMinutes | Self::ImportPath)
    }
}

/// Field of the add-task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Duration,
    Location,
    Group,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Duration,
            Self::Duration => Self::Location,
            Self::Location => Self::Group,
            Self::Group => Self::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Duration => "Duration (minutes)",
            Self::Location => "Location",
            Self::Group => "Group (optional)",
        }
    }

    pub fn all() -> &'static [FormField] {
        &[Self::Name, Self::Duration, Self::Location, Self::Group]
    }
}
