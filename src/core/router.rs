//! Console navigation: which view is shown and what it loads first.

use crate::errors::{AppError, AppResult};
use crate::models::session::Role;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Admin,
    Officer,
}

impl Console {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Console::Admin,
            Role::Officer => Console::Officer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Console::Admin => "admin console",
            Console::Officer => "officer console",
        }
    }

    pub fn views(&self) -> &'static [View] {
        match self {
            Console::Officer => &[View::Monitoring, View::Events, View::Students, View::Sections],
            Console::Admin => &[
                View::Officers,
                View::Roster,
                View::Maintenance,
                View::Settings,
                View::Logs,
                View::Security,
            ],
        }
    }

    /// View shown right after sign-in.
    pub fn landing(&self) -> View {
        self.views()[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum View {
    // officer console
    Monitoring,
    Events,
    Students,
    Sections,
    // admin console
    Officers,
    Roster,
    Maintenance,
    Settings,
    Logs,
    Security,
}

/// Data a view fetches when it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialLoad {
    ActiveEventStats,
    EventList,
    StudentList,
    SectionList,
    OfficerList,
    AdminRoster,
    GlobalSettings,
    AuditLogs,
    ActiveSessions,
}

impl View {
    pub fn initial_load(&self) -> Option<InitialLoad> {
        match self {
            View::Monitoring => Some(InitialLoad::ActiveEventStats),
            View::Events => Some(InitialLoad::EventList),
            View::Students => Some(InitialLoad::StudentList),
            View::Sections => Some(InitialLoad::SectionList),
            View::Officers => Some(InitialLoad::OfficerList),
            View::Roster => Some(InitialLoad::AdminRoster),
            View::Settings => Some(InitialLoad::GlobalSettings),
            View::Logs => Some(InitialLoad::AuditLogs),
            View::Security => Some(InitialLoad::ActiveSessions),
            View::Maintenance => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Monitoring => "Live Monitoring",
            View::Events => "Events",
            View::Students => "Students",
            View::Sections => "Sections",
            View::Officers => "Officer Accounts",
            View::Roster => "Student Roster",
            View::Maintenance => "Maintenance",
            View::Settings => "Global Settings",
            View::Logs => "Audit Logs",
            View::Security => "Active Sessions",
        }
    }
}

pub struct Router {
    console: Console,
    current: View,
}

impl Router {
    pub fn new(console: Console) -> Self {
        Self {
            console,
            current: console.landing(),
        }
    }

    pub fn console(&self) -> Console {
        self.console
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Exactly one view of the console is visible at a time.
    pub fn is_visible(&self, view: View) -> bool {
        self.current == view
    }

    /// Switch to `view` and return the load it triggers. Views of the other
    /// console are refused and leave the current view in place.
    pub fn navigate(&mut self, view: View) -> AppResult<Option<InitialLoad>> {
        if !self.console.views().contains(&view) {
            return Err(AppError::Validation(format!(
                "view '{}' is not part of the {}",
                view.title(),
                self.console.label()
            )));
        }
        self.current = view;
        Ok(view.initial_load())
    }
}
