use crate::core::events::EventFilter;
use crate::core::router::View;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// Terminal client for the student attendance backend
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance consoles in the terminal: kiosk check-in, officer monitoring and admin maintenance",
    long_about = None
)]
pub struct Cli {
    /// Override the backend API base URL (e.g. http://host:5000/api)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Override the local store path (useful for tests or several profiles)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the local store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "fix", requires = "check", help = "Add missing fields with defaults")]
        fix: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the local journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Sign in and store the session
    Login {
        username: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Validate the stored session against the backend
    Whoami,

    /// Change the password of the signed-in account
    Password {
        #[arg(long)]
        current: Option<String>,

        #[arg(long = "new")]
        new_password: Option<String>,
    },

    /// Open a console view and show its initial data
    View {
        #[arg(value_enum)]
        view: View,
    },

    /// Run the check-in kiosk: one student number per line
    Kiosk,

    /// Live statistics and attendance log of an event
    Monitor {
        /// Event id (default: the active event)
        #[arg(long)]
        event: Option<i64>,

        /// Keep refreshing until interrupted or signed out
        #[arg(long)]
        follow: bool,
    },

    /// Export the attendance report of an event
    Export {
        /// Event id (default: the active event)
        #[arg(long)]
        event: Option<i64>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: attendance_report_<id>.<format>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Student roster
    #[command(subcommand)]
    Students(StudentsCmd),

    /// Officer accounts (admin)
    #[command(subcommand)]
    Officers(OfficersCmd),

    /// Events and the active event
    #[command(subcommand)]
    Events(EventsCmd),

    /// Sections and the section folder browser
    #[command(subcommand)]
    Sections(SectionsCmd),

    /// Attendance spreadsheet of one section for one event
    Sheet {
        #[arg(long)]
        event: i64,

        #[arg(long)]
        program: String,

        #[arg(long)]
        year: String,

        #[arg(long)]
        section: String,

        #[arg(long, short = 's')]
        search: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Admin maintenance
    #[command(subcommand)]
    Admin(AdminCmd),
}

/// Fields of a student record. Empty means "keep" when editing.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct StudentFields {
    #[arg(long = "first")]
    pub first_name: Option<String>,

    #[arg(long = "middle")]
    pub middle_name: Option<String>,

    #[arg(long = "last")]
    pub last_name: Option<String>,

    #[arg(long)]
    pub program: Option<String>,

    #[arg(long = "year")]
    pub year_level: Option<String>,

    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Subcommand)]
pub enum StudentsCmd {
    /// Search, filter, sort and page through the roster
    List {
        #[arg(long, short = 's')]
        search: Option<String>,

        #[arg(long)]
        program: Option<String>,

        #[arg(long = "year")]
        year_level: Option<String>,

        #[arg(long)]
        section: Option<String>,

        /// Sort field; repeat the same field to reverse the order
        #[arg(long)]
        sort: Vec<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Register a student
    Add {
        student_no: String,

        #[command(flatten)]
        fields: StudentFields,
    },

    /// Edit a student; omitted fields keep their value
    Edit {
        student_no: String,

        #[command(flatten)]
        fields: StudentFields,
    },

    /// Delete a student
    Delete {
        student_no: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Sections available for a program and year level
    AvailableSections {
        #[arg(long)]
        program: String,

        #[arg(long = "year")]
        year_level: String,
    },

    /// Admin roster: first rows of the search result
    Roster {
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Report students sharing the same name
    Duplicates {
        /// Ask the backend instead of scanning locally
        #[arg(long)]
        server: bool,
    },

    /// Write the CSV import template
    Template {
        #[arg(long, default_value = ".")]
        dir: String,
    },

    /// Upload a roster CSV
    Import { file: String },

    /// Move every student up one year level
    Promote {
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move the given students down one year level
    Demote {
        student_nos: Vec<String>,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum OfficersCmd {
    List {
        #[arg(long, short = 's')]
        search: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    Add {
        username: String,

        #[arg(long)]
        password: Option<String>,

        #[arg(long, default_value = "officer")]
        role: String,
    },

    Edit {
        username: String,

        #[arg(long)]
        role: Option<String>,

        #[arg(long, conflicts_with = "deactivate")]
        activate: bool,

        #[arg(long)]
        deactivate: bool,

        /// New password; omitted keeps the current one
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum EventsCmd {
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: EventFilter,
    },

    Add {
        name: String,

        /// YYYY-MM-DD
        date: String,
    },

    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Make an event the active one
    Activate { id: i64 },

    /// Show the active event
    Active,
}

#[derive(Subcommand)]
pub enum SectionsCmd {
    List,

    Add {
        #[arg(long)]
        program: String,

        #[arg(long = "year")]
        year_level: String,

        #[arg(long)]
        name: String,
    },

    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Browse program → year → section → events
    Browse {
        /// Folder path, e.g. `BSCS 1st A`
        path: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum AdminCmd {
    /// Show or update the global settings
    Settings {
        #[arg(long)]
        academic_year: Option<String>,

        #[arg(long)]
        semester: Option<String>,

        #[arg(long)]
        org_name: Option<String>,

        #[arg(long)]
        absence_fine: Option<String>,
    },

    /// Download a full backup of the server database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every attendance record
    Flush {
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Server audit log
    Logs,

    /// Active sessions
    Sessions,

    /// Revoke the session of a user
    Revoke {
        username: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}
