pub mod backup;
pub mod confirm;
pub mod events;
pub mod export_guard;
pub mod folders;
pub mod kiosk;
pub mod list;
pub mod log;
pub mod monitoring;
pub mod roster;
pub mod router;
pub mod session_guard;
pub mod sheet;
