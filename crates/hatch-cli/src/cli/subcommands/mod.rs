pub mod audit;
pub mod data;
pub mod history;
pub mod reference;
pub mod settings;

pub use audit::AuditCommands;
pub use data::DataCommands;
pub use history::HistoryCommands;
pub use reference::{AuditorCommands, LocationCommands};
pub use settings::SettingsCommands;
