pub mod audit;
pub mod data;
pub mod dispatch;
pub mod history;
pub mod reference;
pub mod schema;
pub mod settings;
pub mod shared;
pub mod stats;
