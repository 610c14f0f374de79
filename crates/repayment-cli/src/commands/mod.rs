pub mod calculate;
pub mod format;
