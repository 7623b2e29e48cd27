// Module exports for models

pub mod interval;
pub mod settings;
