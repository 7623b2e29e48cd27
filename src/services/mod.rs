// Service module exports

pub mod availability;
pub mod export;
pub mod geometry;
pub mod persistence;
pub mod rounding;
pub mod selection;
pub mod settings;
pub mod store;
