// Service module exports

pub mod calendar;
pub mod portal;
pub mod settings;
