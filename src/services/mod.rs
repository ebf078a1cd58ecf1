// Service module exports

pub mod calendar;
pub mod dashboard;
pub mod recurrence;
