pub mod config;
pub mod delete;
pub mod edit;
pub mod events;
pub mod names;
pub mod purge;
pub mod schedule;
