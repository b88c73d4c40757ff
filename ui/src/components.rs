pub mod app;
pub mod migration_modal;
