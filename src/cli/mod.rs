pub mod compare;
pub mod countries;
pub mod setup;
pub mod ui;
