//! Library entry for arta-forms exposing core logic for integration tests.

pub mod args;
pub mod forms;
pub mod i18n;
pub mod paths;
