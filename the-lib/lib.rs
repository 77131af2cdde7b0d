use smartstring::{LazyCompact, SmartString};

pub mod brackets;
pub mod case_convention;
pub mod classify;
pub mod clipboard;
pub mod column;
pub mod command;
pub mod commands;
pub mod comment;
pub mod edit;
pub mod history;
pub mod movement;
pub mod position;
pub mod region;
pub mod search;
pub mod settings;
pub mod transform;
pub mod view;

pub type Tendril = SmartString<LazyCompact>;
