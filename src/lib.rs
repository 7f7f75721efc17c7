// lib.rs - Library root for the postlette editor

pub mod buffer;
pub mod cli;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod emoji;
pub mod keymap;
pub mod lists;
pub mod mode;
pub mod selection;
pub mod style;
pub mod ui;
pub mod viewport;
