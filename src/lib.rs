//! askterm: terminal console for a document question-answering service

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod logging;
pub mod notification;
pub mod scroll;
pub mod service;
pub mod session;
pub mod widgets;
pub mod worker;
