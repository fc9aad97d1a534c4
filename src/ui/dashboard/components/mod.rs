//! Dashboard panel components

pub mod footer;
pub mod info_panel;
pub mod tables;
