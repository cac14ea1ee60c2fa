//! Concrete adapter implementations for ports.

pub mod chart_render;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod json_program_adapter;
