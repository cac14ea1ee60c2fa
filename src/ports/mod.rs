//! Port traits: the boundaries between the valuation core and the outside.

pub mod config_port;
pub mod program_port;
pub mod render_port;
