//! Subcommand handlers.
//!
//! Every handler takes its output streams (and stdin, where interactive)
//! as parameters, so commands are drivable from tests with byte buffers.

mod cfg;
mod play;
mod stats;
mod verify;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use stats::handle_stats_command;
pub use verify::handle_verify_command;
