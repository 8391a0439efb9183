pub mod bet;
pub mod round;
pub mod session;
pub mod targets;
pub mod verify;

pub use bet::{handle_bet_command, BetCommands};
pub use round::{handle_round_command, RoundCommands};
pub use session::{handle_session_command, SessionCommands};
pub use targets::handle_targets_command;
pub use verify::handle_verify_command;
