mod constants;
mod input;
mod machine;
mod oracle;
mod recording;
mod score;
mod snake;
mod state;

pub mod util;

pub use constants::*;
pub use input::*;
pub use machine::*;
pub use oracle::*;
pub use recording::*;
pub use score::*;
pub use snake::*;
pub use state::*;
pub use util::AdditiveCounter;
