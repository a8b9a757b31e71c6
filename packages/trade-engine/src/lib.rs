mod error;
mod intent;
mod projection;
mod submission;
mod trade_computer;
mod validate;

pub use self::{error::*, intent::*, trade_computer::*};

#[cfg(feature = "javascript")]
mod javascript;
#[cfg(feature = "javascript")]
pub use self::javascript::*;
