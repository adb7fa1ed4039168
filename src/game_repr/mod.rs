mod action;
mod error;
mod side;
mod state;
mod structure;

#[cfg(test)]
mod tests;

pub use action::*;
pub use error::*;
pub use side::*;
pub use state::*;
pub use structure::*;
