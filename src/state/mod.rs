//! Order state module

mod clock;
mod forms;
mod order;

pub use clock::*;
pub use forms::*;
pub use order::*;
