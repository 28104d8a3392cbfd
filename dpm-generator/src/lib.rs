mod batch;
pub use batch::*;
mod inspect;
pub use inspect::*;
