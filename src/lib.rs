pub mod color;
pub mod outcome;
pub mod result;

mod options;
pub use options::*;

mod reporter;
pub use reporter::*;

mod session;
pub use session::*;
