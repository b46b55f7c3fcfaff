//! Concrete collaborators: the OS and the terminal

pub mod listing;
pub mod probe;
pub mod selector;
pub mod unix;

pub use listing::JpsListing;
pub use probe::{PsutilCommandResolver, PsutilProbe};
pub use selector::DialoguerSelector;
pub use unix::SignalKiller;
