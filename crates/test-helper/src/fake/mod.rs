mod directory;
mod display;
mod host;

pub use directory::FakeDirectory;
pub use display::{FakeDisplay, Mode};
pub use host::{FakeHost, FakeModule};
