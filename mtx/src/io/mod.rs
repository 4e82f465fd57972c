//! Stream plumbing shared by the reader and writer

pub mod counter;
pub mod lines;

pub use counter::ByteCounter;
pub use lines::LineReader;
