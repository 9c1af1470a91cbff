//! Text input infrastructure adapters

mod stdin;

pub use stdin::StdinLineInput;
