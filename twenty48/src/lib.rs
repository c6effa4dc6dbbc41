pub use board::*;
pub use score::*;
pub use spawn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod score;
mod spawn;
mod visualization;
