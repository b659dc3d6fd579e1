pub mod whitespace;
pub mod zero_width;

pub use whitespace::TextWhitespace;
pub use zero_width::TextZeroWidth;
