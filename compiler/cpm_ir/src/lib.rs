//! C+- IR - data types shared by the front-end phases.
//!
//! This crate contains the plain data carriers of the pipeline:
//! - [`Span`] for byte ranges into the source buffer
//! - [`Token`] and [`TokenKind`] for scanner output
//! - [`Expression`] for the segmenter's statement-sized token groups
//!
//! Nothing here performs I/O or scanning. Spans never own source bytes;
//! the only owned payload is the extracted content of string literals.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr;
mod span;
mod token;

pub use expr::Expression;
pub use span::Span;
pub use token::{Token, TokenFamily, TokenKind};
