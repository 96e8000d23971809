//! Core types shared across the vitrine crates.

mod kind;
mod page;
mod rng;
mod speed;
mod theme;

pub use kind::{RevealKind, Shape};
pub use page::Page;
pub use rng::SeedRng;
pub use speed::AnimationSpeed;
pub use theme::ColorTheme;
