//! Decorative animation effects for the vitrine terminal site.
//!
//! This crate provides the visual effects layered under and over the
//! page content: the scroll-triggered reveal state machine, the
//! particle-field background with its parallax grid, the glitch burst
//! effect and the typewriter logo. Everything is driven by an
//! elapsed-milliseconds clock supplied by the caller and a seedable
//! random source, so none of it touches wall time or an ambient
//! generator directly.

mod chars;
mod color;
mod field;
mod glitch;
mod reveal;
mod typewriter;

pub use color::hsl_to_rgb;
pub use field::{FieldConfig, Particle, ParticleField};
pub use glitch::{Glitch, GlitchKind};
pub use reveal::{Reveal, RevealConfig};
pub use typewriter::Typewriter;
