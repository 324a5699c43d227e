// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::collapsible_else_if,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod block;
mod color;
mod error;
mod goal;
mod grid;
mod pos;
mod quad;
mod rng;
mod ops {
    mod draw;
    mod flatten;
    mod generate;
    mod geometry;
    mod locate;
    mod reflect;
    mod rotate;
    mod smash;
    mod test_format;

    pub use draw::*;
    pub use reflect::*;
    pub use rotate::*;
    pub use test_format::*;
}

pub use block::*;
pub use color::*;
pub use error::*;
pub use goal::*;
pub use grid::*;
pub use ops::*;
pub use pos::*;
pub use quad::*;
pub use rng::*;
