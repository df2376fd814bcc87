#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c`, starting
//! from zero, never runs off to infinity.  Points outside the set do
//! run off, some quickly and some slowly, and that "velocity" is what
//! gets drawn: each pixel's brightness depends on how many steps its
//! point takes to leave the circle of radius two.
//!
//! A render is driven by a `RenderConfig`, normally loaded from an XML
//! file checked against an XSD schema (see `config::load`).  The image
//! is split into bands of rows, each filled by its own thread (see
//! `render::render`), and the finished `PixelBuffer` is written out by
//! `output::write_image`.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;
extern crate roxmltree;

pub mod config;
pub mod errors;
pub mod escape;
pub mod output;
pub mod partition;
pub mod pixels;
pub mod planes;
pub mod render;
pub mod schema;

pub use config::{load, RenderConfig, Viewport};
pub use errors::{ConfigError, OutputError, RenderError};
pub use pixels::PixelBuffer;
pub use render::render;
