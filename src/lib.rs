//
// Copyright 2023-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
//! Discrete online rectangle packing into a rectangular bin.
//!
//! Rectangles arrive one at a time, with no knowledge of the ones that follow, and are
//! placed at integer coordinates without rotation. A placed rectangle never moves. Free
//! and used space is tracked by a guillotine tree: every placement cuts the free region
//! it lands in into the placed rectangle and two leftover regions.
//!
//! Usage example:
//!
//! ```
//! use bin_packer::SpaceTree;
//!
//! let mut tree = SpaceTree::new(4, 4);
//! let rect = tree.insert(3, 3).unwrap();
//! assert_eq!((rect.x, rect.y, rect.width, rect.height), (0, 0, 3, 3));
//!
//! // nothing 4 wide is left
//! assert!(tree.insert(4, 1).is_err());
//!
//! // growing the bin opens a strip below and one to the right of the old bounds
//! tree.enlarge(8, 8).unwrap();
//! let rect = tree.insert(8, 4).unwrap();
//! assert_eq!((rect.x, rect.y), (0, 4));
//! ```
//!
//! [`Packer`] adds border and inter-rectangle padding on top of [`SpaceTree`]:
//!
//! ```
//! use bin_packer::{Config, Packer};
//!
//! let config = Config {
//!     width: 1024,
//!     height: 1024,
//!
//!     border_padding: 5,
//!     rectangle_padding: 10,
//! };
//!
//! let rectangles = [(50, 70), (350, 210), (255, 410)];
//!
//! let mut packer = Packer::new(config);
//! for &(width, height) in &rectangles {
//!     if let Ok(rect) = packer.pack(width, height) {
//!         println!("Rectangle is at position ({}, {}) within encompassing rectangle", rect.x, rect.y);
//!     }
//! }
//! ```

#![deny(missing_docs)]

mod error;
mod packer;
mod rect;
mod space_tree;

pub use error::*;
pub use packer::*;
pub use rect::*;
pub use rs_math3d::{Rect, Recti};
pub use space_tree::*;
