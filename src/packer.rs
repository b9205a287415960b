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
////////////////////////////////////////////////////////////////////////////////
//
// The MIT License (MIT)
//
// Copyright (c) 2014 Coeuvre Wong
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Padded front-end over [`SpaceTree`], for atlases where neighbouring tiles must not bleed
//! into each other when sampled.

use std::cmp::{max, min};

use rs_math3d::Recti;

use crate::error::{NoSpaceError, SizeError};
use crate::space_tree::SpaceTree;

/// Describes size and padding requirements of rectangle packing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// Width of the encompassing rectangle.
    pub width: i32,
    /// Height of the encompassing rectangle.
    pub height: i32,

    /// Minimum spacing between border and rectangles.
    pub border_padding: i32,
    /// Minimum spacing between rectangles.
    pub rectangle_padding: i32,
}

impl Config {
    // Every rectangle is packed with `rectangle_padding` added to its right and bottom.
    // The last row and column don't need that trailing gap, so it is given back here.
    fn tree_size(&self) -> (i32, i32) {
        (self.padded_extent(self.width), self.padded_extent(self.height))
    }

    fn padded_extent(&self, size: i32) -> i32 {
        let extent = size as i64 + self.rectangle_padding as i64 - 2 * self.border_padding as i64;
        min(max(0, extent), i32::MAX as i64) as i32
    }
}

/// `Packer` places rectangles inside a bin while honoring the padding of its [`Config`].
#[derive(Clone)]
pub struct Packer {
    config: Config,
    tree: SpaceTree,
}

impl Packer {
    /// Create new empty `Packer` with the provided parameters.
    pub fn new(config: Config) -> Packer {
        let (width, height) = config.tree_size();
        Packer { config, tree: SpaceTree::new(width, height) }
    }

    /// Get config that this packer was created with, or last enlarged to.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Pack new rectangle. Returns position of the newly added rectangle.
    /// If there is not enough space you can still try to add smaller rectangles.
    pub fn pack(&mut self, width: i32, height: i32) -> Result<Recti, NoSpaceError> {
        if width <= 0 || height <= 0 {
            return Err(NoSpaceError { width, height });
        }

        let padding = self.config.rectangle_padding;
        let error = NoSpaceError { width, height };
        let (padded_width, padded_height) = match (width.checked_add(padding), height.checked_add(padding)) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(error),
        };
        let mut rect = self.tree.insert(padded_width, padded_height).map_err(|_| error)?;

        rect.width -= padding;
        rect.height -= padding;
        rect.x += self.config.border_padding;
        rect.y += self.config.border_padding;

        Ok(rect)
    }

    /// Check if rectangle with the specified size can be added.
    pub fn can_pack(&self, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            return false;
        }

        let padding = self.config.rectangle_padding;
        match (width.checked_add(padding), height.checked_add(padding)) {
            (Some(w), Some(h)) => self.tree.can_insert(w, h),
            _ => false,
        }
    }

    /// Grow the encompassing rectangle. Like [`SpaceTree::enlarge`], the free space left
    /// inside the current bounds is given up.
    pub fn enlarge(&mut self, width: i32, height: i32) -> Result<(), SizeError> {
        let error = SizeError { width: self.config.width, height: self.config.height, new_width: width, new_height: height };
        if width < self.config.width || height < self.config.height {
            return Err(error);
        }

        let config = Config { width, height, ..self.config };
        let (tree_width, tree_height) = config.tree_size();
        self.tree.enlarge(tree_width, tree_height).map_err(|_| error)?;
        self.config = config;
        Ok(())
    }

    /// Fraction of the packable area in use. Padding counts as used.
    pub fn occupancy(&self) -> f64 {
        self.tree.occupancy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::RectTrait;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn config(width: i32, height: i32, border_padding: i32, rectangle_padding: i32) -> Config {
        Config { width, height, border_padding, rectangle_padding }
    }

    fn grow(r: &Recti, by: i32) -> Recti {
        Recti::new(r.x, r.y, r.width + by, r.height + by)
    }

    #[test]
    fn no_padding_matches_tree() {
        let mut packer = Packer::new(config(4, 4, 0, 0));
        let mut tree = SpaceTree::new(4, 4);
        for (w, h) in [(3, 3), (1, 1), (1, 4), (2, 2)] {
            let a = packer.pack(w, h).map(|r| (r.x, r.y, r.width, r.height));
            let b = tree.insert(w, h).map(|r| (r.x, r.y, r.width, r.height));
            assert_eq!(a, b);
        }
        assert_eq!(packer.occupancy(), tree.occupancy());
    }

    #[test]
    fn border_offsets_placement() {
        let mut packer = Packer::new(config(20, 20, 2, 1));
        // inner bin is 20 + 1 - 4 = 17: a 16 wide rect plus padding still fits
        assert!(packer.can_pack(16, 1));
        assert!(!packer.can_pack(17, 1));

        let r = packer.pack(5, 5).unwrap();
        assert_eq!((r.x, r.y, r.width, r.height), (2, 2, 5, 5));
    }

    #[test]
    fn full_width_rect_needs_no_trailing_padding() {
        let mut packer = Packer::new(config(10, 10, 1, 3));
        let r = packer.pack(8, 8).unwrap();
        assert_eq!((r.x, r.y, r.width, r.height), (1, 1, 8, 8));
        assert!(packer.pack(1, 1).is_err());
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let mut packer = Packer::new(config(10, 10, 0, 2));
        assert_eq!(packer.pack(0, 4).unwrap_err(), NoSpaceError { width: 0, height: 4 });
        assert!(!packer.can_pack(4, -1));
    }

    #[test]
    fn error_reports_unpadded_request() {
        let mut packer = Packer::new(config(10, 10, 1, 2));
        assert_eq!(packer.pack(9, 9).unwrap_err(), NoSpaceError { width: 9, height: 9 });
    }

    #[test]
    fn huge_requests_fail_without_overflow() {
        let mut packer = Packer::new(config(10, 10, 0, 1));
        assert_eq!(packer.pack(i32::MAX, 1).unwrap_err(), NoSpaceError { width: i32::MAX, height: 1 });
        assert_eq!(packer.pack(1, i32::MAX).unwrap_err(), NoSpaceError { width: 1, height: i32::MAX });
        assert!(!packer.can_pack(i32::MAX, 1));
        assert!(!packer.can_pack(1, i32::MAX));

        // the packer is still usable afterwards
        let r = packer.pack(3, 3).unwrap();
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 3, 3));
    }

    #[test]
    fn huge_bins_clamp_inner_size() {
        let cfg = config(i32::MAX, i32::MAX, 0, 8);
        assert_eq!(cfg.tree_size(), (i32::MAX, i32::MAX));
        assert_eq!(config(4, 4, i32::MAX, 0).tree_size(), (0, 0));

        let mut packer = Packer::new(cfg);
        let r = packer.pack(16, 16).unwrap();
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 16, 16));
        assert!(packer.enlarge(i32::MAX, i32::MAX).is_ok());
    }

    #[test]
    fn padding_is_kept_between_rects() {
        let (border, padding) = (3, 2);
        let cfg = config(100, 80, border, padding);
        let inner = Recti::new(border, border, cfg.width - 2 * border, cfg.height - 2 * border);
        let mut rng = StdRng::seed_from_u64(11);
        let mut packer = Packer::new(cfg);
        let mut placed: Vec<Recti> = Vec::new();

        for _ in 0..400 {
            let (w, h) = (rng.random_range(1..=15), rng.random_range(1..=15));
            if let Ok(r) = packer.pack(w, h) {
                assert_eq!((r.width, r.height), (w, h));
                assert!(inner.contains_rect(&r));
                for p in &placed {
                    assert!(!grow(p, padding).overlaps(&r) && !grow(&r, padding).overlaps(p));
                }
                placed.push(r);
            }
        }
        assert!(!placed.is_empty());
    }

    #[test]
    fn enlarge_updates_config() {
        let mut packer = Packer::new(config(10, 10, 1, 1));
        packer.pack(8, 8).unwrap();
        assert!(packer.pack(4, 4).is_err());

        assert!(packer.enlarge(9, 20).is_err());
        assert_eq!(packer.config().width, 10);

        packer.enlarge(20, 20).unwrap();
        assert_eq!(packer.config(), config(20, 20, 1, 1));

        let r = packer.pack(4, 4).unwrap();
        let old = Recti::new(0, 0, 10, 10);
        assert!(!old.overlaps(&r));
        assert!(Recti::new(1, 1, 18, 18).contains_rect(&r));
    }
}
