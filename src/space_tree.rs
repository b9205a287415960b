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
//! Online guillotine packing of rectangles into a bin.
//!
//! The bin is covered by a binary tree. A leaf is a free region; once a rectangle is
//! placed in a leaf, the leaf shrinks to the placed rectangle and gets two children
//! covering what is left of its old region. Placement is first fit: the first leaf,
//! in depth first left to right order, that is large enough takes the rectangle.
//!
//! Memory usage is linear in the number of rectangles already packed.

use std::cmp::max;

use rs_math3d::Recti;

use crate::error::{NoSpaceError, SizeError};
use crate::rect::RectTrait;

#[derive(Clone)]
struct Node {
    // free space for a leaf, occupied space for an interior node
    rect: Recti,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    fn leaf(rect: Recti) -> Self {
        Self { rect, children: None }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    fn insert(&mut self, width: i32, height: i32) -> Option<Recti> {
        if let Some(children) = self.children.as_mut() {
            return children.0.insert(width, height).or_else(|| children.1.insert(width, height));
        }

        if width > self.rect.width || height > self.rect.height {
            return None;
        }

        self.split(width, height);
        Some(self.rect)
    }

    // Turns a leaf into an interior node holding a `width` x `height` rectangle in its
    // top left corner. The cut goes along the shorter leftover so the larger leftover
    // strip stays in one piece.
    fn split(&mut self, width: i32, height: i32) {
        let free = self.rect;
        let rest_w = free.width - width;
        let rest_h = free.height - height;

        let children = if rest_w < rest_h {
            (
                Node::leaf(Recti::new(free.x + width, free.y, rest_w, height)),
                Node::leaf(Recti::new(free.x, free.y + height, free.width, rest_h)),
            )
        } else {
            (
                Node::leaf(Recti::new(free.x, free.y + height, width, rest_h)),
                Node::leaf(Recti::new(free.x + width, free.y, rest_w, free.height)),
            )
        };

        // Either child may have zero area. It is kept all the same: an interior node
        // always has two children.
        self.children = Some(Box::new(children));
        self.rect = Recti::new(free.x, free.y, width, height);
    }

    fn fits(&self, width: i32, height: i32) -> bool {
        match &self.children {
            Some(children) => children.0.fits(width, height) || children.1.fits(width, height),
            None => width <= self.rect.width && height <= self.rect.height,
        }
    }

    fn used_area(&self) -> i64 {
        match &self.children {
            Some(children) => self.rect.pixel_count() + children.0.used_area() + children.1.used_area(),
            None => 0,
        }
    }

    fn visit<F: FnMut(&Node)>(&self, f: &mut F) {
        f(self);
        if let Some(children) = &self.children {
            children.0.visit(f);
            children.1.visit(f);
        }
    }
}

/// Free/used space tree of a single bin.
///
/// Rectangles are never rotated and never moved once placed. There is no way to free
/// a placed rectangle.
#[derive(Clone)]
pub struct SpaceTree {
    root: Node,
    width: i32,
    height: i32,
}

impl SpaceTree {
    /// Create an empty bin of the given size. Negative dimensions are clamped to zero;
    /// a bin without area accepts no rectangle.
    pub fn new(width: i32, height: i32) -> SpaceTree {
        let width = max(0, width);
        let height = max(0, height);

        SpaceTree { root: Node::leaf(Recti::new(0, 0, width, height)), width, height }
    }

    /// Get the current size of the bin.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Place a `width` x `height` rectangle and return where it went.
    ///
    /// Requests with a non positive dimension, or that no free region can hold, return
    /// [`NoSpaceError`] and leave the tree as it was. A failed request does not mean the
    /// bin is full: smaller rectangles may still fit.
    pub fn insert(&mut self, width: i32, height: i32) -> Result<Recti, NoSpaceError> {
        if width <= 0 || height <= 0 {
            log::trace!("rejecting degenerate request {}x{}", width, height);
            return Err(NoSpaceError { width, height });
        }

        match self.root.insert(width, height) {
            Some(rect) => {
                log::trace!("placed {}x{} at ({}, {})", width, height, rect.x, rect.y);
                Ok(rect)
            }
            None => {
                log::trace!("no space for {}x{} in {}x{} bin", width, height, self.width, self.height);
                Err(NoSpaceError { width, height })
            }
        }
    }

    /// Check if a rectangle of the specified size can be inserted, without inserting it.
    pub fn can_insert(&self, width: i32, height: i32) -> bool {
        width > 0 && height > 0 && self.root.fits(width, height)
    }

    /// Grow the bin to `new_width` x `new_height`.
    ///
    /// The whole current bin, free parts included, becomes occupied space: only the new
    /// strip below it and the new strip to its right take further rectangles. Asking for
    /// a smaller dimension returns [`SizeError`] and changes nothing.
    pub fn enlarge(&mut self, new_width: i32, new_height: i32) -> Result<(), SizeError> {
        if new_width < self.width || new_height < self.height {
            log::debug!("refusing to shrink {}x{} bin to {}x{}", self.width, self.height, new_width, new_height);
            return Err(SizeError { width: self.width, height: self.height, new_width, new_height });
        }

        let bottom = Node::leaf(Recti::new(0, self.height, new_width, new_height - self.height));
        let right = Node::leaf(Recti::new(self.width, 0, new_width - self.width, self.height));
        if log::log_enabled!(log::Level::Debug) {
            let lost = self.free_rects().iter().map(|r| r.pixel_count()).sum::<i64>();
            log::debug!("enlarging {}x{} bin to {}x{}, {} free cells given up", self.width, self.height, new_width, new_height, lost);
        }

        // the old bin as a whole is the occupied part of the new root
        self.root = Node { rect: Recti::new(0, 0, self.width, self.height), children: Some(Box::new((bottom, right))) };

        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    /// Total area of the occupied regions. Walks the whole tree.
    pub fn used_area(&self) -> i64 {
        self.root.used_area()
    }

    /// Fraction of the bin area that is occupied, in `[0, 1]`. Walks the whole tree.
    /// A bin without area reports `0.0`.
    pub fn occupancy(&self) -> f64 {
        let bin_area = self.width as i64 * self.height as i64;
        if bin_area == 0 {
            return 0.0;
        }
        self.used_area() as f64 / bin_area as f64
    }

    /// Occupied regions in depth first order.
    ///
    /// After [`SpaceTree::enlarge`] the previous bin shows up as a single occupied region
    /// and the rectangles placed before are no longer listed.
    pub fn used_rects(&self) -> Vec<Recti> {
        let mut rects = Vec::new();
        self.root.visit(&mut |node: &Node| {
            if !node.is_leaf() {
                rects.push(node.rect);
            }
        });
        rects
    }

    /// Free regions in depth first order, zero area ones included.
    pub fn free_rects(&self) -> Vec<Recti> {
        let mut rects = Vec::new();
        self.root.visit(&mut |node: &Node| {
            if node.is_leaf() {
                rects.push(node.rect);
            }
        });
        rects
    }
}
