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

//! Edge and containment helpers for the integer rectangles handed out by the packer.

use rs_math3d::Recti;

/// Edge accessors and the predicates built on them.
///
/// `right` and `bottom` are exclusive: a rectangle covers the half open ranges
/// `[left, right)` and `[top, bottom)`, so two rectangles that only share an edge
/// do not overlap.
pub trait RectTrait {
    /// Smallest `y` covered by the rectangle.
    fn top(&self) -> i32;
    /// One past the largest `y` covered by the rectangle.
    fn bottom(&self) -> i32;
    /// Smallest `x` covered by the rectangle.
    fn left(&self) -> i32;
    /// One past the largest `x` covered by the rectangle.
    fn right(&self) -> i32;

    /// Number of unit cells covered. Computed in `i64` so full size bins cannot overflow.
    fn pixel_count(&self) -> i64 {
        (self.bottom() - self.top()) as i64 * (self.right() - self.left()) as i64
    }

    /// `true` when the rectangle covers no cell at all.
    fn is_degenerate(&self) -> bool {
        self.right() <= self.left() || self.bottom() <= self.top()
    }

    /// Check if the two rectangles share at least one cell.
    fn overlaps(&self, other: &Self) -> bool {
        !self.is_degenerate()
            && !other.is_degenerate()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Check if `other` rectangle is completely inside `self`.
    fn contains_rect(&self, other: &Self) -> bool {
        self.left() <= other.left() && self.right() >= other.right() && self.top() <= other.top() && self.bottom() >= other.bottom()
    }

    /// Check if given cell is inside this rectangle.
    fn contains_point(&self, x: i32, y: i32) -> bool {
        self.left() <= x && x < self.right() && self.top() <= y && y < self.bottom()
    }
}

impl RectTrait for Recti {
    #[inline(always)]
    fn top(&self) -> i32 {
        self.y
    }

    #[inline(always)]
    fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline(always)]
    fn left(&self) -> i32 {
        self.x
    }

    #[inline(always)]
    fn right(&self) -> i32 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_origin_and_size() {
        let r = Recti::new(2, 3, 4, 5);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (2, 3, 6, 8));
        assert_eq!(r.pixel_count(), 20);
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = Recti::new(0, 0, 4, 4);
        let b = Recti::new(4, 0, 4, 4);
        let c = Recti::new(0, 4, 4, 4);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.overlaps(&Recti::new(3, 3, 2, 2)));
        assert!(Recti::new(3, 3, 2, 2).overlaps(&a));
    }

    #[test]
    fn degenerate_rects_never_overlap() {
        let a = Recti::new(0, 0, 4, 4);
        let flat = Recti::new(1, 1, 2, 0);
        assert!(flat.is_degenerate());
        assert!(!a.overlaps(&flat));
        assert_eq!(flat.pixel_count(), 0);
        assert!(a.contains_rect(&flat));
    }

    #[test]
    fn containment() {
        let bin = Recti::new(0, 0, 10, 10);
        assert!(bin.contains_rect(&Recti::new(0, 0, 10, 10)));
        assert!(bin.contains_rect(&Recti::new(9, 9, 1, 1)));
        assert!(!bin.contains_rect(&Recti::new(9, 9, 2, 1)));
        assert!(bin.contains_point(9, 0));
        assert!(!bin.contains_point(10, 0));
    }
}
