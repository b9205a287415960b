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
//! Errors reported by the packer. Both leave the packer untouched.

use std::fmt;

/// No free region of the bin can hold the requested rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSpaceError {
    /// Requested width.
    pub width: i32,
    /// Requested height.
    pub height: i32,
}

impl fmt::Display for NoSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert: no more space in bin for {}x{}", self.width, self.height)
    }
}

impl std::error::Error for NoSpaceError {}

/// The bin cannot shrink: one of the requested dimensions is below the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeError {
    /// Current bin width.
    pub width: i32,
    /// Current bin height.
    pub height: i32,
    /// Requested bin width.
    pub new_width: i32,
    /// Requested bin height.
    pub new_height: i32,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enlarge: new size {}x{} is smaller than {}x{}",
            self.new_width, self.new_height, self.width, self.height
        )
    }
}

impl std::error::Error for SizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_sizes() {
        let e = NoSpaceError { width: 3, height: 7 };
        assert_eq!(e.to_string(), "insert: no more space in bin for 3x7");

        let e = SizeError { width: 10, height: 10, new_width: 8, new_height: 12 };
        assert_eq!(e.to_string(), "enlarge: new size 8x12 is smaller than 10x10");
    }

    #[test]
    fn errors_box_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(NoSpaceError { width: 1, height: 1 });
        assert!(boxed.source().is_none());
    }
}
