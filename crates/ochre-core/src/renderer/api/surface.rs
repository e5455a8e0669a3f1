// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the surface-size type used to configure fixed-size backends.
//!
//! The [`Renderer`](crate::renderer::Renderer) capability itself is
//! dimension-agnostic: surface format, stride, and size are a contract
//! between the caller and a concrete backend. Backends that operate on a
//! fixed surface (like a software expander) take a [`SurfaceDimensions`] at
//! construction time.

/// A two-dimensional surface extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceDimensions {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl SurfaceDimensions {
    /// Creates a new extent from width and height.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The total number of pixels covered by this extent.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_count_is_width_times_height() {
        assert_eq!(SurfaceDimensions::new(640, 480).pixel_count(), 307_200);
    }

    #[test]
    fn default_extent_is_empty() {
        assert_eq!(SurfaceDimensions::default().pixel_count(), 0);
    }

    #[test]
    fn pixel_count_does_not_overflow_u32_math() {
        // 65_536 * 65_536 overflows u32 but not usize on 64-bit targets.
        let dims = SurfaceDimensions::new(65_536, 65_536);
        assert_eq!(dims.pixel_count(), 4_294_967_296);
    }
}
