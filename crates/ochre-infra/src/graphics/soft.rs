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

//! The software rendering backend.

use ochre_core::renderer::api::PALETTE_ENTRIES;
use ochre_core::renderer::{IndirectDrawPalette, PaletteEntry, Renderer, SurfaceDimensions};
use std::fmt;

/// Packs a palette entry into a little-endian RGBA8 pixel. The alpha channel
/// is forced opaque; the entry's flags byte does not affect the pixel.
#[inline]
fn pack_rgba(entry: PaletteEntry) -> u32 {
    u32::from_le_bytes([entry.red, entry.green, entry.blue, 0xFF])
}

/// The concrete, CPU-based implementation of the [`Renderer`] trait.
///
/// `SoftRenderer` interprets surface data as 8-bit indexed pixels, row-major,
/// one byte per pixel, and expands them through the current palette into a
/// packed-RGBA framebuffer held in CPU memory. The surface size is fixed at
/// construction; frames of any other length are dropped (and logged), since
/// the [`Renderer`] contract exposes no error channel.
///
/// Until the first [`update_palette`](Renderer::update_palette) call the
/// backend uses an all-black palette, so rendering before a palette update is
/// well-defined. A palette update affects subsequent frames only; the current
/// framebuffer is never rewritten retroactively.
pub struct SoftRenderer {
    dimensions: SurfaceDimensions,
    lut: [u32; PALETTE_ENTRIES],
    framebuffer: Vec<u32>,
    frames_rendered: u64,
    frames_dropped: u64,
}

impl SoftRenderer {
    /// Creates a software backend for a fixed surface size.
    pub fn new(dimensions: SurfaceDimensions) -> Self {
        log::info!(
            "SoftRenderer: created for {}x{} surface.",
            dimensions.width,
            dimensions.height
        );
        let lut = [pack_rgba(PaletteEntry::default()); PALETTE_ENTRIES];
        Self {
            dimensions,
            lut,
            framebuffer: vec![pack_rgba(PaletteEntry::default()); dimensions.pixel_count()],
            frames_rendered: 0,
            frames_dropped: 0,
        }
    }

    /// The surface size this backend was configured with.
    #[inline]
    pub fn dimensions(&self) -> SurfaceDimensions {
        self.dimensions
    }

    /// The expanded frame as packed little-endian RGBA8 pixels, row-major.
    #[inline]
    pub fn framebuffer(&self) -> &[u32] {
        &self.framebuffer
    }

    /// The expanded frame as raw bytes (`red, green, blue, alpha` per pixel).
    #[inline]
    pub fn framebuffer_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.framebuffer)
    }

    /// The number of frames expanded so far.
    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// The number of frames dropped for having the wrong length.
    #[inline]
    pub fn frames_dropped(&self) -> u64 {
        self.frames_dropped
    }
}

impl Renderer for SoftRenderer {
    fn render(&mut self, surface_data: &[u8]) {
        if surface_data.is_empty() {
            log::trace!("SoftRenderer: empty surface, nothing to expand.");
            return;
        }

        let expected = self.dimensions.pixel_count();
        if surface_data.len() != expected {
            self.frames_dropped += 1;
            log::warn!(
                "SoftRenderer: dropped a {}-byte frame (surface is {}x{} = {} pixels).",
                surface_data.len(),
                self.dimensions.width,
                self.dimensions.height,
                expected
            );
            return;
        }

        for (pixel, &index) in self.framebuffer.iter_mut().zip(surface_data) {
            *pixel = self.lut[index as usize];
        }
        self.frames_rendered += 1;
    }

    fn update_palette(&mut self, palette: &IndirectDrawPalette) {
        for (slot, &entry) in self.lut.iter_mut().zip(palette.entries()) {
            *slot = pack_rgba(entry);
        }
        log::trace!("SoftRenderer: palette updated.");
    }
}

impl fmt::Debug for SoftRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftRenderer")
            .field("dimensions", &self.dimensions)
            .field("frames_rendered", &self.frames_rendered)
            .field("frames_dropped", &self.frames_dropped)
            .field("framebuffer", &format_args!("[u32; {}]", self.framebuffer.len()))
            .finish()
    }
}
