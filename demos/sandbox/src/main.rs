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

// Ochre Sandbox
// Drives a backend through the abstract Renderer capability: one render
// call per frame, palette updates when the colors change. Run with --null
// to swap in the headless backend without touching the driver loop.

use anyhow::Result;
use log::info;
use ochre_core::renderer::{IndirectDrawPalette, PaletteEntry, Renderer, SurfaceDimensions};
use ochre_infra::{NullRenderer, SoftRenderer};

const DIMS: SurfaceDimensions = SurfaceDimensions::new(320, 200);
const FRAME_COUNT: u32 = 60;

/// A 256-entry gradient palette, shifted by `phase` so palette animation is
/// visible across updates.
fn gradient_palette(phase: u8) -> IndirectDrawPalette {
    let mut palette = IndirectDrawPalette::new();
    for index in 0..=255u8 {
        let v = index.wrapping_add(phase);
        palette.set_entry(index, PaletteEntry::rgb(v, v / 2, 255 - v));
    }
    palette
}

/// One frame of 8-bit indexed surface data: diagonal bands scrolling with
/// the frame number.
fn indexed_frame(tick: u32) -> Vec<u8> {
    let mut frame = Vec::with_capacity(DIMS.pixel_count());
    for y in 0..DIMS.height {
        for x in 0..DIMS.width {
            frame.push(((x + y + tick) & 0xFF) as u8);
        }
    }
    frame
}

/// The driver loop. Knows nothing about the concrete backend.
fn run(renderer: &mut dyn Renderer) {
    renderer.update_palette(&gradient_palette(0));
    for tick in 0..FRAME_COUNT {
        // Shift the palette every 16 frames, interleaved with rendering.
        if tick % 16 == 0 {
            renderer.update_palette(&gradient_palette(tick as u8));
        }
        let frame = indexed_frame(tick);
        renderer.render(&frame);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let headless = std::env::args().any(|arg| arg == "--null");
    info!(
        "Sandbox: rendering {} frames at {}x{} ({} backend).",
        FRAME_COUNT,
        DIMS.width,
        DIMS.height,
        if headless { "null" } else { "soft" }
    );

    if headless {
        let mut renderer = NullRenderer::new();
        run(&mut renderer);
        info!(
            "Sandbox: null backend consumed {} frames and {} palette updates.",
            renderer.frames_seen(),
            renderer.palette_updates()
        );
    } else {
        let mut renderer = SoftRenderer::new(DIMS);
        run(&mut renderer);
        let checksum: u64 = renderer
            .framebuffer_bytes()
            .iter()
            .map(|&b| u64::from(b))
            .sum();
        info!(
            "Sandbox: soft backend expanded {} frames (dropped {}), last-frame byte sum {}.",
            renderer.frames_rendered(),
            renderer.frames_dropped(),
            checksum
        );
    }

    Ok(())
}
