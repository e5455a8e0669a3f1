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

use crate::renderer::api::IndirectDrawPalette;
use std::fmt;

/// Trait representing a rendering backend for palettized surfaces.
///
/// This is the minimal polymorphic contract a backend must satisfy so that
/// callers can drive it through `Box<dyn Renderer>` (or `&mut dyn Renderer`)
/// without knowing the concrete type. The trait is object-safe, and dropping
/// a boxed backend runs the concrete type's full teardown.
///
/// Both operations are synchronous and borrow their argument for the
/// duration of the call only: a backend must copy out anything it needs
/// before returning, because the caller is free to mutate or free the buffer
/// immediately afterwards. Neither operation returns a value or an error —
/// a backend's failure policy (logging, dropping a frame) is internal and
/// not observable through this interface.
///
/// No ordering is required between [`render`](Renderer::render) and
/// [`update_palette`](Renderer::update_palette); a backend that needs a
/// palette before its first frame must cope with not having one (e.g. by
/// starting from an all-black table). The trait makes no threading claims:
/// backends that are `Send` advertise it themselves.
pub trait Renderer: fmt::Debug {
    /// Consumes one frame's worth of surface data.
    ///
    /// `surface_data` is an ordered sequence of bytes whose format, stride,
    /// and dimensions are a contract between the caller and the concrete
    /// backend; this trait imposes no size constraint, and an empty slice is
    /// valid input.
    fn render(&mut self, surface_data: &[u8]);

    /// Consumes a new indirect-draw color table.
    ///
    /// The palette is caller-owned; a backend copies out the entries it
    /// needs during the call. Whether the update affects an already-rendered
    /// frame is backend-defined (the bundled backends apply it to subsequent
    /// frames only).
    fn update_palette(&mut self, palette: &IndirectDrawPalette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::{PaletteEntry, PALETTE_ENTRIES};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Test backend that copies everything it is handed and flags its own
    /// teardown, so the borrowing and destruction contracts can be observed.
    #[derive(Debug)]
    struct RecordingRenderer {
        frames: Vec<Vec<u8>>,
        palette_snapshots: Vec<Vec<PaletteEntry>>,
        dropped: Arc<AtomicBool>,
    }

    impl RecordingRenderer {
        fn new(dropped: Arc<AtomicBool>) -> Self {
            Self {
                frames: Vec::new(),
                palette_snapshots: Vec::new(),
                dropped,
            }
        }
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, surface_data: &[u8]) {
            self.frames.push(surface_data.to_vec());
        }

        fn update_palette(&mut self, palette: &IndirectDrawPalette) {
            self.palette_snapshots.push(palette.entries().to_vec());
        }
    }

    impl Drop for RecordingRenderer {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let dropped = Arc::new(AtomicBool::new(false));
        let mut renderer: Box<dyn Renderer> = Box::new(RecordingRenderer::new(dropped));
        renderer.render(&[1, 2, 3]);
    }

    #[test]
    fn dropping_through_box_runs_concrete_teardown() {
        let dropped = Arc::new(AtomicBool::new(false));
        let renderer: Box<dyn Renderer> = Box::new(RecordingRenderer::new(dropped.clone()));
        assert!(!dropped.load(Ordering::SeqCst));
        drop(renderer);
        assert!(dropped.load(Ordering::SeqCst));
    }

    #[test]
    fn render_does_not_retain_the_surface_buffer() {
        let dropped = Arc::new(AtomicBool::new(false));
        let mut renderer = RecordingRenderer::new(dropped);

        let mut buffer = vec![7u8; 16];
        renderer.render(&buffer);

        // The caller may mutate and free the buffer immediately after the
        // call returns; the backend's copy must be unaffected.
        buffer.iter_mut().for_each(|b| *b = 0);
        drop(buffer);

        assert_eq!(renderer.frames, vec![vec![7u8; 16]]);
    }

    #[test]
    fn update_palette_does_not_retain_the_palette() {
        let dropped = Arc::new(AtomicBool::new(false));
        let mut renderer = RecordingRenderer::new(dropped);

        let mut palette = IndirectDrawPalette::new();
        palette.set_entry(0, PaletteEntry::rgb(1, 2, 3));
        renderer.update_palette(&palette);

        palette.set_entry(0, PaletteEntry::rgb(0, 0, 0));
        drop(palette);

        assert_eq!(renderer.palette_snapshots.len(), 1);
        assert_eq!(
            renderer.palette_snapshots[0][0],
            PaletteEntry::rgb(1, 2, 3)
        );
        assert_eq!(renderer.palette_snapshots[0].len(), PALETTE_ENTRIES);
    }

    #[test]
    fn empty_surface_data_is_valid_input() {
        let dropped = Arc::new(AtomicBool::new(false));
        let mut renderer: Box<dyn Renderer> = Box::new(RecordingRenderer::new(dropped));
        renderer.render(&[]);
    }

    #[test]
    fn operations_may_interleave_arbitrarily() {
        let dropped = Arc::new(AtomicBool::new(false));
        let mut renderer = RecordingRenderer::new(dropped);
        let palette = IndirectDrawPalette::new();

        renderer.update_palette(&palette);
        renderer.update_palette(&palette);
        renderer.render(&[0]);
        renderer.update_palette(&palette);
        renderer.render(&[1]);
        renderer.render(&[2]);

        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(renderer.palette_snapshots.len(), 3);
    }
}
