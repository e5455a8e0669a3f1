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

//! The headless rendering backend.

use ochre_core::renderer::{IndirectDrawPalette, Renderer};

/// No-op backend for headless use and tests.
///
/// It discards frame contents but records counters, so callers (and tests)
/// can observe that the interface was driven as expected without any output
/// surface existing.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames_seen: u64,
    palette_updates: u64,
    last_frame_len: Option<usize>,
}

impl NullRenderer {
    /// Creates a new headless backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of frames consumed so far.
    #[inline]
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// The number of palette updates consumed so far.
    #[inline]
    pub fn palette_updates(&self) -> u64 {
        self.palette_updates
    }

    /// The byte length of the most recent frame, if any.
    #[inline]
    pub fn last_frame_len(&self) -> Option<usize> {
        self.last_frame_len
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, surface_data: &[u8]) {
        self.frames_seen += 1;
        self.last_frame_len = Some(surface_data.len());
        log::trace!(
            "NullRenderer: consumed frame #{} ({} bytes).",
            self.frames_seen,
            surface_data.len()
        );
    }

    fn update_palette(&mut self, _palette: &IndirectDrawPalette) {
        self.palette_updates += 1;
        log::trace!(
            "NullRenderer: consumed palette update #{}.",
            self.palette_updates
        );
    }
}
