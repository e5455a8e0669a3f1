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

//! Defines the error types for the rendering contracts.
//!
//! Note that the [`Renderer`](crate::renderer::Renderer) trait itself
//! deliberately has no error channel: its two operations return nothing, and
//! a backend's internal failure policy (logging, dropping a frame) is not
//! observable through the interface. The errors here cover the construction
//! of the values passed *into* the interface.

use crate::renderer::api::palette::{PALETTE_ENTRIES, PALETTE_RAW_LEN};
use std::fmt;

/// An error produced while constructing an
/// [`IndirectDrawPalette`](crate::renderer::IndirectDrawPalette).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// The entry slice did not contain exactly [`PALETTE_ENTRIES`] entries.
    WrongEntryCount {
        /// The number of entries that were provided.
        actual: usize,
    },
    /// The raw byte slice did not contain exactly [`PALETTE_RAW_LEN`] bytes.
    WrongByteLength {
        /// The number of bytes that were provided.
        actual: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongEntryCount { actual } => {
                write!(
                    f,
                    "Palette requires exactly {PALETTE_ENTRIES} entries, got {actual}"
                )
            }
            PaletteError::WrongByteLength { actual } => {
                write!(
                    f,
                    "Raw palette data requires exactly {PALETTE_RAW_LEN} bytes, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
