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

//! Defines the indirect-draw palette consumed by
//! [`Renderer::update_palette`](crate::renderer::Renderer::update_palette).
//!
//! The palette is a fixed table of 256 color entries used by backends that
//! expand 8-bit indexed surface data into displayable pixels. The
//! [`Renderer`](crate::renderer::Renderer) trait treats the palette as an
//! opaque value: it is passed by reference, a backend copies out whatever it
//! needs during the call, and the reference is never retained.

use crate::renderer::error::PaletteError;
use std::fmt;

/// The number of color entries in an [`IndirectDrawPalette`].
pub const PALETTE_ENTRIES: usize = 256;

/// The size in bytes of a tightly packed palette (`256 * 4`).
pub const PALETTE_RAW_LEN: usize = PALETTE_ENTRIES * std::mem::size_of::<PaletteEntry>();

/// A single color entry of an [`IndirectDrawPalette`].
///
/// Entries are four bytes — red, green, blue, and a backend-interpreted
/// flags byte. `#[repr(C)]` ensures a consistent memory layout, which is
/// important when reading palettes from tightly packed byte buffers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    bytemuck::Pod,
    bytemuck::Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(C)]
pub struct PaletteEntry {
    /// The red component.
    pub red: u8,
    /// The green component.
    pub green: u8,
    /// The blue component.
    pub blue: u8,
    /// Backend-interpreted flags. Zero for plain color entries.
    pub flags: u8,
}

impl PaletteEntry {
    /// Creates a new entry with explicit components.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, flags: u8) -> Self {
        Self {
            red,
            green,
            blue,
            flags,
        }
    }

    /// Creates a new plain color entry (flags = 0).
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }
}

/// A 256-entry indirect-draw color table.
///
/// This is a plain value type: construction and mutation happen entirely on
/// the caller's side, and backends only ever receive a short-lived `&` borrow
/// through [`Renderer::update_palette`](crate::renderer::Renderer::update_palette).
#[derive(Clone, PartialEq, Eq)]
pub struct IndirectDrawPalette {
    entries: [PaletteEntry; PALETTE_ENTRIES],
}

impl IndirectDrawPalette {
    /// Creates an all-black palette (every component and flag zero).
    pub fn new() -> Self {
        Self {
            entries: [PaletteEntry::default(); PALETTE_ENTRIES],
        }
    }

    /// Creates a palette from exactly [`PALETTE_ENTRIES`] entries.
    ///
    /// # Errors
    /// * [`PaletteError::WrongEntryCount`] - If `entries` has any other length.
    pub fn from_entries(entries: &[PaletteEntry]) -> Result<Self, PaletteError> {
        let entries: [PaletteEntry; PALETTE_ENTRIES] = entries
            .try_into()
            .map_err(|_| PaletteError::WrongEntryCount {
                actual: entries.len(),
            })?;
        Ok(Self { entries })
    }

    /// Creates a palette from [`PALETTE_RAW_LEN`] tightly packed bytes
    /// (`red, green, blue, flags` per entry).
    ///
    /// # Errors
    /// * [`PaletteError::WrongByteLength`] - If `bytes` has any other length.
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        if bytes.len() != PALETTE_RAW_LEN {
            return Err(PaletteError::WrongByteLength {
                actual: bytes.len(),
            });
        }
        // PaletteEntry is 4 bytes with alignment 1, so the cast cannot fail.
        Self::from_entries(bytemuck::cast_slice(bytes))
    }

    /// Returns a read-only view of the 256 entries.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Returns the entry for a surface index. Indices are `u8`, so this is
    /// always in bounds.
    #[inline]
    pub fn entry(&self, index: u8) -> PaletteEntry {
        self.entries[index as usize]
    }

    /// Sets the entry for a surface index.
    #[inline]
    pub fn set_entry(&mut self, index: u8, entry: PaletteEntry) {
        self.entries[index as usize] = entry;
    }
}

impl Default for IndirectDrawPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IndirectDrawPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectDrawPalette")
            .field("entries", &format_args!("[PaletteEntry; {PALETTE_ENTRIES}]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_palette_is_all_black() {
        let palette = IndirectDrawPalette::new();
        assert_eq!(palette.entries().len(), PALETTE_ENTRIES);
        assert!(palette
            .entries()
            .iter()
            .all(|e| *e == PaletteEntry::default()));
    }

    #[test]
    fn from_entries_rejects_wrong_count() {
        let short = vec![PaletteEntry::rgb(1, 2, 3); 16];
        assert_eq!(
            IndirectDrawPalette::from_entries(&short),
            Err(PaletteError::WrongEntryCount { actual: 16 })
        );
    }

    #[test]
    fn from_entries_round_trips() {
        let mut entries = vec![PaletteEntry::default(); PALETTE_ENTRIES];
        entries[7] = PaletteEntry::rgb(10, 20, 30);
        let palette = IndirectDrawPalette::from_entries(&entries).unwrap();
        assert_eq!(palette.entry(7), PaletteEntry::rgb(10, 20, 30));
        assert_eq!(palette.entries(), entries.as_slice());
    }

    #[test]
    fn from_raw_bytes_unpacks_entries() {
        let mut bytes = vec![0u8; PALETTE_RAW_LEN];
        // Entry 1 occupies bytes 4..8.
        bytes[4] = 0xAA;
        bytes[5] = 0xBB;
        bytes[6] = 0xCC;
        bytes[7] = 0x01;
        let palette = IndirectDrawPalette::from_raw_bytes(&bytes).unwrap();
        assert_eq!(palette.entry(1), PaletteEntry::new(0xAA, 0xBB, 0xCC, 0x01));
    }

    #[test]
    fn from_raw_bytes_rejects_wrong_length() {
        assert_eq!(
            IndirectDrawPalette::from_raw_bytes(&[0u8; 100]),
            Err(PaletteError::WrongByteLength { actual: 100 })
        );
    }

    #[test]
    fn set_entry_updates_in_place() {
        let mut palette = IndirectDrawPalette::new();
        palette.set_entry(255, PaletteEntry::rgb(9, 8, 7));
        assert_eq!(palette.entry(255), PaletteEntry::rgb(9, 8, 7));
    }

    #[test]
    fn entry_serde_round_trip() {
        let entry = PaletteEntry::new(1, 2, 3, 4);
        let json = serde_json::to_string(&entry).unwrap();
        let back: PaletteEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
