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

//! # Ochre Core
//!
//! Foundational crate containing the renderer capability trait, the palette
//! and surface types it consumes, and the interface contracts shared by all
//! concrete backends.
//!
//! This crate defines the 'what' of palettized-surface presentation; the
//! 'how' lives in backend crates (see `ochre-infra`) which implement these
//! contracts.

#![warn(missing_docs)]

pub mod renderer;

pub use renderer::{IndirectDrawPalette, PaletteEntry, Renderer, SurfaceDimensions};
