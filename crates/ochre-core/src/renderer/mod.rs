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

//! Provides the public, backend-agnostic rendering contracts for Ochre.
//!
//! This module defines the "common language" for presenting palettized
//! surfaces. It contains the abstract [`Renderer`] capability trait, the data
//! structures it consumes (like [`IndirectDrawPalette`]), and the error types
//! that form the stable, public-facing API.
//!
//! The module defines the 'what' of rendering, while the 'how' is handled by
//! a concrete backend (e.g., the software backend in `ochre-infra`) which
//! implements these traits. Callers drive any backend through the trait
//! without knowing its concrete type.

pub mod api;
pub mod error;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::{IndirectDrawPalette, PaletteEntry, SurfaceDimensions};
pub use self::error::PaletteError;
pub use self::traits::Renderer;
