//! Base types shared by the plotive-axes crates: geometry and colors.
// Plotive is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 RÃ©mi Thebault

pub mod color;
pub mod geom;
