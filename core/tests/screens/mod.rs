// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Load and submit cycles of the evento-core screens.

mod browser;
mod dashboard;
mod directory;
mod gallery;
mod packages;
