// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the `Evento` facade.
//!
//! Covers configuration, sign-in, and a full round trip against a mock server.

mod config;
mod http;
mod login;
