// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides an in-memory marketplace and test data factories.

mod fake;
mod fixtures;

#[allow(unused_imports)]
pub use fake::{FakeMarketplace, FakeState};
#[allow(unused_imports)]
pub use fixtures::{
    ADMIN_PASSWORD, ADMIN_USERNAME, listing, login_email, package, package_record, sign_in,
    test_config, test_evento, vendor, vendor_login, vendor_record,
};
