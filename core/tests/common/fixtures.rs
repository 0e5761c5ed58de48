// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use evento_api::{
    Credentials, NonAvailability, Package, PackageId, PackageListing, RecordId, Vendor, VendorId,
    VendorIdentity,
};
use evento_core::{AdminCredentials, Config, Evento, LoginForm, VendorSession};
use jiff::civil::Date;

use super::fake::{FakeMarketplace, FakeState};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pw";

/// A configuration with admin credentials set.
#[must_use]
pub fn test_config() -> Config {
    Config {
        admin: Some(AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
        ..Default::default()
    }
}

/// An Evento instance over a fake serving `state`.
#[must_use]
pub fn test_evento(state: FakeState) -> Evento<FakeMarketplace> {
    Evento::with_marketplace(test_config(), FakeMarketplace::new(state)).unwrap()
}

#[must_use]
pub fn vendor(id: i64, name: &str) -> Vendor {
    Vendor {
        id: VendorId::new(id),
        name: name.to_string(),
        username: Some(name.to_lowercase().replace(' ', "")),
        phone: Some("9000000000".to_string()),
        email: Some(login_email(id)),
        password: Some("pw".to_string()),
        category: Some("Decorators".to_string()),
        location: Some("Kolkata".to_string()),
    }
}

#[must_use]
pub fn package(id: i64, vendor: i64, price: f64) -> Package {
    Package {
        id: PackageId::new(id),
        vendor_id: Some(VendorId::new(vendor)),
        package_name: format!("Package {id}"),
        description: None,
        price,
    }
}

#[must_use]
pub fn listing(package: i64, vendor: i64, price: f64, location: &str) -> PackageListing {
    PackageListing {
        package_id: PackageId::new(package),
        vendor_id: VendorId::new(vendor),
        package_name: format!("Package {package}"),
        description: None,
        price,
        location: Some(location.to_string()),
    }
}

#[must_use]
pub fn vendor_record(id: i64, vendor: i64, date: Date) -> NonAvailability {
    NonAvailability {
        id: RecordId::new(id),
        vendor_id: Some(VendorId::new(vendor)),
        package_id: None,
        non_availability_date: date,
    }
}

#[must_use]
pub fn package_record(id: i64, package: i64, date: Date) -> NonAvailability {
    NonAvailability {
        id: RecordId::new(id),
        vendor_id: None,
        package_id: Some(PackageId::new(package)),
        non_availability_date: date,
    }
}

#[must_use]
pub fn login_email(vendor: i64) -> String {
    format!("vendor{vendor}@example.com")
}

/// A login the fake accepts for `vendor`.
#[must_use]
pub fn vendor_login(vendor: i64, name: &str) -> (Credentials, VendorIdentity) {
    (
        Credentials {
            email: login_email(vendor),
            password: "pw".to_string(),
        },
        VendorIdentity {
            id: VendorId::new(vendor),
            name: name.to_string(),
            email: login_email(vendor),
        },
    )
}

/// Signs `vendor` in. Its login must be registered with the fake.
pub async fn sign_in(evento: &Evento<FakeMarketplace>, vendor: i64) -> VendorSession {
    evento
        .login_vendor(&LoginForm {
            email: login_email(vendor),
            password: "pw".to_string(),
        })
        .await
        .unwrap()
}
