// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};

use crate::de;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the inner value.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                de::int(d).map(Self)
            }
        }
    };
}

id_type!(
    /// Server-assigned vendor identifier.
    VendorId
);
id_type!(
    /// Server-assigned package identifier.
    PackageId
);
id_type!(
    /// Server-assigned booking identifier.
    BookingId
);
id_type!(
    /// Server-assigned non-availability record identifier.
    RecordId
);
id_type!(
    /// Server-assigned media identifier.
    MediaId
);

/// Service category a vendor is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Photo and Videographers.
    #[serde(rename = "Photo and Videographers")]
    PhotoAndVideographers,
    /// Decorators.
    #[serde(rename = "Decorators")]
    Decorators,
    /// Rental Cars.
    #[serde(rename = "Rental Cars")]
    RentalCars,
    /// Caterers.
    #[serde(rename = "Caterers")]
    Caterers,
    /// Makeup Artists.
    #[serde(rename = "Makeup Artists")]
    MakeupArtists,
    /// Mehandi Artists.
    #[serde(rename = "Mehandi Artists")]
    MehandiArtists,
    /// Invitation Cards.
    #[serde(rename = "Invitation Cards")]
    InvitationCards,
}

impl Category {
    /// All categories, in the order the registration form offers them.
    pub const ALL: [Category; 7] = [
        Category::PhotoAndVideographers,
        Category::Decorators,
        Category::RentalCars,
        Category::Caterers,
        Category::MakeupArtists,
        Category::MehandiArtists,
        Category::InvitationCards,
    ];

    /// Display name, as stored on vendor records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::PhotoAndVideographers => "Photo and Videographers",
            Category::Decorators => "Decorators",
            Category::RentalCars => "Rental Cars",
            Category::Caterers => "Caterers",
            Category::MakeupArtists => "Makeup Artists",
            Category::MehandiArtists => "Mehandi Artists",
            Category::InvitationCards => "Invitation Cards",
        }
    }

    /// URL segment of the per-category browse endpoints.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Category::PhotoAndVideographers => "photo-videographers",
            Category::Decorators => "decorators",
            Category::RentalCars => "rental-cars",
            Category::Caterers => "caterers",
            Category::MakeupArtists => "makeup-artists",
            Category::MehandiArtists => "mehandi-artists",
            Category::InvitationCards => "invitation-cards",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts either the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// A service provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    #[serde(default)]
    pub name: String,
    pub username: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Only the admin directory receives this; it is never echoed back out.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

/// A priced offering belonging to a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    #[serde(default, deserialize_with = "opt_vendor_id")]
    pub vendor_id: Option<VendorId>,
    pub package_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::number")]
    pub price: f64,
}

/// A package as listed on the customer-facing category pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageListing {
    pub package_id: PackageId,
    pub vendor_id: VendorId,
    pub package_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::number")]
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
}

/// What the booking form shows about the package being booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingContext {
    pub vendor_id: VendorId,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub price: Option<String>,
}

/// A customer's booking against a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(default, deserialize_with = "opt_vendor_id")]
    pub vendor_id: Option<VendorId>,
    #[serde(default, deserialize_with = "opt_package_id")]
    pub package_id: Option<PackageId>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub phone: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub end_date: Option<Date>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub advance_received: Option<String>,
}

/// A single calendar date on which a vendor or a package cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonAvailability {
    pub id: RecordId,
    #[serde(default, deserialize_with = "opt_vendor_id")]
    pub vendor_id: Option<VendorId>,
    #[serde(default, deserialize_with = "opt_package_id")]
    pub package_id: Option<PackageId>,
    #[serde(deserialize_with = "de::date")]
    pub non_availability_date: Date,
}

/// Kind of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image or a video attached to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,
    #[serde(default, deserialize_with = "opt_package_id")]
    pub package_id: Option<PackageId>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub image_url: String,
}

/// Identity returned by a successful vendor login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorIdentity {
    pub id: VendorId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Acknowledgment body of a write request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Human-readable message, when the server sends one.
    #[serde(default)]
    pub message: Option<String>,
    /// Id of the created record, when the server reports it.
    #[serde(
        default,
        alias = "insertId",
        alias = "insert_id",
        deserialize_with = "de::opt_int"
    )]
    pub id: Option<i64>,
}

impl Message {
    /// The server message, or the given fallback.
    #[must_use]
    pub fn or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MediaEnvelope {
    #[serde(default)]
    pub media: Vec<Media>,
}

fn opt_vendor_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<VendorId>, D::Error> {
    de::opt_int(d).map(|a| a.map(VendorId))
}

fn opt_package_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PackageId>, D::Error> {
    de::opt_int(d).map(|a| a.map(PackageId))
}
