// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-progress form input and its validation.

use std::fmt;

use evento_api::{
    Category, Credentials, NewBooking, NewPackage, NewVendor, PackageId, VendorId, de,
};
use jiff::civil::Date;

/// Locations a vendor can be registered in.
pub const LOCATIONS: [&str; 31] = [
    "Bhatpara",
    "Ichapur",
    "Titagarh",
    "Khardaha",
    "Birati",
    "New Barrackpur",
    "Hridaypur",
    "Bamangachhi",
    "Barasat",
    "Madhyamgram",
    "Barrackpore",
    "Kolkata",
    "Dumdum",
    "Howrah",
    "Naihati",
    "Shyamnagar",
    "Nadia",
    "Habra",
    "Jagatdal",
    "Chandannagar",
    "Chinsurah",
    "Bandel",
    "Kanchrapara",
    "Kalyani",
    "Sonarpur",
    "Baruipur",
    "Gobardanga",
    "Bangaon",
    "Chakdaha",
    "Haringhata",
    "Jaguli",
];

/// Finds a known location, ignoring case.
#[must_use]
pub fn find_location(name: &str) -> Option<&'static str> {
    let name = name.trim();
    LOCATIONS
        .into_iter()
        .find(|loc| loc.eq_ignore_ascii_case(name))
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was left empty.
    Missing(&'static str),
    /// A field was filled in but could not be accepted.
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl FieldError {
    /// Name of the rejected field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) | Self::Invalid { field, .. } => field,
        }
    }
}

/// Form input rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    /// Every rejected field, in form order.
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Names of the rejected fields.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldError::field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing: Vec<_> = self
            .fields
            .iter()
            .filter_map(|a| match a {
                FieldError::Missing(field) => Some(*field),
                FieldError::Invalid { .. } => None,
            })
            .collect();

        let mut sep = "";
        if !missing.is_empty() {
            write!(f, "Please fill all fields: {}", missing.join(", "))?;
            sep = "; ";
        }
        for e in &self.fields {
            if let FieldError::Invalid { field, reason } = e {
                write!(f, "{sep}invalid {field}: {reason}")?;
                sep = "; ";
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Checker {
    fields: Vec<FieldError>,
}

impl Checker {
    /// Records `field` as missing when blank. Returns the trimmed value.
    fn required<'a>(&mut self, field: &'static str, value: &'a str) -> Option<&'a str> {
        let value = value.trim();
        if value.is_empty() {
            self.fields.push(FieldError::Missing(field));
            None
        } else {
            Some(value)
        }
    }

    fn invalid(&mut self, field: &'static str, reason: impl Into<String>) {
        self.fields.push(FieldError::Invalid {
            field,
            reason: reason.into(),
        });
    }

    fn optional_date(&mut self, field: &'static str, value: &str) -> Option<Date> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match de::parse_date(value) {
            Ok(date) => Some(date),
            Err(e) => {
                self.invalid(field, e);
                None
            }
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.fields,
            })
        }
    }
}

/// Vendor registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorForm {
    pub name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub category: String,
    pub location: String,
}

impl VendorForm {
    /// Checks the required fields and canonicalizes category and location.
    pub fn validate(&self) -> Result<NewVendor, ValidationError> {
        let mut c = Checker::default();
        let name = c.required("name", &self.name);
        let username = c.required("username", &self.username);
        let category = c.required("category", &self.category).and_then(|a| {
            a.parse::<Category>()
                .map_err(|e| c.invalid("category", e))
                .ok()
        });
        let email = c.required("email", &self.email);
        let password = c.required("password", &self.password);
        let location = c.required("location", &self.location).and_then(|a| {
            let found = find_location(a);
            if found.is_none() {
                c.invalid("location", format!("Unknown location: {a}"));
            }
            found
        });
        c.finish()?;

        Ok(NewVendor {
            name: name.unwrap_or_default().to_string(),
            username: username.unwrap_or_default().to_string(),
            phone: self.phone.trim().to_string(),
            email: email.unwrap_or_default().to_string(),
            password: password.unwrap_or_default().to_string(),
            category: category.map(Category::name).unwrap_or_default().to_string(),
            location: location.unwrap_or_default().to_string(),
        })
    }
}

/// Package creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageForm {
    pub package_name: String,
    pub description: String,
    pub price: String,
}

impl PackageForm {
    /// Checks the required fields and parses the price.
    pub fn validate(&self, vendor_id: VendorId) -> Result<NewPackage, ValidationError> {
        let mut c = Checker::default();
        let package_name = c.required("package_name", &self.package_name);
        let price = c
            .required("price", &self.price)
            .and_then(|a| match parse_price(a) {
                Ok(price) => Some(price),
                Err(e) => {
                    c.invalid("price", e);
                    None
                }
            });
        c.finish()?;

        Ok(NewPackage {
            vendor_id,
            package_name: package_name.unwrap_or_default().to_string(),
            description: self.description.trim().to_string(),
            price: price.unwrap_or_default(),
        })
    }
}

fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if !price.is_finite() {
        Err(format!("not a number: {s}"))
    } else if price < 0.0 {
        Err("must not be negative".to_string())
    } else {
        Ok(price)
    }
}

/// Booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub city: String,
    pub area: String,
    pub landmark: String,
    pub start_date: String,
    pub end_date: String,
    pub advance_received: String,
}

impl BookingForm {
    /// Checks the contact fields and the optional dates.
    pub fn validate(
        &self,
        vendor_id: VendorId,
        package_id: PackageId,
    ) -> Result<NewBooking, ValidationError> {
        let mut c = Checker::default();
        let name = c.required("name", &self.name);
        let email = c.required("email", &self.email);
        let phone = c.required("phone", &self.phone);
        let start_date = c.optional_date("start_date", &self.start_date);
        let end_date = c.optional_date("end_date", &self.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date)
            && start > end
        {
            c.invalid("end_date", "must not be before the start date");
        }
        c.finish()?;

        Ok(NewBooking {
            name: name.unwrap_or_default().to_string(),
            email: email.unwrap_or_default().to_string(),
            phone: phone.unwrap_or_default().to_string(),
            state: self.state.trim().to_string(),
            city: self.city.trim().to_string(),
            area: self.area.trim().to_string(),
            landmark: self.landmark.trim().to_string(),
            start_date,
            end_date,
            vendor_id,
            package_id,
            advance_received: self.advance_received.trim().to_string(),
        })
    }
}

/// Non-availability date picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateForm {
    pub date: String,
}

impl DateForm {
    /// Creates a form holding `date`.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }

    /// Parses the picked date.
    pub fn validate(&self) -> Result<Date, ValidationError> {
        let mut c = Checker::default();
        let date = c
            .required("date", &self.date)
            .and_then(|a| match a.parse::<Date>() {
                Ok(date) => Some(date),
                Err(_) => {
                    c.invalid("date", format!("expected YYYY-MM-DD, got {a}"));
                    None
                }
            });
        c.finish()?;
        date.ok_or_else(|| ValidationError {
            fields: vec![FieldError::Missing("date")],
        })
    }
}

/// Vendor login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Checks both fields are filled in.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let mut c = Checker::default();
        let email = c.required("email", &self.email);
        // Passwords are sent as typed.
        if self.password.is_empty() {
            c.fields.push(FieldError::Missing("password"));
        }
        c.finish()?;

        Ok(Credentials {
            email: email.unwrap_or_default().to_string(),
            password: self.password.clone(),
        })
    }
}
