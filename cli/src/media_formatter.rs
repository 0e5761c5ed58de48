// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use colored::Color;
use evento_api::{Media, MediaKind};

use crate::table::{PaddingDirection, TableColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaColumn {
    Id,
    Kind,
    Url,
}

impl MediaColumn {
    pub const ALL: [MediaColumn; 3] = [MediaColumn::Id, MediaColumn::Kind, MediaColumn::Url];
}

impl TableColumn<Media> for MediaColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            MediaColumn::Id => "ID",
            MediaColumn::Kind => "Type",
            MediaColumn::Url => "URL",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Media) -> Cow<'a, str> {
        match self {
            MediaColumn::Id => data.id.to_string().into(),
            MediaColumn::Kind => data.kind.as_str().into(),
            MediaColumn::Url => data.image_url.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            MediaColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &Media) -> Option<Color> {
        match (self, data.kind) {
            (MediaColumn::Kind, MediaKind::Video) => Some(Color::Magenta),
            _ => None,
        }
    }
}
