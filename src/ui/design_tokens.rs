// SPDX-License-Identifier: MPL-2.0
//! Spacing, sizing and radius scales shared by the screens.

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Height of the picked image panel on the Home screen.
    pub const IMAGE_PANEL_HEIGHT: f32 = 256.0;
    pub const BUTTON_MIN_WIDTH: f32 = 180.0;
}

pub mod radius {
    pub const LG: f32 = 16.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}
