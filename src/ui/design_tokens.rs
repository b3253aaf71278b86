// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every gallery widget.

## Organization

- **Palette**: Base colors
- **Opacity**: Overlay and scrim levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, grid and modal dimensions
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Card elevation

## Examples

```
use reports_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

let gutter = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.1, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.15, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.32, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.83, 0.85);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.95);

    // Brand colors (teal scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.7, 0.68);
    pub const PRIMARY_500: Color = Color::from_rgb(0.05, 0.58, 0.56);
    pub const PRIMARY_600: Color = Color::from_rgb(0.03, 0.47, 0.46);
    pub const PRIMARY_700: Color = Color::from_rgb(0.02, 0.37, 0.36);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Title gradient band at the bottom of a card
    pub const TITLE_BAND: f32 = 0.6;
    /// Play affordance over video covers
    pub const PLAY_OVERLAY: f32 = 0.35;
    pub const PLAY_OVERLAY_HOVER: f32 = 0.55;
    /// Backdrop behind the video modal
    pub const SCRIM: f32 = 0.8;
    pub const DISABLED: f32 = 0.4;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Card width in the gallery grid
    pub const CARD_WIDTH: f32 = 240.0;
    /// Cards per grid row
    pub const GRID_COLUMNS: usize = 3;
    /// Banner height
    pub const BANNER_HEIGHT: f32 = 160.0;
    /// Play button diameter on video cards
    pub const PLAY_BUTTON: f32 = 56.0;
    /// Width of the filter pick lists
    pub const PICK_LIST_WIDTH: f32 = 180.0;
    /// Video modal width
    pub const MODAL_WIDTH: f32 = 880.0;
    /// Height of a pagination button
    pub const PAGE_BUTTON: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner heading
    pub const TITLE_LG: f32 = 30.0;

    /// Section headers, empty-state message
    pub const TITLE_SM: f32 = 18.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Card titles, language links, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const CARD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.25,
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const MODAL: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PLAY_OVERLAY_HOVER > opacity::PLAY_OVERLAY);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    assert!(sizing::GRID_COLUMNS > 0);
    assert!(sizing::PLAY_BUTTON < sizing::CARD_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
