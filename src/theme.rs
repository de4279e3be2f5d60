use gpui::{Hsla, rgb};

/// Colors used by the data table and its controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableTheme {
    pub header_fg: Hsla,
    pub header_border: Hsla,
    pub cell_fg: Hsla,
    pub row_bg: Hsla,
    pub row_alt_bg: Hsla,
    pub row_border: Hsla,
    pub indicator_active: Hsla,
    pub indicator_idle: Hsla,
    pub label_fg: Hsla,
    pub control_bg: Hsla,
    pub control_hover_bg: Hsla,
    pub control_active_bg: Hsla,
    pub control_border: Hsla,
    pub control_focus_border: Hsla,
    pub control_fg: Hsla,
    pub control_disabled_fg: Hsla,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_fg: gpui::black(),
            header_border: rgb(0xcccccc).into(),
            cell_fg: rgb(0x222222).into(),
            row_bg: gpui::white(),
            row_alt_bg: rgb(0xf9f9f9).into(),
            row_border: rgb(0xdddddd).into(),
            indicator_active: gpui::black(),
            indicator_idle: rgb(0x808080).into(),
            label_fg: rgb(0x333333).into(),
            control_bg: rgb(0xf4f4f4).into(),
            control_hover_bg: rgb(0xe8e8e8).into(),
            control_active_bg: rgb(0xdedede).into(),
            control_border: rgb(0xbbbbbb).into(),
            control_focus_border: rgb(0x4a7dff).into(),
            control_fg: rgb(0x111111).into(),
            control_disabled_fg: rgb(0xa0a0a0).into(),
        }
    }
}
