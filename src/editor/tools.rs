use crate::geometry::Color;

/// Brush widths offered by the toolbar. `set_brush_width` accepts any
/// positive value; the toolbar only ever hands out one of these.
pub const BRUSH_WIDTHS: [u32; 5] = [3, 5, 7, 12, 15];

pub const DEFAULT_BRUSH_WIDTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Brush,
    Rectangle,
    Oval,
    Text,
}

/// Toolbar color palette. White doubles as the eraser on the white canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Black,
    Yellow,
    Blue,
    Green,
    White,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        Self::Red,
        Self::Black,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::White,
    ];

    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::new(255, 0, 0),
            Self::Black => Color::new(0, 0, 0),
            Self::Yellow => Color::new(255, 255, 0),
            Self::Blue => Color::new(0, 0, 255),
            Self::Green => Color::new(0, 128, 0),
            Self::White => Color::new(255, 255, 255),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::White => "Eraser",
        }
    }
}

/// Active tool plus the shared stroke style. Exactly one tool is active at
/// a time by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    active_tool: ToolKind,
    color: Color,
    brush_width: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolState {
    pub const fn new() -> Self {
        Self {
            active_tool: ToolKind::Brush,
            color: PaletteColor::Black.color(),
            brush_width: DEFAULT_BRUSH_WIDTH,
        }
    }

    pub const fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active_tool = tool;
    }

    /// Picking a color also arms the brush, matching the toolbar behavior
    /// where every color button doubles as a brush selector.
    pub fn set_color(&mut self, color: Color) {
        self.active_tool = ToolKind::Brush;
        self.color = color;
    }

    pub fn set_palette_color(&mut self, palette: PaletteColor) {
        self.set_color(palette.color());
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width;
    }
}
