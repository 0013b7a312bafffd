/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

/// `#FFD700`
pub const GOLD: Color = Color::rgb(1.0, 0.843_137, 0.0);

/// `#F5F5F5`
pub const WHITESMOKE: Color = Color::rgb(0.960_784, 0.960_784, 0.960_784);

/// Standard-14 fonts used by the estimate document. None are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaBoldOblique,
}

impl Font {
    pub const ALL: [Font; 3] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaBoldOblique,
    ];

    /// PostScript name written as the font's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Name of the font in each page's resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaBoldOblique => "F3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Paragraph styling. Sizes are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
}

impl TextStyle {
    const fn body(font: Font, size: f32, leading: f32, color: Color) -> Self {
        Self {
            font,
            size,
            leading,
            color,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
        }
    }
}

/// Styling for a two-column label/value table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    /// Label and value column widths in points.
    pub column_widths: [f32; 2],
    pub background: Color,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
    pub padding_right: f32,
    pub label: TextStyle,
    pub value: TextStyle,
}

impl TableStyle {
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Width available to text inside column `idx`.
    pub fn text_width(&self, idx: usize) -> f32 {
        self.column_widths[idx] - self.padding_left - self.padding_right
    }
}

/// Decoration painted under every page's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBackground {
    pub fill: Color,
    pub border: Color,
    /// Distance of the border from each page edge.
    pub inset: f32,
    pub line_width: f32,
}

/// Page size and the content frame inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Extra padding between the margin and the flowing content.
    pub frame_padding: f32,
}

impl PageGeometry {
    /// US Letter, 40pt margins.
    pub const LETTER: PageGeometry = PageGeometry {
        width: 612.0,
        height: 792.0,
        margin: 40.0,
        frame_padding: 6.0,
    };

    pub fn frame_left(&self) -> f32 {
        self.margin + self.frame_padding
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin - self.frame_padding
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin + self.frame_padding
    }

    pub fn frame_width(&self) -> f32 {
        self.width - 2.0 * (self.margin + self.frame_padding)
    }

    pub fn frame_height(&self) -> f32 {
        self.frame_top() - self.frame_bottom()
    }
}

/// The fixed black-and-gold theme of the estimate document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStyles {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub section: TextStyle,
    pub body: TextStyle,
    pub footer: TextStyle,
    pub table: TableStyle,
    pub background: PageBackground,
    pub page: PageGeometry,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        let label = TextStyle::body(Font::Helvetica, 9.0, 11.0, GOLD);
        let value = TextStyle::body(Font::Helvetica, 10.0, 13.0, WHITESMOKE);

        Self {
            title: TextStyle {
                alignment: Alignment::Center,
                space_after: 6.0,
                ..TextStyle::body(Font::HelveticaBold, 20.0, 24.0, GOLD)
            },
            subtitle: TextStyle {
                alignment: Alignment::Center,
                space_after: 18.0,
                ..TextStyle::body(Font::Helvetica, 10.0, 12.0, WHITESMOKE)
            },
            section: TextStyle {
                space_before: 10.0,
                space_after: 4.0,
                ..TextStyle::body(Font::HelveticaBoldOblique, 12.0, 14.0, GOLD)
            },
            body: value,
            footer: TextStyle {
                alignment: Alignment::Center,
                space_before: 20.0,
                ..TextStyle::body(Font::Helvetica, 8.0, 10.0, GOLD)
            },
            table: TableStyle {
                column_widths: [160.0, 360.0],
                background: BLACK,
                padding_top: 4.0,
                padding_bottom: 4.0,
                padding_left: 6.0,
                padding_right: 6.0,
                label,
                value,
            },
            background: PageBackground {
                fill: BLACK,
                border: GOLD,
                inset: 24.0,
                line_width: 1.2,
            },
            page: PageGeometry::LETTER,
        }
    }
}
