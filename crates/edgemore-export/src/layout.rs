//! Flow composed blocks onto fixed-size pages.
//!
//! The output is one list of content-stream operations per page. Every page
//! starts with the background decoration, so continuation pages look exactly
//! like the first one.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use crate::compose::{Block, ComposedDocument, FieldTable, Paragraph};
use crate::metrics::{encode_win_ansi, text_width, wrap_text};
use crate::styles::{Alignment, Color, PageBackground, PageGeometry, TableStyle, TextStyle};

/// Content of one laid-out page.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub operations: Vec<Operation>,
}

/// Lay out `doc`, appending pages as needed. Always yields at least one page.
pub fn layout_pages(doc: &ComposedDocument) -> Vec<PageContent> {
    let mut layouter = Layouter::new(doc.page, doc.background);
    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => layouter.place_paragraph(p),
            Block::Table(t) => layouter.place_table(t),
            Block::Spacer(height) => layouter.place_spacer(*height),
        }
    }
    layouter.finish()
}

/// Operations that paint the page background and its inset border.
pub fn background_operations(page: &PageGeometry, bg: &PageBackground) -> Vec<Operation> {
    let inset = bg.inset;
    vec![
        Operation::new("q", vec![]),
        fill_color(bg.fill),
        rect(0.0, 0.0, page.width, page.height),
        Operation::new("f", vec![]),
        stroke_color(bg.border),
        Operation::new("w", vec![bg.line_width.into()]),
        rect(
            inset,
            inset,
            page.width - 2.0 * inset,
            page.height - 2.0 * inset,
        ),
        Operation::new("S", vec![]),
        Operation::new("Q", vec![]),
    ]
}

struct Layouter {
    page: PageGeometry,
    background: PageBackground,
    pages: Vec<PageContent>,
    current: Vec<Operation>,
    /// Top of the free space left on the current page.
    cursor: f32,
    /// Space after the previous block, collapsed with the next space before.
    pending_space: f32,
}

impl Layouter {
    fn new(page: PageGeometry, background: PageBackground) -> Self {
        Self {
            page,
            background,
            pages: Vec::new(),
            current: background_operations(&page, &background),
            cursor: page.frame_top(),
            pending_space: 0.0,
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::replace(
            &mut self.current,
            background_operations(&self.page, &self.background),
        );
        self.pages.push(PageContent {
            operations: finished,
        });
        self.cursor = self.page.frame_top();
        self.pending_space = 0.0;
    }

    fn finish(mut self) -> Vec<PageContent> {
        self.pages.push(PageContent {
            operations: self.current,
        });
        self.pages
    }

    fn at_top(&self) -> bool {
        self.cursor >= self.page.frame_top()
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.page.frame_bottom()
    }

    /// Consume the gap before a block. Gaps vanish at the top of a page.
    fn open_block(&mut self, space_before: f32) {
        let gap = self.pending_space.max(space_before);
        self.pending_space = 0.0;
        if !self.at_top() {
            self.cursor = (self.cursor - gap).max(self.page.frame_bottom());
        }
    }

    fn place_spacer(&mut self, height: f32) {
        self.open_block(0.0);
        if !self.at_top() {
            self.cursor = (self.cursor - height).max(self.page.frame_bottom());
        }
    }

    fn place_paragraph(&mut self, paragraph: &Paragraph) {
        let style = paragraph.style;
        self.open_block(style.space_before);

        let width = self.page.frame_width();
        for hard_line in &paragraph.lines {
            for line in wrap_text(hard_line, style.font, style.size, width) {
                if self.remaining() < style.leading && !self.at_top() {
                    self.new_page();
                }
                let x = self.page.frame_left() + align_offset(&style, &line, width);
                let baseline = self.cursor - style.size;
                self.draw_text(&style, &line, x, baseline);
                self.cursor -= style.leading;
            }
        }

        self.pending_space = style.space_after;
    }

    fn place_table(&mut self, table: &FieldTable) {
        self.open_block(0.0);

        let style = &table.style;
        for row in &table.rows {
            let labels = wrap_text(
                &row.label,
                style.label.font,
                style.label.size,
                style.text_width(0),
            );
            let values = wrap_text(
                &row.value,
                style.value.font,
                style.value.size,
                style.text_width(1),
            );
            self.place_row(style, &labels, &values);
        }
    }

    /// Place one table row. A row that does not fit moves to a fresh page; a
    /// row taller than a whole frame is split across pages line by line.
    fn place_row(&mut self, style: &TableStyle, labels: &[String], values: &[String]) {
        let padding = style.padding_top + style.padding_bottom;
        let full_height = (labels.len() as f32 * style.label.leading)
            .max(values.len() as f32 * style.value.leading)
            + padding;

        if full_height > self.remaining() && !self.at_top() {
            self.new_page();
        }

        let table_left = self.page.frame_left() + (self.page.frame_width() - style.width()) / 2.0;
        let value_left = table_left + style.column_widths[0];
        let (mut labels, mut values) = (labels, values);

        loop {
            let room = self.remaining() - padding;
            let label_take = lines_that_fit(room, style.label.leading, labels.len());
            let value_take = lines_that_fit(room, style.value.leading, values.len());
            let height = (label_take as f32 * style.label.leading)
                .max(value_take as f32 * style.value.leading)
                + padding;

            self.current.push(fill_color(style.background));
            self.current
                .push(rect(table_left, self.cursor - height, style.width(), height));
            self.current.push(Operation::new("f", vec![]));

            let top = self.cursor - style.padding_top;
            self.draw_cell(&style.label, &labels[..label_take], table_left + style.padding_left, top);
            self.draw_cell(&style.value, &values[..value_take], value_left + style.padding_left, top);

            self.cursor -= height;
            labels = &labels[label_take..];
            values = &values[value_take..];
            if labels.is_empty() && values.is_empty() {
                break;
            }
            self.new_page();
        }
    }

    fn draw_cell(&mut self, style: &TextStyle, lines: &[String], x: f32, top: f32) {
        for (i, line) in lines.iter().enumerate() {
            let baseline = top - i as f32 * style.leading - style.size;
            self.draw_text(style, line, x, baseline);
        }
    }

    fn draw_text(&mut self, style: &TextStyle, text: &str, x: f32, baseline: f32) {
        if text.is_empty() {
            return;
        }
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![style.font.resource_name().into(), style.size.into()],
            ),
            fill_color(style.color),
            Operation::new("Td", vec![x.into(), baseline.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }
}

/// How many of `available` lines of height `leading` fit into `room`.
/// At least one line is always taken so layout makes progress.
fn lines_that_fit(room: f32, leading: f32, available: usize) -> usize {
    if available == 0 {
        return 0;
    }
    let fit = (room / leading).floor().max(1.0) as usize;
    fit.min(available)
}

fn align_offset(style: &TextStyle, line: &str, width: f32) -> f32 {
    match style.alignment {
        Alignment::Left => 0.0,
        Alignment::Center => {
            ((width - text_width(style.font, line, style.size)) / 2.0).max(0.0)
        }
    }
}

fn fill_color(c: Color) -> Operation {
    Operation::new("rg", vec![c.r.into(), c.g.into(), c.b.into()])
}

fn stroke_color(c: Color) -> Operation {
    Operation::new("RG", vec![c.r.into(), c.g.into(), c.b.into()])
}

fn rect(x: f32, y: f32, width: f32, height: f32) -> Operation {
    Operation::new(
        "re",
        vec![x.into(), y.into(), width.into(), height.into()],
    )
}
