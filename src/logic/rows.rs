//! Body row construction
//!
//! The page body renders as one scrollable stream of rows. This module
//! builds that stream as data: which row is a section title, which is a
//! wrapped body line, which is an interactive gallery or form row. The ui
//! layer styles the rows; the scroll logic consumes the anchor offsets; the
//! mouse handler maps visible rows back through the same indices.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{FieldId, FormModel};
use crate::page::{Page, SectionKind};

/// One row of the body stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Blank,
    /// Section heading; index into `page.sections`
    SectionTitle { section: usize },
    /// One wrapped line of section body text
    Body { text: String },
    /// One gallery entry; index into `page.gallery`
    GalleryItem { index: usize },
    FieldLabel { field: FieldId },
    FieldInput { field: FieldId },
    /// Present only while the field has a validation error
    FieldError { field: FieldId },
    Submit,
    /// Present only after a successful submission
    Success,
}

/// The built stream plus anchor offsets (section id, row of its title)
#[derive(Clone, Debug)]
pub struct BodyRows {
    pub rows: Vec<Row>,
    pub anchors: Vec<(String, usize)>,
}

/// Build the body stream for the current page and form state at a given
/// text width (in cells).
pub fn build_rows(page: &Page, form: &FormModel, width: u16) -> BodyRows {
    let wrap_width = (width as usize).max(20);
    let mut rows = Vec::new();
    let mut anchors = Vec::new();

    for (idx, section) in page.sections.iter().enumerate() {
        if idx > 0 {
            rows.push(Row::Blank);
        }
        anchors.push((section.id.clone(), rows.len()));
        rows.push(Row::SectionTitle { section: idx });

        for text in wrap_text(&section.body, wrap_width) {
            rows.push(Row::Body { text });
        }

        match section.kind {
            SectionKind::Text => {}
            SectionKind::Gallery => {
                if !page.gallery.is_empty() {
                    rows.push(Row::Blank);
                }
                for index in 0..page.gallery.len() {
                    rows.push(Row::GalleryItem { index });
                }
            }
            SectionKind::Contact => {
                rows.push(Row::Blank);
                for field in [FieldId::Name, FieldId::Email, FieldId::Message] {
                    rows.push(Row::FieldLabel { field });
                    rows.push(Row::FieldInput { field });
                    if form.errors.get(field).is_some() {
                        rows.push(Row::FieldError { field });
                    }
                }
                rows.push(Row::Blank);
                rows.push(Row::Submit);
                if form.success.is_some() {
                    rows.push(Row::Success);
                }
            }
        }
    }

    BodyRows { rows, anchors }
}

/// Greedy word wrap measured in display cells. Words wider than the wrap
/// width are hard-split rather than overflowing.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if word_width > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            let mut chunk = String::new();
            let mut chunk_width = 0usize;
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if chunk_width + ch_width > width {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(ch);
                chunk_width += ch_width;
            }
            line = chunk;
            line_width = chunk_width;
            continue;
        }

        let needed = if line.is_empty() {
            word_width
        } else {
            word_width + 1
        };
        if line_width + needed > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        } else {
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
