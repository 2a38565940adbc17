//! Content stream interpretation.
//!
//! Walks a page's operations and emits a [`TextSpan`] for every text-showing
//! operator, with its position and effective font size. Only the state that
//! affects placement and size is tracked: the graphics state stack (`q`/`Q`),
//! the current transformation matrix (`cm`), the text and line matrices, the
//! font (`Tf`), and leading (`TL`).

use super::backend::{ContentOp, PageId, PdfBackend, PdfValue};
use crate::error::Result;

/// A run of text shown by a single operator.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Decoded text
    pub text: String,
    /// X position (left edge) in user space
    pub x: f32,
    /// Y position (baseline) in user space
    pub y: f32,
    /// Effective font size in points
    pub font_size: f32,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
        }
    }

    /// Character count.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Rough advance width, assuming half an em per character.
    pub fn estimated_width(&self) -> f32 {
        self.char_count() as f32 * self.font_size * 0.5
    }
}

/// `TJ` adjustments beyond this many thousandths of an em are word gaps.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Affine matrix `[a b c d e f]` in PDF row-vector convention.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Matrix {
    const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn from_op(op: &ContentOp) -> Self {
        Matrix {
            a: op.number(0, 1.0),
            b: op.number(1, 0.0),
            c: op.number(2, 0.0),
            d: op.number(3, 1.0),
            e: op.number(4, 0.0),
            f: op.number(5, 0.0),
        }
    }

    fn translation(tx: f32, ty: f32) -> Self {
        Matrix {
            e: tx,
            f: ty,
            ..Matrix::IDENTITY
        }
    }

    /// `self × other`
    fn then(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Length of the transformed unit Y vector.
    fn vertical_scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }
}

/// Text-related interpreter state.
#[derive(Debug, Clone)]
struct TextState {
    ctm: Matrix,
    saved: Vec<Matrix>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    font: Vec<u8>,
    font_size: f32,
    leading: f32,
    in_text: bool,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            ctm: Matrix::IDENTITY,
            saved: Vec::new(),
            text_matrix: Matrix::IDENTITY,
            line_matrix: Matrix::IDENTITY,
            font: Vec::new(),
            font_size: 12.0,
            leading: 0.0,
            in_text: false,
        }
    }
}

impl TextState {
    fn begin_text(&mut self) {
        self.in_text = true;
        self.text_matrix = Matrix::IDENTITY;
        self.line_matrix = Matrix::IDENTITY;
    }

    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translation(tx, ty).then(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        // Producers that use T* without TL expect roughly single spacing.
        let leading = if self.leading != 0.0 {
            self.leading
        } else {
            self.font_size * 1.2
        };
        self.move_line(0.0, -leading);
    }

    fn set_matrix(&mut self, m: Matrix) {
        self.text_matrix = m;
        self.line_matrix = m;
    }

    /// Position and effective size of text shown now.
    fn placement(&self) -> (f32, f32, f32) {
        let rendering = self.text_matrix.then(&self.ctm);
        let size = self.font_size.abs() * rendering.vertical_scale();
        (rendering.e, rendering.f, size)
    }
}

/// Interpret the content stream of `page` and collect its text spans.
pub fn page_spans<B: PdfBackend + ?Sized>(backend: &B, page: PageId) -> Result<Vec<TextSpan>> {
    let ops = backend.page_operations(page)?;
    Ok(spans_from_operations(backend, page, &ops))
}

/// Interpret already-decoded operations.
pub fn spans_from_operations<B: PdfBackend + ?Sized>(
    backend: &B,
    page: PageId,
    ops: &[ContentOp],
) -> Vec<TextSpan> {
    let mut state = TextState::default();
    let mut spans = Vec::new();

    for op in ops {
        match op.operator.as_str() {
            "q" => state.saved.push(state.ctm),
            "Q" => {
                if let Some(ctm) = state.saved.pop() {
                    state.ctm = ctm;
                }
            }
            "cm" => state.ctm = Matrix::from_op(op).then(&state.ctm),
            "BT" => state.begin_text(),
            "ET" => state.in_text = false,
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    state.font = name.clone();
                }
                state.font_size = op.number(1, state.font_size);
            }
            "TL" => state.leading = op.number(0, state.leading),
            "Td" => state.move_line(op.number(0, 0.0), op.number(1, 0.0)),
            "TD" => {
                let ty = op.number(1, 0.0);
                state.leading = -ty;
                state.move_line(op.number(0, 0.0), ty);
            }
            "Tm" => state.set_matrix(Matrix::from_op(op)),
            "T*" => state.next_line(),
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    let text = backend.decode_text(page, &state.font, bytes);
                    emit(&state, text, &mut spans);
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    let text = decode_tj_array(backend, page, &state.font, items);
                    emit(&state, text, &mut spans);
                }
            }
            "'" | "\"" => {
                state.next_line();
                let idx = if op.operator == "\"" { 2 } else { 0 };
                if let Some(PdfValue::Str(bytes)) = op.operands.get(idx) {
                    let text = backend.decode_text(page, &state.font, bytes);
                    emit(&state, text, &mut spans);
                }
            }
            _ => {}
        }
    }

    spans
}

fn emit(state: &TextState, text: String, spans: &mut Vec<TextSpan>) {
    if !state.in_text || text.trim().is_empty() {
        return;
    }
    let (x, y, size) = state.placement();
    spans.push(TextSpan::new(text, x, y, size));
}

/// Concatenate a `TJ` array, turning large negative kerning into spaces.
fn decode_tj_array<B: PdfBackend + ?Sized>(
    backend: &B,
    page: PageId,
    font: &[u8],
    items: &[PdfValue],
) -> String {
    let mut combined = String::new();

    for item in items {
        match item {
            PdfValue::Str(bytes) => combined.push_str(&backend.decode_text(page, font, bytes)),
            other => {
                let Some(adjustment) = other.as_number() else {
                    continue;
                };
                if -adjustment > TJ_SPACE_THRESHOLD && needs_space(&combined) {
                    combined.push(' ');
                }
            }
        }
    }

    combined
}

fn needs_space(text: &str) -> bool {
    match text.chars().next_back() {
        None => false,
        Some(c) if c == ' ' || c == '\u{00A0}' => false,
        Some(c) => !is_spaceless_script_char(c),
    }
}

/// Characters from scripts written without word spaces (Chinese, Japanese).
/// Hangul is not included: Korean uses spaces.
pub(crate) fn is_spaceless_script_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF     // CJK Unified Ideographs
        | 0x3400..=0x4DBF   // Extension A
        | 0x20000..=0x2EBEF // Extensions B-F
        | 0x3040..=0x309F   // Hiragana
        | 0x30A0..=0x30FF   // Katakana
        | 0x3000..=0x303F   // CJK Symbols and Punctuation
    )
}
