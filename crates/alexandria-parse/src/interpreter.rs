//! Figure interpreter.
//!
//! Replays a page's flattened operator stream, tracking the CTM stack and a
//! current-path bounding box, and collects one rect per painted path. Rects
//! are merged with any previously collected rect they overlap, so the result
//! is a set of disjoint boxes, each covering one logical figure.

use alexandria_core::geometry::{Rect, push_merged};
use tracing::{debug, trace};

use crate::error::InterpreterError;
use crate::interpreter_state::InterpreterState;
use crate::operator::{Opcode, OperatorRecord};

/// Stateful single-pass interpreter for one page.
#[derive(Debug, Default)]
pub struct FigureInterpreter {
    state: InterpreterState,
    current: Rect,
    visible: bool,
    rects: Vec<Rect>,
}

impl FigureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a complete stream and return the merged figure rects.
    pub fn run<'a, I>(operators: I) -> Result<Vec<Rect>, InterpreterError>
    where
        I: IntoIterator<Item = &'a OperatorRecord>,
    {
        let mut interpreter = Self::new();
        for (index, op) in operators.into_iter().enumerate() {
            interpreter.process(index, op)?;
        }
        Ok(interpreter.finish())
    }

    /// Apply one operator. `index` is the record's position, used in errors.
    pub fn process(&mut self, index: usize, op: &OperatorRecord) -> Result<(), InterpreterError> {
        if let Some(expected) = op.opcode.arity() {
            if op.args.len() != expected {
                return Err(InterpreterError::ArityMismatch {
                    opcode: op.opcode.code(),
                    expected,
                    actual: op.args.len(),
                });
            }
        }

        let args = &op.args;
        match op.opcode {
            Opcode::Save => self.state.save_state(),
            Opcode::Restore => {
                if !self.state.restore_state() {
                    debug!(index, "unbalanced restore, CTM reset to identity");
                }
            }
            Opcode::Transform => {
                self.state
                    .concat_matrix(args[0], args[1], args[2], args[3], args[4], args[5]);
            }
            Opcode::MoveTo => {
                if self.visible && !self.current.is_empty() {
                    self.emit();
                }
                self.enclose(args[0], args[1]);
            }
            Opcode::LineTo | Opcode::CurveTo | Opcode::CurveTo2 | Opcode::CurveTo3 => {
                if let Some(i) = op.opcode.point_offset() {
                    self.enclose(args[i], args[i + 1]);
                }
            }
            Opcode::Rectangle => {
                let rect = Rect::new(args[0], args[0] + args[2], args[1], args[1] + args[3]);
                for corner in rect.coords() {
                    self.enclose(corner.x, corner.y);
                }
            }
            Opcode::ClosePath | Opcode::EndPath => self.emit(),
            Opcode::Stroke
            | Opcode::Fill
            | Opcode::EoFill
            | Opcode::FillStroke
            | Opcode::EoFillStroke => self.visible = true,
            Opcode::CloseStroke | Opcode::CloseFillStroke | Opcode::CloseEoFillStroke => {
                self.visible = true;
                self.emit();
            }
            Opcode::PaintImageXObject => {
                if self.visible {
                    self.emit();
                }
                for corner in Rect::new(0.0, 1.0, 0.0, 1.0).coords() {
                    self.enclose(corner.x, corner.y);
                }
                self.visible = true;
                self.emit();
            }
            Opcode::ConstructPath => return Err(InterpreterError::UnflattenedPath { index }),
            Opcode::Text(code) | Opcode::Other(code) => {
                if let [x, y] = args.as_slice() {
                    trace!(index, code, "best-effort point from unregistered opcode");
                    self.enclose(*x, *y);
                }
            }
        }
        Ok(())
    }

    /// Flush a path left open at end of stream and return the merged rects.
    pub fn finish(mut self) -> Vec<Rect> {
        if self.visible && !self.current.is_empty() {
            self.emit();
        }
        debug!(figures = self.rects.len(), "operator stream interpreted");
        self.rects
    }

    fn enclose(&mut self, x: f64, y: f64) {
        let p = self.state.transform_point(x, y);
        self.current.enclose(p);
    }

    /// Collect the current path if it was painted and has area, then reset it.
    fn emit(&mut self) {
        let rect = std::mem::take(&mut self.current);
        let visible = std::mem::replace(&mut self.visible, false);
        if !visible || rect.is_empty() {
            return;
        }
        if !rect.has_area() {
            trace!(?rect, "dropping degenerate path");
            return;
        }
        let before = self.rects.len();
        push_merged(&mut self.rects, rect);
        trace!(?rect, merged = before + 1 - self.rects.len(), "figure path emitted");
    }
}

/// Lazy sequence of figure rects for one page.
///
/// The overlap merge can rewrite any earlier rect, so the stream is
/// interpreted in full when the sequence is created; iteration then yields
/// the finished, pairwise-disjoint rects in emission order.
#[derive(Debug, Clone)]
pub struct Figures {
    inner: std::vec::IntoIter<Rect>,
}

impl Figures {
    pub fn new(rects: Vec<Rect>) -> Self {
        Self {
            inner: rects.into_iter(),
        }
    }
}

impl Iterator for Figures {
    type Item = Rect;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Figures {}

/// Interpret `operators` and return the page's figures.
pub fn iterate_figures(operators: &[OperatorRecord]) -> Result<Figures, InterpreterError> {
    FigureInterpreter::run(operators).map(Figures::new)
}
