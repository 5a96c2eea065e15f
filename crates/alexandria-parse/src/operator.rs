//! Operator records consumed by the figure interpreter.
//!
//! Opcodes follow the numbering of the rendering collaborator's operator
//! list (`OPS` in PDF.js). Only the opcodes the interpreter acts on get a
//! named variant; text operators and everything else are carried through
//! with their raw code.

use crate::error::InterpreterError;

/// A drawing opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Opcode {
    /// q - Save graphics state
    Save,
    /// Q - Restore graphics state
    Restore,
    /// cm - Concatenate matrix to the CTM
    Transform,
    /// m - Begin new subpath
    MoveTo,
    /// l - Append straight line segment
    LineTo,
    /// c - Cubic Bézier curve
    CurveTo,
    /// v - Cubic Bézier curve (initial point replicated)
    CurveTo2,
    /// y - Cubic Bézier curve (final point replicated)
    CurveTo3,
    /// h - Close subpath
    ClosePath,
    /// re - Append rectangle
    Rectangle,
    /// S - Stroke path
    Stroke,
    /// s - Close and stroke path
    CloseStroke,
    /// f - Fill path
    Fill,
    /// f* - Fill path (even-odd rule)
    EoFill,
    /// B - Fill and stroke path
    FillStroke,
    /// B* - Fill and stroke path (even-odd rule)
    EoFillStroke,
    /// b - Close, fill, and stroke path
    CloseFillStroke,
    /// b* - Close, fill, and stroke path (even-odd rule)
    CloseEoFillStroke,
    /// n - End path without painting
    EndPath,
    /// Do (image) - Paint an image XObject into the unit square
    PaintImageXObject,
    /// Composite path: packed sub-opcodes and arguments
    ConstructPath,
    /// Text object, state, positioning and showing operators (BT..d1)
    Text(u16),
    /// Any other operator
    Other(u16),
}

impl Opcode {
    /// Map a numeric opcode to its variant.
    pub fn from_code(code: u16) -> Self {
        match code {
            10 => Opcode::Save,
            11 => Opcode::Restore,
            12 => Opcode::Transform,
            13 => Opcode::MoveTo,
            14 => Opcode::LineTo,
            15 => Opcode::CurveTo,
            16 => Opcode::CurveTo2,
            17 => Opcode::CurveTo3,
            18 => Opcode::ClosePath,
            19 => Opcode::Rectangle,
            20 => Opcode::Stroke,
            21 => Opcode::CloseStroke,
            22 => Opcode::Fill,
            23 => Opcode::EoFill,
            24 => Opcode::FillStroke,
            25 => Opcode::EoFillStroke,
            26 => Opcode::CloseFillStroke,
            27 => Opcode::CloseEoFillStroke,
            28 => Opcode::EndPath,
            31..=49 => Opcode::Text(code),
            85 => Opcode::PaintImageXObject,
            91 => Opcode::ConstructPath,
            other => Opcode::Other(other),
        }
    }

    /// The numeric opcode.
    pub fn code(&self) -> u16 {
        match self {
            Opcode::Save => 10,
            Opcode::Restore => 11,
            Opcode::Transform => 12,
            Opcode::MoveTo => 13,
            Opcode::LineTo => 14,
            Opcode::CurveTo => 15,
            Opcode::CurveTo2 => 16,
            Opcode::CurveTo3 => 17,
            Opcode::ClosePath => 18,
            Opcode::Rectangle => 19,
            Opcode::Stroke => 20,
            Opcode::CloseStroke => 21,
            Opcode::Fill => 22,
            Opcode::EoFill => 23,
            Opcode::FillStroke => 24,
            Opcode::EoFillStroke => 25,
            Opcode::CloseFillStroke => 26,
            Opcode::CloseEoFillStroke => 27,
            Opcode::EndPath => 28,
            Opcode::PaintImageXObject => 85,
            Opcode::ConstructPath => 91,
            Opcode::Text(code) | Opcode::Other(code) => *code,
        }
    }

    /// Argument count of a path primitive, i.e. an opcode that may appear
    /// inside a construct-path payload.
    pub fn path_arity(&self) -> Option<usize> {
        match self {
            Opcode::MoveTo | Opcode::LineTo => Some(2),
            Opcode::CurveTo => Some(6),
            Opcode::CurveTo2 | Opcode::CurveTo3 => Some(4),
            Opcode::ClosePath => Some(0),
            Opcode::Rectangle => Some(4),
            _ => None,
        }
    }

    /// Fixed argument count for opcodes whose arguments the interpreter reads.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Opcode::Transform => Some(6),
            other => other.path_arity(),
        }
    }

    /// Offset of the `(x, y)` end point within the arguments of a segment opcode.
    pub fn point_offset(&self) -> Option<usize> {
        match self {
            Opcode::LineTo => Some(0),
            Opcode::CurveTo => Some(4),
            Opcode::CurveTo2 | Opcode::CurveTo3 => Some(2),
            _ => None,
        }
    }
}

/// One drawing instruction: an opcode and its numeric arguments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorRecord {
    pub opcode: Opcode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<f64>,
}

impl OperatorRecord {
    pub fn new(opcode: Opcode, args: Vec<f64>) -> Self {
        Self { opcode, args }
    }

    /// A record without arguments.
    pub fn op(opcode: Opcode) -> Self {
        Self::new(opcode, Vec::new())
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        Self::new(Opcode::MoveTo, vec![x, y])
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        Self::new(Opcode::LineTo, vec![x, y])
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Opcode::Rectangle, vec![x, y, width, height])
    }

    pub fn transform(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self::new(Opcode::Transform, vec![a, b, c, d, e, f])
    }
}

/// Expand a construct-path payload into primitive path records.
///
/// `ops` lists the sub-opcodes in order and `args` packs their arguments
/// back to back; each sub-opcode consumes exactly its
/// [`path_arity`](Opcode::path_arity). A sub-opcode that is not a path
/// primitive, or an argument list that runs out early, is an error.
/// Arguments left over after the last sub-opcode are ignored.
pub fn flatten_construct_path(
    ops: &[Opcode],
    args: &[f64],
) -> Result<Vec<OperatorRecord>, InterpreterError> {
    let mut records = Vec::with_capacity(ops.len());
    let mut offset = 0;

    for op in ops {
        let count = op
            .path_arity()
            .ok_or(InterpreterError::UnknownPathOperator { opcode: op.code() })?;
        let Some(slice) = args.get(offset..offset + count) else {
            return Err(InterpreterError::ArityMismatch {
                opcode: op.code(),
                expected: count,
                actual: args.len().saturating_sub(offset),
            });
        };
        records.push(OperatorRecord::new(*op, slice.to_vec()));
        offset += count;
    }

    Ok(records)
}
