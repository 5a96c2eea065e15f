//! Transform stack for the figure interpreter.
//!
//! Implements the subset of the graphics state model that affects geometry:
//! a stack of CTMs managed by `save`/`restore`, with `transform`
//! pre-multiplying the current matrix.

use alexandria_core::geometry::{Ctm, Point};

/// CTM plus the saved-state stack for one page's operator stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterpreterState {
    ctm: Ctm,
    stack: Vec<Ctm>,
}

impl InterpreterState {
    /// Create a state with identity CTM and an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current transformation matrix.
    pub fn ctm(&self) -> &Ctm {
        &self.ctm
    }

    /// Returns the current stack depth.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// `save`: push a copy of the current CTM.
    pub fn save_state(&mut self) {
        self.stack.push(self.ctm);
    }

    /// `restore`: pop the most recently saved CTM.
    ///
    /// On an empty stack the CTM falls back to identity and `false` is
    /// returned (unbalanced restore).
    pub fn restore_state(&mut self) -> bool {
        match self.stack.pop() {
            Some(saved) => {
                self.ctm = saved;
                true
            }
            None => {
                self.ctm = Ctm::identity();
                false
            }
        }
    }

    /// `transform`: CTM' = new_matrix × CTM.
    pub fn concat_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        let new_matrix = Ctm::new(a, b, c, d, e, f);
        self.ctm = new_matrix.concat(&self.ctm);
    }

    /// Map a user-space point to page space through the current CTM.
    pub fn transform_point(&self, x: f64, y: f64) -> Point {
        self.ctm.transform_point(Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_approx(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-10, "x: expected {x}, got {}", p.x);
        assert!((p.y - y).abs() < 1e-10, "y: expected {y}, got {}", p.y);
    }

    #[test]
    fn test_new_has_identity_ctm() {
        let state = InterpreterState::new();
        assert_eq!(*state.ctm(), Ctm::identity());
        assert_eq!(state.stack_depth(), 0);
    }

    #[test]
    fn test_save_restore_preserves_ctm() {
        let mut state = InterpreterState::new();
        state.save_state();
        state.concat_matrix(2.0, 0.0, 0.0, 2.0, 10.0, 20.0);
        assert_ne!(*state.ctm(), Ctm::identity());

        assert!(state.restore_state());
        assert_eq!(*state.ctm(), Ctm::identity());
    }

    #[test]
    fn test_nested_save_restore() {
        let mut state = InterpreterState::new();
        state.concat_matrix(1.0, 0.0, 0.0, 1.0, 5.0, 0.0);
        state.save_state();
        state.concat_matrix(1.0, 0.0, 0.0, 1.0, 0.0, 7.0);
        state.save_state();
        state.concat_matrix(3.0, 0.0, 0.0, 3.0, 0.0, 0.0);
        assert_eq!(state.stack_depth(), 2);

        state.restore_state();
        assert_point_approx(state.transform_point(0.0, 0.0), 5.0, 7.0);
        state.restore_state();
        assert_point_approx(state.transform_point(0.0, 0.0), 5.0, 0.0);
    }

    #[test]
    fn test_restore_on_empty_stack_falls_back_to_identity() {
        let mut state = InterpreterState::new();
        state.concat_matrix(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        assert!(!state.restore_state());
        assert_eq!(*state.ctm(), Ctm::identity());
    }

    #[test]
    fn test_concat_prepends() {
        // Translate first, then scale: the scale applies to user-space
        // coordinates before the earlier translation.
        let mut state = InterpreterState::new();
        state.concat_matrix(1.0, 0.0, 0.0, 1.0, 100.0, 200.0);
        state.concat_matrix(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        assert_point_approx(state.transform_point(10.0, 10.0), 120.0, 220.0);
    }
}
