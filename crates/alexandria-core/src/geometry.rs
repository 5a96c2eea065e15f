//! Page-space geometry: points, affine transforms, and axis-aligned rects.

/// A point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current transformation matrix `[a b c d e f]`.
///
/// Uses the row-vector convention of PDF content streams: a point maps to
/// `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ctm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Ctm {
    fn default() -> Self {
        Self::identity()
    }
}

impl Ctm {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Build a matrix from a six-element array.
    pub fn from_array(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Matrix product `self × other`.
    ///
    /// The result applies `self` first and `other` second, so
    /// `incoming.concat(&ctm)` is the `cm` update rule.
    pub fn concat(&self, other: &Ctm) -> Ctm {
        Ctm {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Whether the linear part is free of rotation and skew, within `tolerance`.
    pub fn is_axis_aligned(&self, tolerance: f64) -> bool {
        self.b.abs() <= tolerance && self.c.abs() <= tolerance
    }
}

/// Axis-aligned rectangle `{x1, x2, y1, y2}` with `x1 <= x2` and `y1 <= y2`.
///
/// A rect starts out empty (no point enclosed yet); [`Rect::enclose`] and
/// [`Rect::merge`] grow it. An empty rect reports `is_empty() == true` and has
/// negative width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl Default for Rect {
    fn default() -> Self {
        Self::empty()
    }
}

impl Rect {
    /// Create a rect from its edges. Edges are reordered so `x1 <= x2`, `y1 <= y2`.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            x2: x1.max(x2),
            y1: y1.min(y2),
            y2: y1.max(y2),
        }
    }

    /// A rect that encloses nothing.
    pub fn empty() -> Self {
        Self {
            x1: f64::INFINITY,
            x2: f64::NEG_INFINITY,
            y1: f64::INFINITY,
            y2: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Whether both width and height are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// The four corners, counter-clockwise from `(x1, y1)`.
    pub fn coords(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    /// Grow to include `p`.
    pub fn enclose(&mut self, p: Point) {
        self.x1 = self.x1.min(p.x);
        self.x2 = self.x2.max(p.x);
        self.y1 = self.y1.min(p.y);
        self.y2 = self.y2.max(p.y);
    }

    /// Grow to include every corner of `other`. Merging an empty rect is a no-op.
    pub fn merge(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        for corner in other.coords() {
            self.enclose(corner);
        }
    }

    /// Strict overlap: rects that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && self.x2 > other.x1 && self.y1 < other.y2 && self.y2 > other.y1
    }
}

/// Add `rect` to a set of pairwise-disjoint rects, merging until no pair overlaps.
///
/// Only the incoming rect can overlap anything, so it is checked against the
/// rest and absorbs the first hit; the grown rect is then re-checked because
/// growing it may create new overlaps. The survivor of each merge keeps the
/// lower index.
pub fn push_merged(rects: &mut Vec<Rect>, rect: Rect) {
    rects.push(rect);
    let mut grown = rects.len() - 1;
    while let Some(k) = first_overlapping(rects, grown) {
        let (keep, drop) = if k < grown { (k, grown) } else { (grown, k) };
        let other = rects.remove(drop);
        rects[keep].merge(&other);
        grown = keep;
    }
}

fn first_overlapping(rects: &[Rect], index: usize) -> Option<usize> {
    let target = &rects[index];
    rects
        .iter()
        .enumerate()
        .position(|(k, r)| k != index && r.overlaps(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_approx(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-10, "x: expected {x}, got {}", p.x);
        assert!((p.y - y).abs() < 1e-10, "y: expected {y}, got {}", p.y);
    }

    #[test]
    fn test_rect_new_orders_edges() {
        let r = Rect::new(30.0, 10.0, 40.0, 20.0);
        assert_eq!(r, Rect { x1: 10.0, x2: 30.0, y1: 20.0, y2: 40.0 });
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn test_empty_rect() {
        let r = Rect::empty();
        assert!(r.is_empty());
        assert!(!r.has_area());
    }

    #[test]
    fn test_enclose_single_point_is_degenerate() {
        let mut r = Rect::empty();
        r.enclose(Point::new(5.0, 5.0));
        assert!(!r.is_empty());
        assert_eq!(r.width(), 0.0);
        assert!(!r.has_area());
    }

    #[test]
    fn test_enclose_grows() {
        let mut r = Rect::empty();
        r.enclose(Point::new(5.0, 8.0));
        r.enclose(Point::new(1.0, 12.0));
        assert_eq!(r, Rect::new(1.0, 5.0, 8.0, 12.0));
    }

    #[test]
    fn test_coords() {
        let r = Rect::new(0.0, 2.0, 0.0, 1.0);
        assert_eq!(
            r.coords(),
            [
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = Rect::new(0.0, 10.0, 0.0, 10.0);
        let b = Rect::new(5.0, 20.0, -5.0, 8.0);

        let mut ab = a;
        ab.merge(&b);
        let mut ba = b;
        ba.merge(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab, Rect::new(0.0, 20.0, -5.0, 10.0));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let a = Rect::new(0.0, 10.0, 0.0, 10.0);
        let b = Rect::new(5.0, 20.0, 5.0, 20.0);
        let mut once = a;
        once.merge(&b);
        let mut twice = once;
        twice.merge(&b);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut a = Rect::new(0.0, 1.0, 0.0, 1.0);
        a.merge(&Rect::empty());
        assert_eq!(a, Rect::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_overlaps_is_strict() {
        let a = Rect::new(0.0, 10.0, 0.0, 10.0);
        let touching = Rect::new(10.0, 20.0, 0.0, 10.0);
        let crossing = Rect::new(9.0, 20.0, 9.0, 20.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }

    #[test]
    fn test_push_merged_single_overlap() {
        let mut rects = vec![
            Rect::new(0.0, 10.0, 0.0, 10.0),
            Rect::new(50.0, 60.0, 50.0, 60.0),
        ];
        push_merged(&mut rects, Rect::new(5.0, 15.0, 5.0, 15.0));
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 15.0, 0.0, 15.0),
                Rect::new(50.0, 60.0, 50.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_push_merged_cascades() {
        // The bridge joins the first two rects, and the grown rect then
        // swallows the third one.
        let mut rects = vec![
            Rect::new(0.0, 10.0, 0.0, 10.0),
            Rect::new(20.0, 30.0, 0.0, 10.0),
            Rect::new(12.0, 18.0, 8.0, 20.0),
        ];
        push_merged(&mut rects, Rect::new(5.0, 25.0, 4.0, 6.0));
        assert_eq!(rects, vec![Rect::new(0.0, 30.0, 0.0, 20.0)]);
    }

    #[test]
    fn test_push_merged_keeps_set_disjoint() {
        let mut rects = Vec::new();
        for i in 0..10 {
            let x = (i * 7 % 25) as f64;
            push_merged(&mut rects, Rect::new(x, x + 6.0, x / 2.0, x / 2.0 + 4.0));
        }
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_push_merged_survivor_keeps_lower_index() {
        let mut rects = vec![
            Rect::new(0.0, 1.0, 0.0, 1.0),
            Rect::new(10.0, 12.0, 0.0, 2.0),
            Rect::new(20.0, 21.0, 0.0, 1.0),
        ];
        push_merged(&mut rects, Rect::new(11.0, 20.5, 0.5, 0.8));
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 1.0, 0.0, 1.0),
                Rect::new(10.0, 21.0, 0.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_push_merged_many_disjoint_rects_is_fast() {
        let start = std::time::Instant::now();
        let mut rects = Vec::new();
        for i in 0..3000 {
            let (x, y) = ((i % 100) as f64 * 2.0, (i / 100) as f64 * 2.0);
            push_merged(&mut rects, Rect::new(x, x + 1.0, y, y + 1.0));
        }
        assert_eq!(rects.len(), 3000);
        assert!(
            start.elapsed() < std::time::Duration::from_secs(1),
            "took {:?}",
            start.elapsed()
        );
    }

    #[test]
    fn test_ctm_identity_transform() {
        let p = Ctm::identity().transform_point(Point::new(3.0, 4.0));
        assert_point_approx(p, 3.0, 4.0);
    }

    #[test]
    fn test_ctm_translate_then_scale() {
        // cm 1 0 0 1 10 20, then cm 2 0 0 2 0 0: the second matrix applies
        // to points first.
        let translate = Ctm::new(1.0, 0.0, 0.0, 1.0, 10.0, 20.0);
        let scale = Ctm::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        let ctm = scale.concat(&translate);
        assert_point_approx(ctm.transform_point(Point::new(1.0, 1.0)), 12.0, 22.0);
    }

    #[test]
    fn test_ctm_rotation() {
        let rot = Ctm::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
        assert_point_approx(rot.transform_point(Point::new(1.0, 0.0)), 0.0, 1.0);
        assert!(!rot.is_axis_aligned(1e-6));
        assert!(Ctm::new(2.0, 0.0, 0.0, 3.0, 1.0, 1.0).is_axis_aligned(1e-6));
    }

    #[test]
    fn test_ctm_array_round_trip() {
        let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(Ctm::from_array(m).to_array(), m);
    }
}
