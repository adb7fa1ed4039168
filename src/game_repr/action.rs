use std::fmt;

/// Orientation of an edge.
///
/// `Row` edges are horizontal (`n` rows of `n - 1`), `Col` edges are vertical
/// (`n - 1` rows of `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    Row,
    Col,
}

/// One edge claim. Positions are zero-based `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    kind: EdgeKind,
    x: usize,
    y: usize,
}

impl Action {
    #[inline]
    pub const fn new(kind: EdgeKind, x: usize, y: usize) -> Self {
        Self { kind, x, y }
    }

    #[inline]
    pub const fn row(x: usize, y: usize) -> Self {
        Self::new(EdgeKind::Row, x, y)
    }

    #[inline]
    pub const fn col(x: usize, y: usize) -> Self {
        Self::new(EdgeKind::Col, x, y)
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x(), self.y())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            EdgeKind::Row => "row",
            EdgeKind::Col => "col",
        };
        write!(f, "{}({}, {})", kind, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Action::row(1, 2), Action::new(EdgeKind::Row, 1, 2));
        assert_ne!(Action::row(1, 2), Action::col(1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::col(3, 0).to_string(), "col(3, 0)");
    }

    #[test]
    fn test_large_coordinates_are_kept() {
        let action = Action::row(256, 0);
        assert_eq!(action.position(), (256, 0));
        assert_ne!(action, Action::row(0, 0));
        assert_eq!(action.to_string(), "row(256, 0)");
    }
}
