use cmrace::dims::Dims;

use crate::helpers::box_center;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub start: Dims,
    pub end: Dims,
}

impl Rect {
    pub fn new(start: Dims, end: Dims) -> Self {
        Self { start, end }
    }

    pub fn sized_at(start: Dims, size: Dims) -> Self {
        Self::new(start, Dims(start.0 + size.0, start.1 + size.1) - Dims::ONE)
    }

    pub fn sized(size: Dims) -> Self {
        Self::sized_at(Dims::ZERO, size)
    }

    pub fn size(&self) -> Dims {
        Dims(self.end.0 - self.start.0, self.end.1 - self.start.1) + Dims::ONE
    }

    pub fn contains(&self, pos: Dims) -> bool {
        (self.start.0..=self.end.0).contains(&pos.0) && (self.start.1..=self.end.1).contains(&pos.1)
    }

    pub fn centered(&self, inner: Dims) -> Self {
        let pos = box_center(self.start, self.end, inner);
        Self::sized_at(pos, inner)
    }

    pub fn centered_x(&self, inner: Dims) -> Self {
        let pos = Dims(self.start.0 + (self.size().0 - inner.0) / 2, self.start.1);
        Self::sized_at(pos, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dims, Rect};

    #[test]
    fn sized_at_is_inclusive() {
        let rect = Rect::sized_at(Dims(2, 2), Dims(3, 1));
        assert_eq!(rect.end, Dims(4, 2));
        assert_eq!(rect.size(), Dims(3, 1));
    }

    #[test]
    fn contains_checks_both_axes() {
        let rect = Rect::sized_at(Dims(1, 1), Dims(2, 2));
        assert!(rect.contains(Dims(1, 1)));
        assert!(rect.contains(Dims(2, 2)));
        assert!(!rect.contains(Dims(3, 2)));
        assert!(!rect.contains(Dims(0, 1)));
    }

    #[test]
    fn centered_x_keeps_row() {
        let rect = Rect::sized(Dims(10, 4)).centered_x(Dims(4, 1));
        assert_eq!(rect.start, Dims(3, 0));
    }
}
