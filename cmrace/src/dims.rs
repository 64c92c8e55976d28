use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Screen or board coordinate pair, `(x, y)` aka `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// `|Δx| + |Δy|`, the walking distance without diagonals.
    pub fn manhattan(self, other: Dims) -> i32 {
        (self.0 - other.0).abs() + (self.1 - other.1).abs()
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl MulAssign<i32> for Dims {
    fn mul_assign(&mut self, other: i32) {
        self.0 *= other;
        self.1 *= other;
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

impl From<(u16, u16)> for Dims {
    fn from(tuple: (u16, u16)) -> Self {
        Dims(tuple.0 as i32, tuple.1 as i32)
    }
}

impl From<Dims> for (u16, u16) {
    fn from(val: Dims) -> Self {
        (val.0 as u16, val.1 as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn manhattan_ignores_sign() {
        assert_eq!(Dims(1, 1).manhattan(Dims(4, 3)), 5);
        assert_eq!(Dims(4, 3).manhattan(Dims(1, 1)), 5);
        assert_eq!(Dims(2, 2).manhattan(Dims(2, 2)), 0);
    }

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(cells, [Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }
}
