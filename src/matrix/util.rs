use core::fmt::{self, Write as _};

use crate::{FixedMatrix, FixedVector};

// ── Constructors ────────────────────────────────────────────────────

impl<T, const N: usize> FixedMatrix<T, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use fixmat::FixedMatrix;
    /// let m: FixedMatrix<f64, 3> = FixedMatrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, FixedMatrix::identity());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self::new(core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))))
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use fixmat::FixedMatrix;
    /// let m = FixedMatrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> FixedMatrix<U, N>
    where
        T: Copy,
    {
        FixedMatrix::from_fn(|i, j| f(self.data[i][j]))
    }
}

impl<T: Copy, const N: usize> FixedMatrix<T, N> {
    /// Copy of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    pub fn row(&self, i: usize) -> FixedVector<T, N> {
        FixedVector::new(self.data[i])
    }

    /// Copy of column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= N`.
    pub fn col(&self, j: usize) -> FixedVector<T, N> {
        FixedVector::new(core::array::from_fn(|i| self.data[i][j]))
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Create a vector by calling `f(i)` for each element.
    pub fn from_fn(f: impl Fn(usize) -> T) -> Self {
        Self::new(core::array::from_fn(f))
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const N: usize> fmt::Display for FixedMatrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = [0usize; N];
        for i in 0..N {
            for j in 0..N {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self.data[i][j]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..N {
            write!(f, "│")?;
            for j in 0..N {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self.data[i][j], width = widths[j])?;
            }
            write!(f, "│")?;
            if i < N - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

/// `fmt::Write` sink that only counts bytes, for column widths.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.len();
        Ok(())
    }
}
