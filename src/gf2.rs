//! GF(2) matrix rank kernel (C4) - Gaussian elimination mod 2 for square binary matrices.
//!
//! Used directly by the binary matrix rank test; the matrix size is generic over `M` so unit
//! tests can exercise the elimination logic on small matrices without constructing full
//! 32x32 blocks.

/// A square binary matrix of side `m`, stored one row per `Vec<u8>` element (`0` or `1` per
/// column). Rows are independent `Vec`s so row swaps are cheap pointer swaps.
#[derive(Clone, Debug)]
pub struct Gf2Matrix {
    rows: Vec<Vec<u8>>,
    m: usize,
}

impl Gf2Matrix {
    /// Builds a matrix from `m` rows of `m` bits each. Panics if any row has the wrong length -
    /// callers in this crate always slice exactly `m * m` bits before calling this.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let m = rows.len();
        assert!(rows.iter().all(|row| row.len() == m), "matrix must be square");

        Self { rows, m }
    }

    /// Builds an `m x m` matrix from a flat, row-major bit slice of length `m * m`.
    pub fn from_flat_bits(bits: &[u8], m: usize) -> Self {
        assert_eq!(bits.len(), m * m, "expected {} bits, got {}", m * m, bits.len());

        let rows = bits.chunks_exact(m).map(<[u8]>::to_vec).collect();
        Self::from_rows(rows)
    }

    fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    fn xor_row_into(&mut self, dest: usize, source: usize) {
        for col in 0..self.m {
            self.rows[dest][col] ^= self.rows[source][col];
        }
    }

    /// Computes the rank of this matrix over GF(2) via forward and backward Gaussian
    /// elimination, per NIST SP 800-22 Appendix F.1.
    ///
    /// Ties in pivot search are broken by taking the first non-zero row found below (forward
    /// pass) or above (backward pass) the pivot.
    pub fn rank(mut self) -> usize {
        // Forward elimination.
        for pivot in 0..self.m.saturating_sub(1) {
            self.ensure_pivot(pivot, (pivot + 1)..self.m);

            if self.get(pivot, pivot) == 1 {
                for row in (pivot + 1)..self.m {
                    if self.get(row, pivot) == 1 {
                        self.xor_row_into(row, pivot);
                    }
                }
            }
        }

        // Backward elimination.
        for pivot in (1..self.m).rev() {
            self.ensure_pivot(pivot, (0..pivot).rev());

            if self.get(pivot, pivot) == 1 {
                for row in (0..pivot).rev() {
                    if self.get(row, pivot) == 1 {
                        self.xor_row_into(row, pivot);
                    }
                }
            }
        }

        self.rows
            .iter()
            .filter(|row| row.iter().any(|&bit| bit == 1))
            .count()
    }

    /// If `self.rows[pivot][pivot]` is zero, searches `candidates` for the first row with a `1`
    /// in column `pivot` and swaps it into place. No-op if no such row exists.
    fn ensure_pivot(&mut self, pivot: usize, candidates: impl Iterator<Item = usize>) {
        if self.get(pivot, pivot) == 1 {
            return;
        }

        for candidate in candidates {
            if self.get(candidate, pivot) == 1 {
                self.rows.swap(pivot, candidate);
                break;
            }
        }
    }

    /// The matrix transposed - used only by the property test below, to check
    /// `rank(M) == rank(M^T)`.
    #[cfg(test)]
    fn transpose(&self) -> Self {
        let mut rows = vec![vec![0u8; self.m]; self.m];
        for r in 0..self.m {
            for c in 0..self.m {
                rows[c][r] = self.rows[r][c];
            }
        }
        Self::from_rows(rows)
    }
}
