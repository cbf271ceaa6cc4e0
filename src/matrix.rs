use crate::*;

/// Square matrix indexed by (aggressor, opponent) position.
///
/// Row-major and zero-initialized, so the diagonal stays 0 unless written.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(into = "Vec<Vec<Utility>>")]
pub struct Matrix {
    n: usize,
    cells: Vec<Utility>,
}

impl Matrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.; n * n],
        }
    }
    /// Side length.
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    pub fn get(&self, a: Position, b: Position) -> Utility {
        self.cells[a * self.n + b]
    }
    pub fn set(&mut self, a: Position, b: Position, value: Utility) {
        self.cells[a * self.n + b] = value;
    }
    pub fn row(&self, a: Position) -> &[Utility] {
        &self.cells[a * self.n..(a + 1) * self.n]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Utility]> {
        self.cells.chunks(self.n.max(1))
    }
    /// Tab-delimited table with `IDx` row and column headers.
    pub fn table<F>(&self, ids: &[usize], cell: F) -> String
    where
        F: Fn(Utility) -> String,
    {
        let header = ids
            .iter()
            .map(|id| format!("ID{}", id))
            .collect::<Vec<String>>()
            .join("\t");
        let body = ids
            .iter()
            .zip(self.rows())
            .map(|(id, row)| {
                let cells = row.iter().map(|x| cell(*x)).collect::<Vec<String>>();
                format!("ID{}\t{}", id, cells.join("\t"))
            })
            .collect::<Vec<String>>()
            .join("\n");
        format!("\t{}\n{}", header, body)
    }
}

impl std::ops::Index<(Position, Position)> for Matrix {
    type Output = Utility;
    fn index(&self, (a, b): (Position, Position)) -> &Self::Output {
        &self.cells[a * self.n + b]
    }
}

impl From<Matrix> for Vec<Vec<Utility>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows().map(<[Utility]>::to_vec).collect()
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ids = (0..self.n).collect::<Vec<usize>>();
        write!(f, "{}", self.table(&ids, |x| format!("{:.2}", x)))
    }
}
