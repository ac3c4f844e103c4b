#![allow(dead_code)]

use std::sync::OnceLock;

use quickcheck::{Arbitrary, Gen};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Square 0/1 matrix with between 1 and 8 rows.
#[derive(Clone, Debug)]
pub struct Matrix(pub Vec<Vec<u8>>);

impl Matrix {
    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn ones(&self) -> usize {
        self.0.iter().flatten().filter(|&&c| c == 1).count()
    }

    /// Renders the matrix as one graph block of the adjacency-matrix grammar.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.size());
        for row in &self.0 {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }
}

impl Arbitrary for Matrix {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 8;
        let rows = (0..n)
            .map(|_| (0..n).map(|_| u8::from(bool::arbitrary(g))).collect())
            .collect();
        Self(rows)
    }
}
