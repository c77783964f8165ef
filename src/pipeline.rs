//! Full transform: generate, flatten, exchange, format
use crate::descriptor::{build_descriptor, BlockDescriptor};
use crate::error::Result;
use crate::flatten::flatten;
use crate::format::{format_transform, DisplayGrid};
use crate::source::{MatrixSource, RandomSource};
use crate::transport::Transport;
use crate::types::Value;
use ndarray::Array2;

/// Settings of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed of the random matrix, entropy if `None`
    pub seed: Option<u64>,
}

impl TransformConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random matrix source honoring [`TransformConfig::seed`]
    pub fn source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        }
    }
}

/// Everything produced by one run
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub matrix: Array2<Value>,
    pub descriptor: BlockDescriptor,
    pub received: Vec<Value>,
    pub grid: DisplayGrid,
}

/// Run the transform of a `rows` x `cols` matrix drawn from `source`
///
/// The descriptor is built before the matrix is generated, so invalid
/// dimensions fail without any further work.
pub fn run<M, T>(config: &TransformConfig, source: &mut M, transport: &T) -> Result<TransformReport>
where
    M: MatrixSource + ?Sized,
    T: Transport + ?Sized,
{
    let (rows, cols) = (config.rows, config.cols);
    let descriptor = build_descriptor(rows, cols)?;
    let matrix = source.generate(rows, cols)?;
    let flat = flatten(&matrix);
    let received = transport.exchange(&flat, &descriptor)?;
    let grid = format_transform(&received, rows, cols)?;
    tracing::info!(
        rows,
        cols,
        blocks = descriptor.len(),
        selected = grid.selected_count(),
        transport = transport.name(),
        "transform finished"
    );
    Ok(TransformReport {
        matrix,
        descriptor,
        received,
        grid,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::FixedSource;
    use crate::transport::LocalTransport;
    use crate::TransformError;
    use ndarray::array;

    #[test]
    fn test_run_fixed_matrix() {
        let matrix = array![[11, 12, 13], [21, 22, 23], [31, 32, 33]];
        let mut source = FixedSource::new(matrix.clone());
        let report = run(&TransformConfig::new(3, 3), &mut source, &LocalTransport).unwrap();
        assert_eq!(report.matrix, matrix);
        assert_eq!(report.received, vec![11, 12, 13, 22, 23, 33]);
        assert_eq!(report.grid.to_string(), "11 12 13\n*  22 23\n*  *  33\n");
    }

    #[test]
    fn test_run_seeded_is_reproducible() {
        let config = TransformConfig::new(4, 6).with_seed(3);
        let a = run(&config, &mut config.source(), &LocalTransport).unwrap();
        let b = run(&config, &mut config.source(), &LocalTransport).unwrap();
        assert_eq!(a.matrix, b.matrix);
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_run_oversized_shape() {
        let config = TransformConfig::new(usize::MAX, 2).with_seed(1);
        let result = run(&config, &mut config.source(), &LocalTransport);
        assert!(matches!(
            result,
            Err(TransformError::InvalidDimension { cols: 2, .. })
        ));
    }

    #[test]
    fn test_run_invalid_dimension() {
        let mut source = FixedSource::new(array![[1]]);
        let result = run(&TransformConfig::new(0, 1), &mut source, &LocalTransport);
        assert!(matches!(
            result,
            Err(TransformError::InvalidDimension { rows: 0, cols: 1 })
        ));
    }
}
