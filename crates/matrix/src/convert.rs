//! Row-accessor to matrix conversion.

use crate::{DependencyMatrix, MatrixError};
use tracing::trace;

/// Convert a `rows x cols` relation given by `row_at` and hand it to `sink`.
///
/// The sink is invoked exactly once with the finished matrix, or not at all
/// when the relation is absent (see [`DependencyMatrix::from_rows`]).
/// Returns whether the sink was invoked. A relation too large to index is
/// an error and never reaches the sink.
pub fn convert<F, R, S, E>(rows: usize, cols: usize, row_at: F, sink: S) -> Result<bool, E>
where
    F: FnMut(usize) -> Option<R>,
    R: AsRef<[i32]>,
    S: FnOnce(DependencyMatrix) -> Result<(), E>,
    E: From<MatrixError>,
{
    match DependencyMatrix::from_rows(rows, cols, row_at)? {
        Some(matrix) => {
            trace!(rows, cols, set = matrix.count_ones(), "Converted relation");
            sink(matrix)?;
            Ok(true)
        }
        None => {
            trace!(rows, cols, "Relation absent");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::cell::Cell;
    use tracing_test::traced_test;

    #[derive(Debug, PartialEq)]
    enum SinkError {
        Refused,
        Matrix(MatrixError),
    }

    impl From<MatrixError> for SinkError {
        fn from(e: MatrixError) -> Self {
            SinkError::Matrix(e)
        }
    }

    fn collect(rows: usize, cols: usize, source: &[Option<Vec<i32>>]) -> Vec<DependencyMatrix> {
        let mut out = Vec::new();
        convert(
            rows,
            cols,
            |i| source[i].clone(),
            |m| {
                out.push(m);
                Ok::<_, SinkError>(())
            },
        )
        .unwrap();
        out
    }

    #[traced_test]
    #[test]
    fn test_absent_first_row_never_sinks() {
        let source = vec![None, Some(vec![1, 1]), Some(vec![0, 1])];
        assert!(collect(3, 2, &source).is_empty());
    }

    #[test]
    fn test_empty_dimensions_never_query_rows() {
        let queries = Cell::new(0);
        for (rows, cols) in [(0, 4), (4, 0), (0, 0)] {
            let invoked = convert(
                rows,
                cols,
                |_| {
                    queries.set(queries.get() + 1);
                    Some(vec![1; 4])
                },
                |_| Ok::<_, SinkError>(()),
            )
            .unwrap();
            assert!(!invoked);
        }
        assert_eq!(queries.get(), 0);
    }

    #[test]
    fn test_all_false_relation_is_sent() {
        let source = vec![Some(vec![0, 0]), Some(vec![0, 0])];
        let out = collect(2, 2, &source);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_empty());
    }

    #[test]
    fn test_sink_error_propagates() {
        let result = convert(1, 1, |_| Some([1]), |_| Err(SinkError::Refused));
        assert_eq!(result, Err(SinkError::Refused));
    }

    #[test]
    fn test_oversized_relation_is_an_error() {
        let queries = Cell::new(0);
        let sinks = Cell::new(0);
        let result = convert(
            usize::MAX,
            2,
            |_| {
                queries.set(queries.get() + 1);
                Some([1, 1])
            },
            |_| {
                sinks.set(sinks.get() + 1);
                Ok::<_, SinkError>(())
            },
        );

        assert_eq!(
            result,
            Err(SinkError::Matrix(MatrixError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }))
        );
        assert_eq!((queries.get(), sinks.get()), (0, 0));
    }

    #[test]
    fn test_random_relations_match_source() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        for _ in 0..64 {
            let rows = rng.gen_range(1..8);
            let cols = rng.gen_range(1..8);
            let source: Vec<Option<Vec<i32>>> = (0..rows)
                .map(|i| {
                    if i > 0 && rng.gen_bool(0.25) {
                        None
                    } else {
                        Some((0..cols).map(|_| rng.gen_range(-2..3)).collect())
                    }
                })
                .collect();

            let out = collect(rows, cols, &source);
            assert_eq!(out.len(), 1);
            let m = &out[0];
            assert_eq!((m.rows(), m.cols()), (rows, cols));

            for (i, row) in source.iter().enumerate() {
                for j in 0..cols {
                    let expected = row.as_ref().is_some_and(|r| r[j] != 0);
                    assert_eq!(m.is_set(i, j), expected, "entry ({i}, {j})");
                }
            }
        }
    }
}
