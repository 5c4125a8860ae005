//! Tensor statistics accumulator.
//!
//! Consumes the record stream from [`crate::reader`] and derives the
//! order, non-zero count, per-dimension maxima and density of the
//! tensor in a single pass. Any of the three scalar facts can be
//! supplied up front through [`StatOverrides`]; a field that is
//! supplied is never recomputed, and when all three are supplied the
//! file is not opened at all.

use std::path::Path;

use crate::error::{FrosttError, Result};
use crate::reader::{Record, TnsReader};

/// Externally-known facts about a tensor, each optional.
///
/// Replaces ad-hoc flag plumbing with one immutable configuration
/// value handed to the accumulator. `dims` callers typically also set
/// `order` to the dimension count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatOverrides {
    /// Tensor order (number of index fields per line).
    pub order: Option<usize>,
    /// Number of non-zero entries.
    pub nonzeros: Option<u64>,
    /// Dimension sizes.
    pub dims: Option<Vec<u64>>,
}

impl StatOverrides {
    /// True when every field is supplied and a file scan is unnecessary.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.order.is_some() && self.nonzeros.is_some() && self.dims.is_some()
    }
}

/// Finalized summary statistics for one tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorStats {
    /// Number of dimensions.
    pub order: usize,
    /// Number of stored non-zero entries.
    pub nonzeros: u64,
    /// Size of each dimension (length = `order` when derived from data).
    pub dims: Vec<u64>,
    /// `nonzeros / product(dims)`.
    pub density: f64,
}

/// Incremental accumulator over [`Record`]s.
///
/// The first record fixes the order (unless overridden); every later
/// record must agree with it when dimensions are being derived, since
/// the per-dimension maxima are positional. Overridden fields are
/// carried through untouched while the remaining ones are patched in
/// from the stream.
#[derive(Debug)]
pub struct StatsAccumulator {
    overrides: StatOverrides,
    order: Option<usize>,
    nonzeros: u64,
    dims: Vec<u64>,
}

impl StatsAccumulator {
    /// Create an accumulator seeded with the supplied overrides.
    #[must_use]
    pub fn new(overrides: StatOverrides) -> Self {
        let order = overrides.order;
        let nonzeros = overrides.nonzeros.unwrap_or(0);
        let dims = overrides.dims.clone().unwrap_or_default();
        Self {
            overrides,
            order,
            nonzeros,
            dims,
        }
    }

    /// Fold one record into the running statistics.
    ///
    /// # Errors
    ///
    /// [`FrosttError::OrderMismatch`] when dimensions are being derived
    /// and this record's token count disagrees with the established
    /// order; [`FrosttError::InvalidIndex`] when an index token is not
    /// an integer.
    pub fn consume(&mut self, record: &Record) -> Result<()> {
        let order = *self.order.get_or_insert_with(|| record.order());

        if self.overrides.dims.is_none() {
            if record.order() != order {
                return Err(FrosttError::OrderMismatch {
                    line: record.line,
                    expected: order,
                    found: record.order(),
                });
            }
            if self.dims.is_empty() {
                self.dims = vec![0; order];
            }
            for (m, token) in record.tokens[..order].iter().enumerate() {
                let index: u64 = token.parse().map_err(|_| FrosttError::InvalidIndex {
                    line: record.line,
                    token: token.clone(),
                })?;
                if self.dims[m] < index {
                    self.dims[m] = index;
                }
            }
        }

        if self.overrides.nonzeros.is_none() {
            self.nonzeros += 1;
        }

        Ok(())
    }

    /// Finish the pass and compute density.
    ///
    /// # Errors
    ///
    /// [`FrosttError::DegenerateInput`] when `dims` is empty or contains
    /// a zero, which would make the density a division by zero.
    pub fn finalize(self) -> Result<TensorStats> {
        if self.dims.is_empty() || self.dims.contains(&0) {
            return Err(FrosttError::DegenerateInput);
        }
        let cells: f64 = self.dims.iter().map(|&d| d as f64).product();
        let density = self.nonzeros as f64 / cells;
        Ok(TensorStats {
            order: self.order.unwrap_or(0),
            nonzeros: self.nonzeros,
            dims: self.dims,
            density,
        })
    }
}

/// Compute [`TensorStats`] for a tensor file, honoring overrides.
///
/// When every override is supplied the file is never opened (the path
/// may be absent or point at nothing). Otherwise the file is scanned
/// once, front to back, and only the missing fields are derived from
/// it.
///
/// # Errors
///
/// Propagates reader and accumulator errors; see [`StatsAccumulator`].
pub fn collect_stats(tensor: Option<&Path>, overrides: StatOverrides) -> Result<TensorStats> {
    let scan_needed = !overrides.is_complete();
    let mut acc = StatsAccumulator::new(overrides);

    if scan_needed {
        if let Some(path) = tensor {
            for record in TnsReader::open(path)? {
                acc.consume(&record?)?;
            }
        }
    }

    acc.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    fn rec(line: u64, text: &str) -> Record {
        Record {
            line,
            tokens: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    fn accumulate(lines: &[&str], overrides: StatOverrides) -> Result<TensorStats> {
        let mut acc = StatsAccumulator::new(overrides);
        for (i, text) in lines.iter().enumerate() {
            acc.consume(&rec(i as u64 + 1, text))?;
        }
        acc.finalize()
    }

    #[test]
    fn derives_all_fields_from_stream() {
        let stats = accumulate(
            &["1 1 5.0", "2 2 3.0", "3 3 1.0"],
            StatOverrides::default(),
        )
        .expect("stats");
        assert_eq!(stats.order, 2);
        assert_eq!(stats.nonzeros, 3);
        assert_eq!(stats.dims, vec![3, 3]);
        assert!((stats.density - 3.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn dims_track_per_position_maxima() {
        let stats = accumulate(
            &["5 1 1 1.0", "2 9 1 1.0", "1 1 4 1.0"],
            StatOverrides::default(),
        )
        .expect("stats");
        assert_eq!(stats.dims, vec![5, 9, 4]);
    }

    #[test]
    fn empty_stream_without_overrides_is_degenerate() {
        let err = accumulate(&[], StatOverrides::default()).unwrap_err();
        assert!(matches!(err, FrosttError::DegenerateInput));
    }

    #[test]
    fn non_integer_index_is_fatal() {
        let err = accumulate(&["a 1 5.0"], StatOverrides::default()).unwrap_err();
        assert!(matches!(err, FrosttError::InvalidIndex { line: 1, .. }));
    }

    #[test]
    fn value_token_is_not_parsed_as_index() {
        // Only index positions are parsed; a non-numeric value is fine.
        let stats = accumulate(&["1 1 nan"], StatOverrides::default()).expect("stats");
        assert_eq!(stats.order, 2);
        assert_eq!(stats.dims, vec![1, 1]);
    }

    #[test]
    fn order_mismatch_is_fatal_when_deriving_dims() {
        let err = accumulate(&["1 1 5.0", "2 2 2 3.0"], StatOverrides::default()).unwrap_err();
        assert!(matches!(
            err,
            FrosttError::OrderMismatch {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn order_not_revalidated_when_dims_overridden() {
        // With dims fixed, token counts of later lines no longer matter:
        // the scan only counts non-zeros.
        let overrides = StatOverrides {
            order: None,
            nonzeros: None,
            dims: Some(vec![10, 10]),
        };
        let stats = accumulate(&["1 1 5.0", "2 2 2 3.0"], overrides).expect("stats");
        assert_eq!(stats.order, 2); // from the first record
        assert_eq!(stats.nonzeros, 2);
        assert_eq!(stats.dims, vec![10, 10]);
    }

    #[test]
    fn partial_overrides_patch_only_missing_fields() {
        let overrides = StatOverrides {
            order: None,
            nonzeros: Some(1000),
            dims: None,
        };
        let stats = accumulate(&["4 4 1.0", "2 8 1.0"], overrides).expect("stats");
        assert_eq!(stats.nonzeros, 1000);
        assert_eq!(stats.dims, vec![4, 8]);
        assert!((stats.density - 1000.0 / 32.0).abs() < 1e-12);
    }

    #[test]
    fn complete_overrides_skip_the_file_entirely() {
        let overrides = StatOverrides {
            order: Some(3),
            nonzeros: Some(100),
            dims: Some(vec![10, 10, 10]),
        };
        let stats = collect_stats(Some(Path::new("/no/such/tensor.tns")), overrides)
            .expect("no file access needed");
        assert_eq!(stats.order, 3);
        assert_eq!(stats.nonzeros, 100);
        assert!((stats.density - 0.1).abs() < 1e-12);
    }

    #[test]
    fn incomplete_overrides_do_open_the_file() {
        let overrides = StatOverrides {
            order: Some(3),
            nonzeros: None,
            dims: Some(vec![10, 10, 10]),
        };
        let err = collect_stats(Some(Path::new("/no/such/tensor.tns")), overrides).unwrap_err();
        assert!(matches!(err, FrosttError::Io(_)));
    }

    #[test]
    fn collect_stats_reads_a_real_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".tns")
            .tempfile()
            .expect("temp file");
        file.write_all(b"1 1 5.0\n2 2 3.0\n# comment\n3 3 1.0\n")
            .expect("write");
        let stats =
            collect_stats(Some(file.path()), StatOverrides::default()).expect("stats");
        assert_eq!(stats.order, 2);
        assert_eq!(stats.nonzeros, 3);
        assert_eq!(stats.dims, vec![3, 3]);
    }

    #[test]
    fn zero_dimension_is_degenerate() {
        let overrides = StatOverrides {
            order: Some(2),
            nonzeros: Some(5),
            dims: Some(vec![4, 0]),
        };
        let err = collect_stats(None, overrides).unwrap_err();
        assert!(matches!(err, FrosttError::DegenerateInput));
    }

    proptest! {
        #[test]
        fn density_is_nnz_over_cell_count(
            dims in proptest::collection::vec(1u64..64, 1..5),
            nnz in 0u64..10_000,
        ) {
            let overrides = StatOverrides {
                order: Some(dims.len()),
                nonzeros: Some(nnz),
                dims: Some(dims.clone()),
            };
            let stats = collect_stats(None, overrides).expect("stats");
            let cells: f64 = dims.iter().map(|&d| d as f64).product();
            prop_assert!((stats.density - nnz as f64 / cells).abs() < 1e-12);
        }
    }
}
