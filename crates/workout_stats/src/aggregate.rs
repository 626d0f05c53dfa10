//! Stateless aggregates over already-read sequences.

use crate::{StatsError, StatsResult, WorkoutRecord};

/// Number of items in a sequence of workout records or health entries.
pub fn count<T>(items: &[T]) -> usize {
    items.len()
}

/// Sum the numeric values stored under `field`.
///
/// Only the first record is checked for the column; values that do not parse as numbers
/// are skipped rather than treated as errors. An empty slice sums to zero.
pub fn sum_field(records: &[WorkoutRecord], field: &str) -> StatsResult<f64> {
    let Some(first) = records.first() else {
        return Ok(0.0);
    };
    if !first.contains(field) {
        return Err(StatsError::MissingColumn {
            field: field.to_string(),
            available: first.columns().map(str::to_owned).collect(),
        });
    }

    let mut total = 0.0;
    let mut skipped = 0usize;
    for (idx, record) in records.iter().enumerate() {
        match record.get(field).and_then(parse_number) {
            Some(v) => total += v,
            None => {
                skipped += 1;
                tracing::trace!(row = idx + 1, field, "skipping non-numeric value");
            }
        }
    }
    if skipped > 0 {
        tracing::debug!(field, skipped, "ignored non-numeric values");
    }
    Ok(total)
}

/// Parse a raw cell as a finite number. Surrounding whitespace is ignored; empty text,
/// non-numeric text, `NaN` and infinities yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(values: &[&str]) -> Vec<WorkoutRecord> {
        values
            .iter()
            .map(|v| {
                WorkoutRecord::from_pairs([("date", "2025-01-01"), ("type", "run"), ("minutes", *v)])
            })
            .collect()
    }

    #[test]
    fn parse_number_accepts_integers_decimals_and_padding() {
        assert_eq!(parse_number("30"), Some(30.0));
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("  45 "), Some(45.0));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
    }

    #[test]
    fn parse_number_rejects_empty_and_text() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("foo"), None);
        assert_eq!(parse_number("30min"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn sum_field_skips_non_numeric_values() {
        let rows = minutes(&["30", "foo", "20", ""]);
        assert_eq!(sum_field(&rows, "minutes").unwrap(), 50.0);
    }

    #[test]
    fn sum_field_on_empty_slice_is_zero_without_column_check() {
        assert_eq!(sum_field(&[], "whatever").unwrap(), 0.0);
    }

    #[test]
    fn sum_field_custom_column() {
        let rows = vec![
            WorkoutRecord::from_pairs([
                ("date", "2025-01-01"),
                ("type", "run"),
                ("duration", "30"),
            ]),
            WorkoutRecord::from_pairs([
                ("date", "2025-01-02"),
                ("type", "lift"),
                ("duration", "40"),
            ]),
        ];
        assert_eq!(sum_field(&rows, "duration").unwrap(), 70.0);
    }

    #[test]
    fn sum_field_missing_column_lists_first_record_columns() {
        let rows = minutes(&["30"]);
        let err = sum_field(&rows, "duration").unwrap_err();
        match err {
            StatsError::MissingColumn { field, available } => {
                assert_eq!(field, "duration");
                assert_eq!(available, vec!["date", "type", "minutes"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn count_is_length() {
        assert_eq!(count(&minutes(&["1", "2", "3"])), 3);
        assert_eq!(count::<serde_json::Value>(&[]), 0);
    }
}
