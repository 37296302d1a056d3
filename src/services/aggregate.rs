//! Aggregate calculator
//!
//! Derives per-category totals and the grand total from the current record
//! collection. Every call is a full rebuild; nothing is carried over from a
//! previous result.

use tracing::trace;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryAggregate, ExpenseRecord, Money};

/// Result of a full aggregate rebuild
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// One entry per counted category, in order of first appearance
    pub aggregates: Vec<CategoryAggregate>,

    /// Records whose amount reached no aggregate because the category cap was hit
    pub dropped_records: usize,

    /// Sum of every record amount, including dropped records
    pub grand_total: Money,
}

impl Aggregation {
    /// Sum of all aggregate totals
    ///
    /// Equals the grand total whenever `dropped_records` is zero.
    pub fn categorized_total(&self) -> Money {
        self.aggregates.iter().map(|a| a.total).sum()
    }
}

/// Running sums in i128 cents; no realistic record count can overflow them
#[derive(Default)]
struct Tally {
    categories: Vec<(String, i128)>,
    dropped_records: usize,
    total: i128,
}

/// Builds category aggregates from expense records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCalculator {
    max_categories: Option<usize>,
}

impl AggregateCalculator {
    /// Create a calculator that keeps at most `max_categories` aggregates
    ///
    /// `None` keeps every category.
    pub fn new(max_categories: Option<usize>) -> Self {
        Self { max_categories }
    }

    /// Create a calculator with no category cap
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Rebuild the category aggregates for `records`
    pub fn recompute(&self, records: &[ExpenseRecord]) -> Vec<CategoryAggregate> {
        self.recompute_detailed(records).aggregates
    }

    /// Rebuild the category aggregates and report how many records were dropped
    ///
    /// Records are visited in order. A record joins the first aggregate whose
    /// name matches its category exactly (case-sensitive). An unseen category
    /// opens a new aggregate while the cap allows; once the cap is reached the
    /// record's amount is left out of every category total. It still counts
    /// toward the grand total.
    ///
    /// Totals outside the representable range saturate; use
    /// [`AggregateCalculator::try_recompute`] to reject them instead.
    pub fn recompute_detailed(&self, records: &[ExpenseRecord]) -> Aggregation {
        let tally = self.tally(records);
        Aggregation {
            aggregates: tally
                .categories
                .into_iter()
                .map(|(name, cents)| CategoryAggregate::with_total(name, saturate(cents)))
                .collect(),
            dropped_records: tally.dropped_records,
            grand_total: saturate(tally.total),
        }
    }

    /// Rebuild the aggregates, failing if any total leaves the `Money` range
    ///
    /// # Errors
    ///
    /// `TotalOutOfRange` when a category total or the grand total does not fit.
    pub fn try_recompute<'a, I>(&self, records: I) -> LedgerResult<Aggregation>
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let tally = self.tally(records);
        let grand_total = Money::from_wide_cents(tally.total).ok_or(LedgerError::TotalOutOfRange)?;
        let aggregates = tally
            .categories
            .into_iter()
            .map(|(name, cents)| {
                Money::from_wide_cents(cents)
                    .map(|total| CategoryAggregate::with_total(name, total))
                    .ok_or(LedgerError::TotalOutOfRange)
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        Ok(Aggregation {
            aggregates,
            dropped_records: tally.dropped_records,
            grand_total,
        })
    }

    /// Sum of every record amount, independent of the category cap
    pub fn grand_total(records: &[ExpenseRecord]) -> Money {
        records.iter().map(|r| r.amount).sum()
    }

    fn tally<'a, I>(&self, records: I) -> Tally
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut tally = Tally::default();

        for (idx, record) in records.into_iter().enumerate() {
            let cents = i128::from(record.amount.cents());
            tally.total += cents;

            if let Some((_, total)) = tally
                .categories
                .iter_mut()
                .find(|(name, _)| *name == record.category)
            {
                *total += cents;
                continue;
            }

            if self
                .max_categories
                .is_some_and(|max| tally.categories.len() >= max)
            {
                trace!(
                    index = idx,
                    category = %record.category,
                    "category cap reached, amount left out of category totals"
                );
                tally.dropped_records += 1;
                continue;
            }

            tally.categories.push((record.category.clone(), cents));
        }

        tally
    }
}

fn saturate(cents: i128) -> Money {
    Money::from_wide_cents(cents).unwrap_or(if cents < 0 {
        Money::from_cents(i64::MIN)
    } else {
        Money::from_cents(i64::MAX)
    })
}

impl Default for AggregateCalculator {
    fn default() -> Self {
        Self::new(Some(crate::config::settings::DEFAULT_MAX_CATEGORIES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new("2025-03-21", category, Money::from_cents(cents), "")
    }

    #[test]
    fn test_empty_records() {
        let calc = AggregateCalculator::default();
        let aggregation = calc.recompute_detailed(&[]);
        assert!(aggregation.aggregates.is_empty());
        assert_eq!(aggregation.dropped_records, 0);
        assert!(AggregateCalculator::grand_total(&[]).is_zero());
    }

    #[test]
    fn test_groups_by_category_in_first_seen_order() {
        let records = vec![
            record("Food", 1050),
            record("Transport", 500),
            record("Food", 725),
        ];
        let aggregates = AggregateCalculator::default().recompute(&records);

        assert_eq!(
            aggregates,
            vec![
                CategoryAggregate::with_total("Food", Money::from_cents(1775)),
                CategoryAggregate::with_total("Transport", Money::from_cents(500)),
            ]
        );
        assert_eq!(
            AggregateCalculator::grand_total(&records),
            Money::from_cents(2275)
        );
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let records = vec![record("Food", 100), record("food", 200), record("Food ", 300)];
        let aggregates = AggregateCalculator::default().recompute(&records);
        assert_eq!(aggregates.len(), 3);
        assert_eq!(aggregates[0].total.cents(), 100);
        assert_eq!(aggregates[1].name, "food");
    }

    #[test]
    fn test_negative_amounts_net_out() {
        let records = vec![record("Refunds", 2000), record("Refunds", -2500)];
        let aggregates = AggregateCalculator::default().recompute(&records);
        assert_eq!(aggregates[0].total.cents(), -500);
    }

    #[test]
    fn test_category_cap_drops_new_categories_only() {
        let calc = AggregateCalculator::new(Some(2));
        let records = vec![
            record("A", 100),
            record("B", 200),
            record("C", 400),
            record("A", 800),
            record("D", 1600),
        ];

        let aggregation = calc.recompute_detailed(&records);
        let names: Vec<_> = aggregation.aggregates.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(aggregation.aggregates[0].total.cents(), 900);
        assert_eq!(aggregation.dropped_records, 2);
        assert_eq!(aggregation.categorized_total().cents(), 1100);
        assert_eq!(aggregation.grand_total.cents(), 3100);

        // Dropped records still count toward the grand total
        assert_eq!(AggregateCalculator::grand_total(&records).cents(), 3100);
    }

    #[test]
    fn test_unbounded_keeps_every_category() {
        let records: Vec<_> = (0..25).map(|i| record(&format!("Cat {}", i), 100)).collect();

        let capped = AggregateCalculator::default().recompute_detailed(&records);
        assert_eq!(capped.aggregates.len(), 10);
        assert_eq!(capped.dropped_records, 15);

        let unbounded = AggregateCalculator::unbounded().recompute_detailed(&records);
        assert_eq!(unbounded.aggregates.len(), 25);
        assert_eq!(unbounded.dropped_records, 0);
        assert_eq!(
            unbounded.categorized_total(),
            AggregateCalculator::grand_total(&records)
        );
    }

    #[test]
    fn test_try_recompute_rejects_out_of_range_totals() {
        let big = Money::parse("92233720368547758").unwrap();
        let records = vec![
            ExpenseRecord::new("d", "A", big, ""),
            ExpenseRecord::new("d", "A", big, ""),
        ];
        let calc = AggregateCalculator::default();

        assert_eq!(calc.try_recompute(&records), Err(LedgerError::TotalOutOfRange));

        let saturated = calc.recompute_detailed(&records);
        assert_eq!(saturated.grand_total, Money::from_cents(i64::MAX));
        assert_eq!(saturated.aggregates[0].total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_try_recompute_is_exact_when_overflow_cancels() {
        let big = Money::parse("92233720368547758").unwrap();
        let records = vec![
            ExpenseRecord::new("d", "A", big, ""),
            ExpenseRecord::new("d", "A", big, ""),
            ExpenseRecord::new("d", "A", -big, ""),
        ];

        let aggregation = AggregateCalculator::default().try_recompute(&records).unwrap();
        assert_eq!(aggregation.grand_total, big);
        assert_eq!(aggregation.aggregates[0].total, big);
    }

    #[test]
    fn test_recompute_is_stateless() {
        let calc = AggregateCalculator::default();
        let first = calc.recompute(&[record("Food", 100)]);
        let second = calc.recompute(&[record("Rent", 5000)]);
        assert_eq!(first[0].name, "Food");
        assert_eq!(second, vec![CategoryAggregate::with_total("Rent", Money::from_cents(5000))]);
    }
}
