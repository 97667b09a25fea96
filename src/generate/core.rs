//! Record generation from a validated parameter set.

use rand::{Rng, seq::SliceRandom};
use time::{Date, Duration};

use crate::record::{CurrencyCode, FALLBACK_EXPENSE_CATEGORY, TransactionRecord, VENDORS};

/// The parameters that drive one generation run.
///
/// Built from the raw form by [super::GeneratorForm::into_params], which
/// never fails; malformed form values are coerced to the defaults described
/// on each field.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    /// The number of simulated cardholders. Each gets its own employee id
    /// and card number.
    pub user_count: u32,
    /// The card type labels to sample from. May be empty, in which case
    /// records get an empty card type.
    pub card_types: Vec<String>,
    /// The currencies to sample from. Never empty.
    pub currencies: Vec<CurrencyCode>,
    /// Requested positive record counts per expense category, in form
    /// order. Categories with a zero count are not present.
    pub expense_counts: Vec<(String, u32)>,
    /// The requested number of refund-like records per cardholder.
    pub negative_count: u32,
    /// The first day transactions may fall on.
    pub from_date: Date,
    /// The last day transactions may fall on. Never before `from_date`.
    pub to_date: Date,
    /// The name printed on every simulated card.
    pub cardholder_name: String,
}

impl GeneratorParams {
    /// The number of positive records generated per cardholder.
    pub fn positive_count(&self) -> u32 {
        self.expense_counts.iter().map(|(_, count)| count).sum()
    }

    /// The number of negative records generated per cardholder.
    ///
    /// The requested count is clamped so that a batch always contains
    /// strictly fewer refunds than spends (or none at all, when there are
    /// no spends to refund).
    pub fn effective_negative_count(&self) -> u32 {
        let positive_count = self.positive_count();

        if self.negative_count >= positive_count {
            positive_count.saturating_sub(1)
        } else {
            self.negative_count
        }
    }

    /// The total number of records a generation run will produce.
    pub fn total_count(&self) -> usize {
        self.user_count as usize
            * (self.positive_count() + self.effective_negative_count()) as usize
    }
}

/// Generate the full record sequence for `params`.
///
/// For each simulated cardholder: one employee id and one card number are
/// drawn, then the positive records for each requested category are emitted
/// in order, then the negative records. The output length is always
/// [GeneratorParams::total_count].
pub fn generate(params: &GeneratorParams, rng: &mut impl Rng) -> Vec<TransactionRecord> {
    let mut records = Vec::with_capacity(params.total_count());
    let negative_count = params.effective_negative_count();

    for _ in 0..params.user_count {
        let employee_id = format!("EMP{}", rng.gen_range(1000..=9999));
        let card_number = sample_card_number(rng);

        for (expense_type, count) in &params.expense_counts {
            for _ in 0..*count {
                records.push(sample_record(
                    params,
                    &employee_id,
                    &card_number,
                    expense_type,
                    Sign::Positive,
                    rng,
                ));
            }
        }

        for _ in 0..negative_count {
            let expense_type = params
                .expense_counts
                .choose(rng)
                .map(|(category, _)| category.as_str())
                .unwrap_or(FALLBACK_EXPENSE_CATEGORY);

            records.push(sample_record(
                params,
                &employee_id,
                &card_number,
                expense_type,
                Sign::Negative,
                rng,
            ));
        }
    }

    records
}

#[derive(Clone, Copy)]
enum Sign {
    Positive,
    Negative,
}

fn sample_record(
    params: &GeneratorParams,
    employee_id: &str,
    card_number: &str,
    expense_type: &str,
    sign: Sign,
    rng: &mut impl Rng,
) -> TransactionRecord {
    let card_type = params
        .card_types
        .choose(rng)
        .cloned()
        .unwrap_or_default();
    let currency = *params
        .currencies
        .choose(rng)
        .expect("GeneratorParams guarantees at least one currency");

    let (low, high) = currency.amount_range();
    let amount = match sign {
        Sign::Positive => round_to_cents(rng.gen_range(low..=high)),
        // Refunds and fees are smaller than spends, so sample from half the range.
        Sign::Negative => -round_to_cents(rng.gen_range(low / 2.0..=high / 2.0)),
    };

    let vendor_name = *VENDORS
        .choose(rng)
        .expect("the vendor catalog is never empty");

    TransactionRecord {
        employee_id: employee_id.to_owned(),
        cardholder_name: params.cardholder_name.clone(),
        card_type,
        card_number: card_number.to_owned(),
        expense_type: expense_type.to_owned(),
        vendor_name: vendor_name.to_owned(),
        date: sample_date(params.from_date, params.to_date, rng),
        amount,
        currency,
    }
}

/// One card number per batch: four dash-separated groups with the first
/// group in the reserved 4000-4999 range.
fn sample_card_number(rng: &mut impl Rng) -> String {
    format!(
        "{}-{}-{}-{}",
        rng.gen_range(4000..=4999),
        rng.gen_range(1000..=9999),
        rng.gen_range(1000..=9999),
        rng.gen_range(1000..=9999),
    )
}

/// A uniformly random day in `[from, to]` inclusive.
fn sample_date(from: Date, to: Date, rng: &mut impl Rng) -> Date {
    let span_days = (to - from).whole_days();

    from + Duration::days(rng.gen_range(0..=span_days))
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod generate_tests {
    use rand::{SeedableRng, rngs::SmallRng};
    use time::macros::date;

    use crate::record::{CurrencyCode, TransactionRecord};

    use super::{GeneratorParams, generate};

    fn test_params() -> GeneratorParams {
        GeneratorParams {
            user_count: 1,
            card_types: vec!["Visa".to_owned()],
            currencies: vec![CurrencyCode::INR],
            expense_counts: vec![("Taxi".to_owned(), 2)],
            negative_count: 1,
            from_date: date!(2026 - 03 - 01),
            to_date: date!(2026 - 03 - 01),
            cardholder_name: "Cardholder".to_owned(),
        }
    }

    fn test_rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn output_length_matches_requested_counts() {
        let params = GeneratorParams {
            user_count: 3,
            expense_counts: vec![("Taxi".to_owned(), 2), ("Gifts".to_owned(), 4)],
            negative_count: 2,
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());

        assert_eq!(records.len(), 3 * (2 + 4 + 2));
    }

    #[test]
    fn single_day_range_produces_three_records_with_one_refund() {
        let params = test_params();

        let records = generate(&params, &mut test_rng());

        assert_eq!(records.len(), 3, "want 3 records, got {}", records.len());
        assert_batch_shares_identity(&records);

        for record in &records {
            assert_eq!(record.date, date!(2026 - 03 - 01));
        }

        let negatives = records
            .iter()
            .filter(|record| record.amount < 0.0)
            .collect::<Vec<_>>();
        assert_eq!(
            negatives.len(),
            1,
            "want exactly 1 negative record, got {}",
            negatives.len()
        );
        assert!(
            negatives[0].display_amount().starts_with("-₹"),
            "want negative amount rendered as -₹..., got {}",
            negatives[0].display_amount()
        );
    }

    #[test]
    fn batch_shares_employee_id_and_card_number() {
        let params = GeneratorParams {
            expense_counts: vec![("Airfare".to_owned(), 5)],
            negative_count: 3,
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());

        assert_batch_shares_identity(&records);
    }

    #[test]
    fn separate_batches_get_separate_card_numbers() {
        let params = GeneratorParams {
            user_count: 2,
            negative_count: 0,
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());

        assert_eq!(records.len(), 4);
        // Records are emitted batch by batch, 2 positives per batch.
        assert_ne!(
            records[0].card_number, records[2].card_number,
            "want each cardholder to get their own card number"
        );
    }

    #[test]
    fn dates_stay_within_range() {
        let from = date!(2026 - 01 - 01);
        let to = date!(2026 - 01 - 31);
        let params = GeneratorParams {
            user_count: 10,
            from_date: from,
            to_date: to,
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());

        for record in &records {
            assert!(
                from <= record.date && record.date <= to,
                "want date in [{from}, {to}], got {}",
                record.date
            );
        }
    }

    #[test]
    fn positive_records_use_requested_categories() {
        let params = GeneratorParams {
            expense_counts: vec![("Taxi".to_owned(), 3), ("Gifts".to_owned(), 1)],
            negative_count: 0,
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());

        let categories = records
            .iter()
            .map(|record| record.expense_type.as_str())
            .collect::<Vec<_>>();
        assert_eq!(categories, vec!["Taxi", "Taxi", "Taxi", "Gifts"]);
    }

    #[test]
    fn negative_count_is_clamped_below_positive_count() {
        let params = GeneratorParams {
            expense_counts: vec![("Taxi".to_owned(), 2)],
            negative_count: 10,
            ..test_params()
        };

        assert_eq!(params.effective_negative_count(), 1);

        let records = generate(&params, &mut test_rng());
        let negative_count = records
            .iter()
            .filter(|record| record.amount < 0.0)
            .count();
        assert_eq!(records.len(), 3);
        assert_eq!(negative_count, 1);
    }

    #[test]
    fn no_positive_records_means_no_negative_records() {
        let params = GeneratorParams {
            expense_counts: vec![],
            negative_count: 5,
            ..test_params()
        };

        assert_eq!(params.effective_negative_count(), 0);
        assert!(generate(&params, &mut test_rng()).is_empty());
    }

    #[test]
    fn zero_users_produce_no_records() {
        let params = GeneratorParams {
            user_count: 0,
            ..test_params()
        };

        assert!(generate(&params, &mut test_rng()).is_empty());
    }

    #[test]
    fn amounts_stay_within_currency_range() {
        let params = GeneratorParams {
            user_count: 5,
            currencies: vec![CurrencyCode::USD],
            expense_counts: vec![("Taxi".to_owned(), 10)],
            negative_count: 4,
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());
        let (low, high) = CurrencyCode::USD.amount_range();

        for record in &records {
            if record.amount >= 0.0 {
                assert!(
                    low <= record.amount && record.amount <= high,
                    "want positive amount in [{low}, {high}], got {}",
                    record.amount
                );
            } else {
                let magnitude = record.amount.abs();
                assert!(
                    low / 2.0 <= magnitude && magnitude <= high / 2.0,
                    "want refund magnitude in [{}, {}], got {magnitude}",
                    low / 2.0,
                    high / 2.0
                );
            }
        }
    }

    #[test]
    fn empty_card_types_give_empty_card_type() {
        let params = GeneratorParams {
            card_types: vec![],
            ..test_params()
        };

        let records = generate(&params, &mut test_rng());

        assert!(records.iter().all(|record| record.card_type.is_empty()));
    }

    #[track_caller]
    fn assert_batch_shares_identity(records: &[TransactionRecord]) {
        let first = records.first().expect("want at least one record");

        for record in records {
            assert_eq!(record.employee_id, first.employee_id);
            assert_eq!(record.card_number, first.card_number);
        }
    }
}
