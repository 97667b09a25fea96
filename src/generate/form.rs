//! The raw parameter form and its coercion into [GeneratorParams].

use serde::Deserialize;
use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

use crate::record::CurrencyCode;

use super::core::GeneratorParams;

/// The name used when the cardholder name field is left blank.
const DEFAULT_CARDHOLDER_NAME: &str = "Cardholder";

/// How far back the default date range reaches.
const DEFAULT_RANGE_DAYS: i64 = 30;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw generator parameter form.
///
/// Every field is a string (or list of strings) so that a malformed value
/// can never fail extraction; [GeneratorForm::into_params] coerces each
/// field to a sensible default instead.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GeneratorForm {
    /// The number of simulated cardholders.
    #[serde(default)]
    pub user_count: String,
    /// The selected card type labels.
    #[serde(default)]
    pub card_types: Vec<String>,
    /// The selected currency codes.
    #[serde(default)]
    pub currencies: Vec<String>,
    /// The requested number of refund-like records per cardholder.
    #[serde(default)]
    pub negative_count: String,
    /// The name printed on the simulated cards.
    #[serde(default)]
    pub cardholder_name: String,
    /// The first day transactions may fall on.
    #[serde(default)]
    pub from_date: String,
    /// The last day transactions may fall on.
    #[serde(default)]
    pub to_date: String,

    // One count field per expense category. The field names are the
    // category labels shown on the form.
    #[serde(default, rename = "Airfare")]
    pub airfare: String,
    #[serde(default, rename = "Accommodation")]
    pub accommodation: String,
    #[serde(default, rename = "Taxi")]
    pub taxi: String,
    #[serde(default, rename = "Group Meals")]
    pub group_meals: String,
    #[serde(default, rename = "Entertainment&Hospitality")]
    pub entertainment: String,
    #[serde(default, rename = "Gifts")]
    pub gifts: String,
}

impl GeneratorForm {
    /// Coerce the raw form into generator parameters.
    ///
    /// `today` anchors the default date range of the last
    /// [DEFAULT_RANGE_DAYS] days. This never fails: unparsable numbers fall
    /// back to their defaults, unknown currencies are dropped (and the
    /// whole list falls back to INR when nothing is left), unparsable dates
    /// fall back to the default range, and an inverted range is swapped.
    pub fn into_params(self, today: Date) -> GeneratorParams {
        let user_count = self.user_count.trim().parse().unwrap_or(1);
        let negative_count = self.negative_count.trim().parse().unwrap_or(0);

        let mut currencies = self
            .currencies
            .iter()
            .filter_map(|code| CurrencyCode::parse(code))
            .collect::<Vec<_>>();
        if currencies.is_empty() {
            currencies = vec![CurrencyCode::INR];
        }

        let expense_counts = [
            ("Airfare", &self.airfare),
            ("Accommodation", &self.accommodation),
            ("Taxi", &self.taxi),
            ("Group Meals", &self.group_meals),
            ("Entertainment&Hospitality", &self.entertainment),
            ("Gifts", &self.gifts),
        ]
        .into_iter()
        .filter_map(|(category, count)| {
            let count: u32 = count.trim().parse().unwrap_or(0);

            (count > 0).then(|| (category.to_owned(), count))
        })
        .collect();

        let mut from_date = parse_date(&self.from_date)
            .unwrap_or_else(|| today - Duration::days(DEFAULT_RANGE_DAYS));
        let mut to_date = parse_date(&self.to_date).unwrap_or(today);
        if from_date > to_date {
            std::mem::swap(&mut from_date, &mut to_date);
        }

        let cardholder_name = match self.cardholder_name.trim() {
            "" => DEFAULT_CARDHOLDER_NAME.to_owned(),
            name => name.to_owned(),
        };

        GeneratorParams {
            user_count,
            card_types: self.card_types,
            currencies,
            expense_counts,
            negative_count,
            from_date,
            to_date,
            cardholder_name,
        }
    }
}

fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), DATE_FORMAT).ok()
}
