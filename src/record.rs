//! The transaction record model and the fixed catalogs it draws from.

use serde::{Deserialize, Serialize};
use time::Date;

/// The merchants that transactions are attributed to.
pub const VENDORS: [&str; 12] = [
    "Amazon",
    "Flipkart",
    "Uber",
    "Swiggy",
    "Zomato",
    "Indigo Airlines",
    "MakeMyTrip",
    "Ola",
    "Reliance Trends",
    "Big Bazaar",
    "ABC Hotel",
    "XYZ Restaurant",
];

/// The expense categories offered on the parameter form.
pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Airfare",
    "Accommodation",
    "Taxi",
    "Group Meals",
    "Entertainment&Hospitality",
    "Gifts",
];

/// The card type labels offered on the parameter form.
pub const CARD_TYPES: [&str; 3] = ["Visa", "Mastercard", "Amex"];

/// The expense category used for negative records when the user requested no
/// positive categories.
pub const FALLBACK_EXPENSE_CATEGORY: &str = "Misc";

/// The currencies that transactions can be denominated in.
///
/// Each currency carries its display symbol and a plausible amount range so
/// that ranges are data, not control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// Indian rupee.
    INR,
    /// United States dollar.
    USD,
    /// Euro.
    EUR,
    /// Canadian dollar.
    CAD,
}

impl CurrencyCode {
    /// Every supported currency, in the order shown on the parameter form.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::INR,
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::CAD,
    ];

    /// The three letter code, e.g. "INR".
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::INR => "INR",
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::CAD => "CAD",
        }
    }

    /// The symbol prefixed to displayed amounts, e.g. "₹".
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::INR => "₹",
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::CAD => "C$",
        }
    }

    /// The inclusive low/high bounds that positive amounts are sampled from.
    pub fn amount_range(&self) -> (f64, f64) {
        match self {
            CurrencyCode::INR => (100.0, 5000.0),
            CurrencyCode::USD => (5.0, 500.0),
            CurrencyCode::EUR => (5.0, 450.0),
            CurrencyCode::CAD => (5.0, 600.0),
        }
    }

    /// Parse a form value such as "INR" into a currency code.
    pub fn parse(value: &str) -> Option<CurrencyCode> {
        CurrencyCode::ALL
            .into_iter()
            .find(|currency| currency.code() == value)
    }
}

/// One fabricated credit-card transaction.
///
/// The amount is carried as a plain signed number alongside the currency
/// code. Formatting with the currency symbol happens only at display time,
/// so the exporter never has to strip symbols back out of a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Synthetic employee identifier, shared by all records in a batch.
    pub employee_id: String,
    /// The name printed on the simulated card.
    pub cardholder_name: String,
    /// One of the user-selected card type labels, or empty if none selected.
    pub card_type: String,
    /// Synthetic card number, four dash-separated groups.
    pub card_number: String,
    /// The expense category this record was generated for.
    pub expense_type: String,
    /// The merchant the transaction is attributed to.
    pub vendor_name: String,
    /// The calendar day the transaction occurred on.
    pub date: Date,
    /// The signed transaction value, rounded to 2 decimal places.
    /// Negative values represent refunds/credits.
    pub amount: f64,
    /// The currency the amount is denominated in.
    pub currency: CurrencyCode,
}

impl TransactionRecord {
    /// The amount rendered for display, e.g. `₹123.45` or `-₹67.89`.
    pub fn display_amount(&self) -> String {
        if self.amount < 0.0 {
            format!("-{}{:.2}", self.currency.symbol(), self.amount.abs())
        } else {
            format!("{}{:.2}", self.currency.symbol(), self.amount)
        }
    }

    /// The last dash-separated segment of the card number, used as a
    /// display-safe stand-in for the full number. Empty if the card number
    /// is empty.
    pub fn masked_card_reference(&self) -> &str {
        self.card_number.rsplit('-').next().unwrap_or_default()
    }
}


#[cfg(test)]
mod record_tests {
    use time::macros::date;

    use super::{CurrencyCode, TransactionRecord};

    fn test_record() -> TransactionRecord {
        TransactionRecord {
            employee_id: "EMP1234".to_owned(),
            cardholder_name: "Cardholder".to_owned(),
            card_type: "Visa".to_owned(),
            card_number: "4123-5678-9012-3456".to_owned(),
            expense_type: "Taxi".to_owned(),
            vendor_name: "Uber".to_owned(),
            date: date!(2026 - 01 - 15),
            amount: 123.45,
            currency: CurrencyCode::INR,
        }
    }

    #[test]
    fn display_amount_prefixes_symbol() {
        let record = test_record();

        assert_eq!(record.display_amount(), "₹123.45");
    }

    #[test]
    fn display_amount_puts_sign_before_symbol() {
        let record = TransactionRecord {
            amount: -67.89,
            ..test_record()
        };

        assert_eq!(record.display_amount(), "-₹67.89");
    }

    #[test]
    fn masked_card_reference_is_last_segment() {
        let record = test_record();

        assert_eq!(record.masked_card_reference(), "3456");
    }

    #[test]
    fn masked_card_reference_of_empty_card_number_is_empty() {
        let record = TransactionRecord {
            card_number: String::new(),
            ..test_record()
        };

        assert_eq!(record.masked_card_reference(), "");
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = test_record();

        let json = serde_json::to_string(&record).expect("could not serialize record");
        let parsed: TransactionRecord =
            serde_json::from_str(&json).expect("could not deserialize record");

        assert_eq!(parsed, record);
    }

    #[test]
    fn date_serializes_as_calendar_day() {
        let record = test_record();

        let json = serde_json::to_string(&record).expect("could not serialize record");

        assert!(
            json.contains("\"2026-01-15\""),
            "want date serialized as \"2026-01-15\", got {json}"
        );
    }
}
