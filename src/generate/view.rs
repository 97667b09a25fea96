//! HTML rendering for the generated transaction preview.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_count,
    },
    navigation::NavBar,
    record::TransactionRecord,
};

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

/// Render the preview table for `records` with the download form below it.
///
/// `records_json` is the serialized form of `records`, embedded in a hidden
/// field so the download request can round-trip the exact records that were
/// previewed.
pub(crate) fn preview_view(records: &[TransactionRecord], records_json: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();
    let record_count = format_count(records.len());

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-6xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Generated " (record_count) " transactions" }

                    a href=(endpoints::ROOT) class=(LINK_STYLE) { "Change parameters" }
                }

                @if records.is_empty() {
                    p class="text-gray-500 dark:text-gray-400"
                    {
                        "Nothing to show. Request at least one transaction for an expense category."
                    }
                } @else {
                    section class="rounded bg-gray-50 dark:bg-gray-800 overflow-x-auto"
                    {
                        table class="w-full my-2 text-sm text-left rtl:text-right
                            text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Employee" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Cardholder" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Card Type" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Card Number" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Expense Type" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Vendor" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Currency" }
                                }
                            }

                            tbody
                            {
                                @for record in records {
                                    tr class=(TABLE_ROW_STYLE)
                                    {
                                        td class=(TABLE_CELL_STYLE) { (record.employee_id) }
                                        td class=(TABLE_CELL_STYLE) { (record.cardholder_name) }
                                        td class=(TABLE_CELL_STYLE) { (record.card_type) }
                                        td class=(TABLE_CELL_STYLE) { (record.card_number) }
                                        td class=(TABLE_CELL_STYLE) { (record.expense_type) }
                                        td class=(TABLE_CELL_STYLE) { (record.vendor_name) }
                                        td class=(TABLE_CELL_STYLE) { (record.date) }

                                        td class={ "px-6 py-4 text-right font-medium " (amount_class(record.amount)) }
                                        {
                                            (record.display_amount())
                                        }

                                        td class=(TABLE_CELL_STYLE) { (record.currency.code()) }
                                    }
                                }
                            }
                        }
                    }

                    form
                        method="post"
                        action=(endpoints::DOWNLOAD_API)
                        class="space-y-4 max-w-md"
                    {
                        input type="hidden" name="data" value=(records_json);

                        fieldset class="space-y-2"
                        {
                            legend class="text-sm font-medium text-gray-900 dark:text-white"
                            {
                                "Download as"
                            }

                            div class="flex gap-4"
                            {
                                div class="flex items-center gap-3"
                                {
                                    input
                                        name="file_type"
                                        id="file-type-txt"
                                        type="radio"
                                        value="txt"
                                        checked
                                        class=(FORM_RADIO_INPUT_STYLE);

                                    label for="file-type-txt" class=(FORM_RADIO_LABEL_STYLE)
                                    {
                                        "Text (CSV)"
                                    }
                                }

                                div class="flex items-center gap-3"
                                {
                                    input
                                        name="file_type"
                                        id="file-type-xlsx"
                                        type="radio"
                                        value="xlsx"
                                        class=(FORM_RADIO_INPUT_STYLE);

                                    label for="file-type-xlsx" class=(FORM_RADIO_LABEL_STYLE)
                                    {
                                        "Excel"
                                    }
                                }
                            }
                        }

                        button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                        {
                            "Download"
                        }
                    }
                }
            }
        }
    };

    base("Preview Transactions", &content)
}

#[cfg(test)]
mod preview_view_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        endpoints,
        record::{CurrencyCode, TransactionRecord},
    };

    use super::preview_view;

    fn test_records() -> Vec<TransactionRecord> {
        vec![
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
            },
            TransactionRecord {
                employee_id: "EMP1234".to_owned(),
                cardholder_name: "Cardholder".to_owned(),
                card_type: "Visa".to_owned(),
                card_number: "4123-5678-9012-3456".to_owned(),
                expense_type: "Taxi".to_owned(),
                vendor_name: "Ola".to_owned(),
                date: date!(2026 - 01 - 16),
                amount: -50.0,
                currency: CurrencyCode::INR,
            },
        ]
    }

    fn render(records: &[TransactionRecord]) -> Html {
        let json = serde_json::to_string(records).unwrap();

        Html::parse_document(&preview_view(records, &json).into_string())
    }

    #[test]
    fn renders_one_table_row_per_record() {
        let document = render(&test_records());

        let row_selector = Selector::parse("tbody tr").unwrap();
        let rows = document.select(&row_selector).collect::<Vec<_>>();
        assert_eq!(rows.len(), 2, "want 2 rows, got {}", rows.len());
    }

    #[test]
    fn negative_amounts_are_rendered_with_sign_and_symbol() {
        let document = render(&test_records());

        let cell_selector = Selector::parse("tbody td.text-red-700").unwrap();
        let cells = document.select(&cell_selector).collect::<Vec<_>>();
        assert_eq!(cells.len(), 1, "want 1 refund cell, got {}", cells.len());
        let text = cells[0].text().collect::<String>();
        assert_eq!(text.trim(), "-₹50.00");
    }

    #[test]
    fn download_form_embeds_records_and_format_choices() {
        let records = test_records();
        let document = render(&records);

        let form_selector = Selector::parse("form").unwrap();
        let form = document
            .select(&form_selector)
            .next()
            .expect("want a download form");
        assert_eq!(form.value().attr("action"), Some(endpoints::DOWNLOAD_API));

        let data_selector = Selector::parse("input[type=hidden][name=data]").unwrap();
        let data_input = form
            .select(&data_selector)
            .next()
            .expect("want a hidden data input");
        let embedded: Vec<TransactionRecord> =
            serde_json::from_str(data_input.value().attr("value").unwrap())
                .expect("hidden data should parse back into records");
        assert_eq!(embedded, records);

        let radio_selector = Selector::parse("input[type=radio][name=file_type]").unwrap();
        let values = form
            .select(&radio_selector)
            .map(|input| input.value().attr("value").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["txt", "xlsx"]);
    }

    #[test]
    fn empty_record_set_shows_empty_state_without_download_form() {
        let document = render(&[]);

        let form_selector = Selector::parse(&format!(
            "form[action=\"{}\"]",
            endpoints::DOWNLOAD_API
        ))
        .unwrap();
        assert!(
            document.select(&form_selector).next().is_none(),
            "want no download form for an empty preview"
        );

        let text = document.root_element().text().collect::<String>();
        assert!(
            text.contains("Nothing to show"),
            "want the empty state message, got {text}"
        );
    }
}
