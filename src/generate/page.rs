//! Defines the route handler for the generator parameter form page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, Duration, OffsetDateTime};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CHECKBOX_LABEL_STYLE, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
    record::{CARD_TYPES, CurrencyCode, EXPENSE_CATEGORIES},
    timezone::get_local_offset,
};

fn generator_form_view(today: Date) -> Markup {
    let default_from = today - Duration::days(30);
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(endpoints::GENERATE_API)
                class="w-full max-w-xl space-y-4 md:space-y-6"
            {
                h1 class="text-xl font-bold" { "Generate Transactions" }

                div
                {
                    label for="cardholder_name" class=(FORM_LABEL_STYLE) { "Cardholder name" }

                    input
                        name="cardholder_name"
                        id="cardholder_name"
                        type="text"
                        placeholder="Cardholder"
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="user_count" class=(FORM_LABEL_STYLE) { "Number of cardholders" }

                    input
                        name="user_count"
                        id="user_count"
                        type="number"
                        min="1"
                        value="1"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                fieldset class="space-y-2"
                {
                    legend class=(FORM_LABEL_STYLE) { "Card types" }

                    div class="flex flex-wrap gap-4"
                    {
                        @for card_type in CARD_TYPES {
                            div class="flex items-center gap-2"
                            {
                                input
                                    name="card_types"
                                    id={ "card-type-" (card_type) }
                                    type="checkbox"
                                    value=(card_type)
                                    class=(FORM_CHECKBOX_STYLE);

                                label
                                    for={ "card-type-" (card_type) }
                                    class=(FORM_CHECKBOX_LABEL_STYLE)
                                {
                                    (card_type)
                                }
                            }
                        }
                    }
                }

                fieldset class="space-y-2"
                {
                    legend class=(FORM_LABEL_STYLE) { "Currencies" }

                    div class="flex flex-wrap gap-4"
                    {
                        @for currency in CurrencyCode::ALL {
                            div class="flex items-center gap-2"
                            {
                                input
                                    name="currencies"
                                    id={ "currency-" (currency.code()) }
                                    type="checkbox"
                                    value=(currency.code())
                                    checked[currency == CurrencyCode::INR]
                                    class=(FORM_CHECKBOX_STYLE);

                                label
                                    for={ "currency-" (currency.code()) }
                                    class=(FORM_CHECKBOX_LABEL_STYLE)
                                {
                                    (currency.code()) " (" (currency.symbol()) ")"
                                }
                            }
                        }
                    }
                }

                fieldset class="space-y-2"
                {
                    legend class=(FORM_LABEL_STYLE) { "Transactions per expense category" }

                    div class="grid grid-cols-2 gap-4"
                    {
                        @for category in EXPENSE_CATEGORIES {
                            div
                            {
                                label for=(category) class=(FORM_LABEL_STYLE) { (category) }

                                input
                                    name=(category)
                                    id=(category)
                                    type="number"
                                    min="0"
                                    value="0"
                                    class=(FORM_TEXT_INPUT_STYLE);
                            }
                        }
                    }
                }

                div
                {
                    label for="negative_count" class=(FORM_LABEL_STYLE)
                    {
                        "Refund transactions per cardholder"
                    }

                    input
                        name="negative_count"
                        id="negative_count"
                        type="number"
                        min="0"
                        value="0"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="grid grid-cols-2 gap-4"
                {
                    div
                    {
                        label for="from_date" class=(FORM_LABEL_STYLE) { "From" }

                        input
                            name="from_date"
                            id="from_date"
                            type="date"
                            value=(default_from)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="to_date" class=(FORM_LABEL_STYLE) { "To" }

                        input
                            name="to_date"
                            id="to_date"
                            type="date"
                            value=(today)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Generate"
                }
            }
        }
    };

    base("Generate Transactions", &content)
}

/// Renders the generator parameter form.
pub async fn get_generator_page(State(state): State<AppState>) -> Result<Response, Error> {
    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone)
    })?;

    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();

    Ok(generator_form_view(today).into_response())
}
