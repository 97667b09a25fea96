//! Defines the route handler for the about page.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Renders the page describing what the app is for.
pub async fn get_about_page() -> Response {
    let nav_bar = NavBar::new(endpoints::ABOUT_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            article class="max-w-xl space-y-4"
            {
                h1 class="text-xl font-bold" { "About Cardforge" }

                p
                {
                    "Cardforge fabricates credit-card transaction records for \
                    testing and demos. Pick how many cardholders you want, which \
                    expense categories they spend on, and a date range, and the \
                    generator produces a batch of plausible-looking transactions."
                }

                p
                {
                    "Every value is made up. Card numbers, employee ids, and \
                    amounts are random and carry no real financial meaning, so \
                    the output is safe to share and load into test systems."
                }

                p
                {
                    a href=(endpoints::ROOT) class=(LINK_STYLE) { "Generate some transactions" }
                }
            }
        }
    };

    base("About", &content).into_response()
}
