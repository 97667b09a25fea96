//! Alert boxes for displaying error messages to users.

use maud::{Markup, html};

const ERROR_STYLE: &str = "p-4 mb-4 text-sm text-red-800 rounded-lg \
    bg-red-50 dark:bg-gray-800 dark:text-red-400";

/// An error message the user can act on, e.g. a rejected export request.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Short headline, e.g. "Could not export records".
    message: String,
    /// Supporting detail shown below the headline.
    details: String,
}

impl Alert {
    pub fn error(message: &str, details: &str) -> Self {
        Alert {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div class=(ERROR_STYLE) role="alert"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }
            }
        )
    }
}
