//! Constants Commands

use serde::Serialize;

use storefront_qa_common::constants::{archetypes, characters, date_ranges, validation};

use crate::output::{print_list, OutputFormat, TableDisplay};

#[derive(Serialize)]
pub struct Bound {
    pub rule: &'static str,
    pub value: String,
}

impl TableDisplay for Bound {
    fn headers() -> Vec<&'static str> {
        vec!["Rule", "Value"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.rule.to_string(), self.value.clone()]
    }
}

fn range(min: impl ToString, max: impl ToString) -> String {
    format!("{}..={}", min.to_string(), max.to_string())
}

pub fn bounds() -> Vec<Bound> {
    use validation::*;

    let bound = |rule, value: String| Bound { rule, value };
    vec![
        bound("password.min_length", password::MIN_LENGTH.to_string()),
        bound("password.generated_length", password::GENERATED_LENGTH.to_string()),
        bound(
            "password.requires",
            [
                (password::REQUIRES_UPPERCASE, "uppercase"),
                (password::REQUIRES_LOWERCASE, "lowercase"),
                (password::REQUIRES_NUMBERS, "numbers"),
                (password::REQUIRES_SPECIAL, "special"),
            ]
            .iter()
            .filter(|(required, _)| *required)
            .map(|(_, class)| *class)
            .collect::<Vec<_>>()
            .join(", "),
        ),
        bound("password.special_characters", characters::SPECIAL.to_string()),
        bound("email.length", range(email::MIN_LENGTH, email::MAX_LENGTH)),
        bound("email.pattern", email::PATTERN.to_string()),
        bound("phone.digits", range(phone::MIN_LENGTH, phone::MAX_LENGTH)),
        bound("price", range(price::MIN, price::MAX)),
        bound("checkin.days_ahead", range(date::MIN_FUTURE_DAYS, date::MAX_FUTURE_DAYS)),
        bound("stay.max_days", date::CHECKOUT_DAYS_AFTER_CHECKIN.to_string()),
        bound("name.length", range(name::MIN_LENGTH, name::MAX_LENGTH)),
        bound("zipcode", range(zipcode::MIN, zipcode::MAX)),
        bound("birth_year", range(date_ranges::BIRTH_YEAR_MIN, date_ranges::BIRTH_YEAR_MAX)),
        bound("card.digits", range(card::MIN_DIGITS, card::MAX_DIGITS)),
        bound("card.cvc_digits", range(card::CVC_MIN_DIGITS, card::CVC_MAX_DIGITS)),
        bound("booking.high_value_price", archetypes::HIGH_VALUE_PRICE.to_string()),
        bound("booking.low_value_price", archetypes::LOW_VALUE_PRICE.to_string()),
        bound("booking.long_stay_days", archetypes::LONG_STAY_DAYS.to_string()),
    ]
}

pub fn execute(format: OutputFormat) {
    print_list(&bounds(), format);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_show_price_and_password_rules() {
        let bounds = bounds();
        let value = |rule: &str| {
            bounds
                .iter()
                .find(|b| b.rule == rule)
                .map(|b| b.value.clone())
                .unwrap()
        };
        assert_eq!(value("price"), "50..=5000");
        assert_eq!(value("password.min_length"), "8");
        assert_eq!(value("password.requires"), "uppercase, lowercase, numbers, special");
    }
}
