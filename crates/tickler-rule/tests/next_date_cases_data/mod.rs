pub struct NextDateCase {
    pub name: &'static str,
    pub reference: &'static str,
    pub anchor: &'static str,
    pub rule: &'static str,
    /// `Ok` holds the expected 8-digit date (empty for no next date); `Err`
    /// holds a fragment of the expected error message.
    pub expected: Result<&'static str, &'static str>,
}

const fn case(
    name: &'static str,
    reference: &'static str,
    anchor: &'static str,
    rule: &'static str,
    expected: Result<&'static str, &'static str>,
) -> NextDateCase {
    NextDateCase {
        name,
        reference,
        anchor,
        rule,
        expected,
    }
}

pub fn next_date_cases() -> Vec<NextDateCase> {
    vec![
        // Once
        case("once_same_day", "20240101", "20240101", "", Ok("")),
        case("once_past", "20240126", "20240113", "", Ok("")),
        case("once_future", "20240101", "20240102", "", Ok("20240102")),
        case("once_whitespace", "20240101", "20240301", "  ", Ok("20240301")),
        // Daily
        case("daily_week", "20240101", "20240101", "d 7", Ok("20240108")),
        case("daily_past_anchor", "20240126", "20240113", "d 7", Ok("20240127")),
        case("daily_twenty", "20240126", "20240120", "d 20", Ok("20240209")),
        case("daily_future_anchor", "20240126", "20240202", "d 30", Ok("20240202")),
        case("daily_year_wrap", "20240126", "20231225", "d 12", Ok("20240130")),
        case("daily_leap_day", "20240228", "20240228", "d 1", Ok("20240229")),
        case("daily_after_leap_day", "20240229", "20240228", "d 1", Ok("20240301")),
        case("daily_max_interval", "20240101", "20240101", "d 400", Ok("20250204")),
        // Yearly
        case("yearly_basic", "20240126", "20230311", "y", Ok("20240311")),
        case("yearly_leap_to_common", "20250101", "20240229", "y", Ok("20250228")),
        case("yearly_leap_to_leap", "20270601", "20240229", "y", Ok("20280229")),
        case("yearly_on_leap_day", "20240229", "20240229", "y", Ok("20250228")),
        case("yearly_distant_past", "20240126", "16890220", "y", Ok("20240220")),
        case("yearly_future_anchor", "20240126", "20240301", "y", Ok("20240301")),
        // Weekly
        case("weekly_next_monday", "20240103", "20240101", "w 1,3", Ok("20240108")),
        case("weekly_sunday", "20240101", "20240101", "w 7", Ok("20240107")),
        case("weekly_friday_ref", "20240126", "20240125", "w 1,4,5", Ok("20240129")),
        case("weekly_year_wrap", "20241231", "20240101", "w 1", Ok("20250106")),
        case("weekly_future_anchor", "20240126", "20240301", "w 2", Ok("20240305")),
        // Monthly
        case("monthly_last_leap_feb", "20240201", "20240101", "m -1", Ok("20240229")),
        case("monthly_last_common_feb", "20230201", "20230101", "m -1", Ok("20230228")),
        case("monthly_second_last", "20240201", "20240101", "m -2", Ok("20240228")),
        case("monthly_first_or_last", "20240126", "20240101", "m 1,-1", Ok("20240131")),
        case("monthly_skip_short_month", "20240401", "20240101", "m 31", Ok("20240531")),
        case("monthly_listed_months", "20240126", "20240101", "m 3 1,2,3", Ok("20240203")),
        case("monthly_unordered_months", "20240126", "20240101", "m 10,17 12,8", Ok("20240810")),
        case("monthly_year_wrap", "20241215", "20240101", "m 1", Ok("20250101")),
        case("monthly_leap_day_only", "20240301", "20240101", "m 29 2", Ok("20280229")),
        case("monthly_never", "20240101", "20240101", "m 30 2", Err("no occurrence")),
        // Rule errors
        case("unknown_kind", "20240101", "20240101", "x", Err("unknown rule kind")),
        case("daily_missing", "20240101", "20240101", "d", Err("invalid interval")),
        case("daily_too_large", "20240101", "20240101", "d 401", Err("invalid interval")),
        case("yearly_argument", "20240101", "20240101", "y 1", Err("unexpected argument")),
        case("weekly_eight", "20240101", "20240101", "w 8", Err("invalid weekday")),
        case("monthly_zero", "20240101", "20240101", "m 0", Err("invalid day of month")),
        case("monthly_month_13", "20240101", "20240101", "m 1 13", Err("invalid month")),
        // Date errors
        case("anchor_invalid", "20240101", "20240230", "d 1", Err("malformed anchor")),
        case("reference_invalid", "2024011", "20240101", "d 1", Err("malformed reference")),
        case("rule_before_dates", "bad", "bad", "x", Err("unknown rule kind")),
        case("past_year_9999", "99991231", "99991231", "d 1", Err("after 99991231")),
    ]
}

pub fn assert_case(case: &NextDateCase) {
    let actual = next_date_text(case.reference, case.anchor, case.rule);

    match (case.expected, actual) {
        (Ok(expected), Ok(actual)) => {
            assert_eq!(actual, expected, "Case {} did not match", case.name);
        }
        (Err(fragment), Err(err)) => {
            let message = err.to_string();
            assert!(
                message.contains(fragment),
                "Case {} expected error containing `{fragment}`, got `{message}`",
                case.name
            );
        }
        (expected, actual) => {
            panic!(
                "Case {} expected {expected:?}, got {actual:?}",
                case.name
            );
        }
    }
}
