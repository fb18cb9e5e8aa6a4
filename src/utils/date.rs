use anyhow::Result;
use daybook_core::DateKey;

/// Parse a day argument: YYYY-MM-DD or a word relative to `today`.
pub fn parse_date_arg(arg: &str, today: DateKey) -> Result<DateKey> {
    match arg.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today.succ()),
        "yesterday" => Ok(today.pred()),
        other => Ok(other.parse()?),
    }
}
