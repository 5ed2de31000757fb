use chrono::NaiveDate;

/// Open/close summary for one symbol on one trading date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyQuote {
    /// The symbol as echoed by the provider.
    pub symbol: String,
    /// The trading date the prices belong to.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high, when reported.
    pub high: Option<f64>,
    /// Session low, when reported.
    pub low: Option<f64>,
    /// Closing price.
    pub close: f64,
    /// Traded volume, when reported.
    pub volume: Option<f64>,
}
