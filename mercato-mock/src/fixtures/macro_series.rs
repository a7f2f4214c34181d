use chrono::NaiveDate;
use mercato_core::DatedSeries;

/// Twelve monthly money-supply observations, first-of-month, ending before
/// the anchor date. Monthly cadence leaves daily gaps for the fill policy to
/// close.
pub fn monthly(series_id: &str) -> DatedSeries {
    let values = [
        20_800.0, 20_850.0, 20_910.0, 20_870.0, 20_940.0, 21_010.0, 21_060.0, 21_120.0, 21_090.0,
        21_150.0, 21_230.0, 21_280.0,
    ];
    DatedSeries::from_values(
        series_id,
        values.iter().enumerate().map(|(i, v)| {
            let month = i32::try_from(i).unwrap();
            let (y, m) = if month < 6 {
                (2023, 7 + month)
            } else {
                (2024, month - 5)
            };
            let date = NaiveDate::from_ymd_opt(y, u32::try_from(m).unwrap(), 1).unwrap();
            (date, *v)
        }),
    )
}
