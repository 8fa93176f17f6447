//! Easter Sunday (Western churches).
//!
//! Uses the Anonymous Gregorian algorithm (Meeus/Jones/Butcher), valid for
//! every year of the Gregorian calendar.

use poi_core::errors::Result;

use crate::date::Date;

/// Return the date of Easter Sunday in `year`.
///
/// # Example
/// ```
/// use poi_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}
