//! Local-date helpers for the drink tracker.
//!
//! Date arithmetic happens in the browser (`js_sys::Date`) so the log keys
//! follow the user's local calendar day. The pure consumers in
//! `state::drink_log` take date strings as input, keeping them testable
//! without a browser.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        format_local_date(&js_sys::Date::new_0())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Server render never shows log data; any stable placeholder works.
        String::from("1970-01-01")
    }
}

/// The trailing seven local dates ending today, oldest first.
pub fn trailing_week() -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        (0..7)
            .rev()
            .map(|offset| {
                let date = js_sys::Date::new_0();
                date.set_date(date.get_date() - offset);
                format_local_date(&date)
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        vec![today(); 7]
    }
}

/// Single-letter weekday label for a `YYYY-MM-DD` chart axis.
///
/// Uses Zeller-style day-of-week math so labels stay consistent between
/// the server placeholder render and the hydrated chart.
pub fn weekday_letter(date: &str) -> char {
    let Some((y, m, d)) = split_date(date) else {
        return '?';
    };
    // Sakamoto's method: 0 = Sunday.
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if m < 3 { y - 1 } else { y };
    let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[(m - 1) as usize] + d).rem_euclid(7);
    ['S', 'M', 'T', 'W', 'T', 'F', 'S'][dow as usize]
}

fn split_date(date: &str) -> Option<(i32, i32, i32)> {
    let mut parts = date.splitn(3, '-');
    let y = parts.next()?.parse().ok()?;
    let m: i32 = parts.next()?.parse().ok()?;
    let d = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&m) {
        return None;
    }
    Some((y, m, d))
}

#[cfg(feature = "hydrate")]
fn format_local_date(date: &js_sys::Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}
