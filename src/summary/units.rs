//! Unit Formatting Module
//! Duration and pace helpers shared by the chart footer and axes.

/// Format seconds as "h:mm:ss".
pub fn s_to_hms(seconds: f64) -> String {
    let total = seconds as i64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{}:{:02}:{:02}", h, m, s)
}

/// Speed and pace from distance (m) and time (s): (km/h, "m:ss min/km").
///
/// Sub-second times and nonpositive distances report the zero sentinel
/// instead of dividing.
pub fn compute_pace(distance_m: f64, time_s: f64) -> (f64, String) {
    if time_s < 1.0 || distance_m <= 0.0 {
        return (0.0, format!("{:2}:{:02} min/km", 0, 0));
    }
    let speed_kmh = distance_m / time_s * 3.6;
    let sec_per_km = time_s / distance_m * 1000.0;
    let minutes = (sec_per_km / 60.0).floor();
    let seconds = sec_per_km - minutes * 60.0;
    (
        speed_kmh,
        format!("{:2}:{:02} min/km", minutes as i64, seconds as i64),
    )
}
