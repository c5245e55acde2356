use chrono::{DateTime, Local};

/// Record file stamp, second resolution.
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// 14 digits, used in completion ids.
pub const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn file_stamp(dt: &DateTime<Local>) -> String {
    dt.format(FILE_STAMP_FORMAT).to_string()
}

pub fn to_local_string(dt: &DateTime<Local>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

pub fn compact_stamp(dt: &DateTime<Local>) -> String {
    dt.format(COMPACT_FORMAT).to_string()
}

// tracing_subscriber 自定义时间格式：本地时间，与记录文件一致
pub struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", to_local_string(&Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 20, 8, 5, 9).unwrap()
    }

    #[test]
    fn file_stamp_is_filesystem_safe() {
        assert_eq!(file_stamp(&sample()), "2026-01-20_08-05-09");
    }

    #[test]
    fn compact_stamp_has_fourteen_digits() {
        let s = compact_stamp(&sample());
        assert_eq!(s, "20260120080509");
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn local_string_is_human_readable() {
        assert_eq!(to_local_string(&sample()), "2026-01-20 08:05:09");
    }
}
