use std::time::Duration;

use cmrace::dims::Dims;

pub fn line_center(container_start: i32, container_end: i32, item_width: i32) -> i32 {
    (container_end - container_start - item_width) / 2 + container_start
}

pub fn box_center(container_start: Dims, container_end: Dims, box_dims: Dims) -> Dims {
    Dims(
        line_center(container_start.0, container_end.0, box_dims.0),
        line_center(container_start.1, container_end.1, box_dims.1),
    )
}

/// Elapsed time the way the summary wants it, two decimal places.
pub fn format_elapsed(dur: Duration) -> String {
    format!("{:.2}s", dur.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_boxes() {
        assert_eq!(box_center(Dims(0, 0), Dims(10, 10), Dims(4, 2)), Dims(3, 4));
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.23s");
        assert_eq!(format_elapsed(Duration::from_millis(40)), "0.04s");
    }
}
