/// Minutes from `current` to `dest`, both given as time of day.
///
/// `dest` must lie at most one midnight ahead of `current`. A destination with a
/// smaller hour is taken to be on the next day. Within the same hour the plain
/// difference is returned, so callers must not pass a destination that is a
/// full day ahead within the same hour.
pub fn remaining_time(current_h: u32, current_m: u32, dest_h: u32, dest_m: u32) -> i64 {
    let (current_h, current_m, dest_h, dest_m) = (current_h as i64, current_m as i64, dest_h as i64, dest_m as i64);

    if current_h == dest_h {
        dest_m - current_m
    } else if current_h < dest_h {
        60 * (dest_h - current_h - 1) + (60 - current_m) + dest_m
    } else {
        // crosses midnight
        60 * (23 - current_h) + (60 - current_m) + 60 * dest_h + dest_m
    }
}
