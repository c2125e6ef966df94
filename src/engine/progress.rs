//! Progress counter for verbose runs

use kdam::{Animation, Bar, BarExt};

/// Create a counter for unknown total (shows count without percentage)
pub fn create_counter(desc: &'static str) -> Bar {
    kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = " files"
    )
}

/// Advance the counter by `n`; display errors are ignored.
pub fn update_counter(bar: &mut Option<Bar>, n: usize) {
    if let Some(bar) = bar.as_mut() {
        let _ = bar.update(n);
    }
}

/// Final refresh so the last count is shown, then end the line.
pub fn finish_counter(bar: &mut Option<Bar>) {
    if let Some(bar) = bar.as_mut() {
        let _ = bar.refresh();
        eprintln!();
    }
}
