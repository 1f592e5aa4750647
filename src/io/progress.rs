//! Progress display for grid assembly

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static ASSEMBLY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single bar tracking tile placements during one solve
pub struct AssemblyProgress {
    bar: ProgressBar,
}

impl AssemblyProgress {
    /// Create a bar spanning `total` placements
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(ASSEMBLY_STYLE.clone());
        bar.set_message("placing tiles");
        Self { bar }
    }

    /// Report the number of positions filled so far
    pub fn placed(&self, filled: usize) {
        self.bar.set_position(filled as u64);
    }

    /// Clear the bar once assembly completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
