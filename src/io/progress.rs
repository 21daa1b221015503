//! Per-texture progress tracking with automatic batching for large pools

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch generation
///
/// Small pools get one bar per texture; large pools collapse to a single
/// batch bar plus a rolling window of the most recently active textures
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    texture_bars: Vec<ProgressBar>,
    /// Stores (`texture_name`, `current_variation`, `variation_count`) per texture
    texture_states: Vec<(String, u32, u32)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static VARIATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Textures: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            texture_bars: Vec::new(),
            texture_states: Vec::new(),
        }
    }

    /// Initialize progress bars for the pool size
    pub fn initialize(&mut self, texture_count: usize) {
        // Batch mode for large pools avoids terminal spam
        if texture_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(texture_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = texture_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let bar = ProgressBar::new(0);
            bar.set_style(VARIATION_STYLE.clone());
            self.texture_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a texture whose variations are about to be generated
    pub fn start_texture(&mut self, index: usize, name: &str, variation_count: u32) {
        if index >= self.texture_states.len() {
            self.texture_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.texture_states.get_mut(index) {
            *state = (name.to_string(), 0, variation_count);
        }
        self.update_bars();
    }

    /// Report the variation currently being rendered
    pub fn update_variation(&mut self, texture_index: usize, variation: u32) {
        if let Some(state) = self.texture_states.get_mut(texture_index) {
            state.1 = variation;
        }
        self.update_bars();
    }

    /// Mark a texture's variation set as completed
    pub fn complete_texture(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.texture_states.get_mut(index) {
            let variation_count = state.2;
            state.0 = format!("✓ {}", state.0);
            state.1 = variation_count;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All textures processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update the bars to show the last N active textures
    fn update_bars(&self) {
        let mut active_textures = Vec::new();
        for (name, current, count) in &self.texture_states {
            if !name.is_empty() {
                active_textures.push((name.clone(), *current, *count));
            }
        }

        let start_index = active_textures
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_textures = active_textures.get(start_index..).unwrap_or(&[]);

        for (bar_index, (name, current, count)) in visible_textures.iter().enumerate() {
            if let Some(bar) = self.texture_bars.get(bar_index) {
                bar.set_length(u64::from(*count));
                bar.set_position(u64::from(*current));
                let count_width = count.to_string().len();
                bar.set_message(format!("{current:>count_width$}/{count}"));
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_index in visible_textures.len()..self.texture_bars.len() {
            if let Some(bar) = self.texture_bars.get(bar_index) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
