use super::evolution_engine::{GenerationStats, ProgressCallback};
use std::sync::mpsc::Sender;

/// Logs a progress line every `interval` generations and on the last one.
pub struct LoggingProgressCallback {
    interval: usize,
    total_generations: usize,
}

impl LoggingProgressCallback {
    /// `interval == 0` disables progress lines.
    pub fn new(interval: usize, total_generations: usize) -> Self {
        Self {
            interval,
            total_generations,
        }
    }

    fn should_report(&self, generation: usize) -> bool {
        self.interval > 0
            && generation > 0
            && (generation % self.interval == 0 || generation == self.total_generations)
    }
}

impl ProgressCallback for LoggingProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        if !self.should_report(stats.generation) {
            return;
        }
        match stats.best_objective {
            Some(best) => log::info!(
                "Generation {}/{} - best objective: {:.5}",
                stats.generation,
                self.total_generations,
                best
            ),
            None => log::info!(
                "Generation {}/{} - no defined objective value yet",
                stats.generation,
                self.total_generations
            ),
        }
    }
}

// For consumers on another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationStats),
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationComplete(stats.clone()));
    }
}
