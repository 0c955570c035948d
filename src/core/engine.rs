use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

// White text on magenta, matching the original tool's report styling.
const REVERSE: &str = "\x1b[97;45m";
const RESET: &str = "\x1b[0m";

/// Drives the pipeline stages in order and owns the console reporting. The
/// formatted deck and its card count are always printed before the write so
/// the user sees what is about to land on disk.
pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Fetching decklist...");
        let raw = self.pipeline.fetch().await?;
        self.monitor.log_stats("Fetch");

        println!("Formatting deck...");
        let deck = self.pipeline.format(raw).await?;
        self.monitor.log_stats("Format");

        println!();
        println!("{}Decklist:{}", REVERSE, RESET);
        println!("{}\n", deck.dck_output);
        println!("{}Number of cards{}", REVERSE, RESET);
        println!("{}\n", deck.card_count());

        println!("Saving deck...");
        let output_path = self.pipeline.write(deck).await?;
        self.monitor.log_stats("Write");
        println!("Deck saved to: {}", output_path);

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
