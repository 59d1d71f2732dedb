use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

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

    pub fn run(&self) -> Result<String> {
        println!("Starting conversion...");

        // Extract
        println!("Reading solution...");
        let doc = self.pipeline.extract()?;
        println!(
            "Extracted {} placed items",
            doc.solution.layout.placed_items.len()
        );
        self.monitor.log_stats("Extract");

        // Transform
        println!("Formatting placements...");
        let result = self.pipeline.transform(doc)?;
        println!("Formatted {} rows", result.rows.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing submission...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
