use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

pub struct KitMetrics {
    /// Operations served, labelled by module.
    pub operations: IntCounterVec,
    pub decode_failures: IntCounter,
}

impl KitMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let operations = IntCounterVec::new(
            Opts::new("textkit_operations_total", "Number of operations by module"),
            &["module"],
        )?;
        let decode_failures = IntCounter::new(
            "textkit_decode_failures_total",
            "Number of rejected decode inputs",
        )?;
        registry.register(Box::new(operations.clone()))?;
        registry.register(Box::new(decode_failures.clone()))?;
        Ok(Self {
            operations,
            decode_failures,
        })
    }

    pub fn record(&self, module: &str) {
        self.operations.with_label_values(&[module]).inc();
    }
}
