use crate::core::{Showcase, ShowcaseOutput};
use crate::utils::error::Result;

/// Runs showcases in registration order and stops at the first failure.
pub struct ShowcaseEngine {
    showcases: Vec<Box<dyn Showcase>>,
}

impl ShowcaseEngine {
    pub fn new() -> Self {
        Self {
            showcases: Vec::new(),
        }
    }

    pub fn with_showcase<S: Showcase + 'static>(mut self, showcase: S) -> Self {
        self.showcases.push(Box::new(showcase));
        self
    }

    pub fn len(&self) -> usize {
        self.showcases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.showcases.is_empty()
    }

    pub async fn run(&self) -> Result<Vec<ShowcaseOutput>> {
        tracing::info!("Running {} showcases", self.showcases.len());

        let mut outputs = Vec::with_capacity(self.showcases.len());
        for showcase in &self.showcases {
            tracing::debug!("Starting showcase '{}'", showcase.name());
            let output = showcase.run().await.map_err(|e| {
                tracing::error!("Showcase '{}' failed: {}", showcase.name(), e);
                e
            })?;

            for line in &output.lines {
                tracing::info!("[{}] {}", output.name, line);
            }
            outputs.push(output);
        }

        tracing::info!("Finished {} showcases", outputs.len());
        Ok(outputs)
    }
}

impl Default for ShowcaseEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::KitError;
    use async_trait::async_trait;

    struct Fixed(&'static str);

    #[async_trait]
    impl Showcase for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        async fn run(&self) -> Result<ShowcaseOutput> {
            Ok(ShowcaseOutput::new(self.0).line("ok"))
        }
    }

    struct Failing;

    #[async_trait]
    impl Showcase for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn run(&self) -> Result<ShowcaseOutput> {
            Err(KitError::ParseError {
                kind: "number".to_string(),
                input: "x".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_runs_in_order() {
        let engine = ShowcaseEngine::new()
            .with_showcase(Fixed("first"))
            .with_showcase(Fixed("second"));
        let outputs = engine.run().await.unwrap();
        let names: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_stops_at_first_error() {
        let engine = ShowcaseEngine::new()
            .with_showcase(Fixed("first"))
            .with_showcase(Failing)
            .with_showcase(Fixed("never"));
        assert!(matches!(
            engine.run().await,
            Err(KitError::ParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_engine() {
        let engine = ShowcaseEngine::default();
        assert!(engine.is_empty());
        assert!(engine.run().await.unwrap().is_empty());
    }
}
