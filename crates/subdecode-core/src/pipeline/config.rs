//! Pipeline configuration.

use serde::Serialize;

/// What to do when a source yields no entries but the stored artifact has some
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySourcePolicy {
    /// Treat the empty fetch as an anomaly: fail the run, keep the artifact
    #[default]
    Refuse,
    /// Treat it as a normal diff: every stored entry is removed
    Overwrite,
}

/// Run-level settings for the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub empty_source_policy: EmptySourcePolicy,
}

impl PipelineConfig {
    pub fn with_empty_source_policy(mut self, policy: EmptySourcePolicy) -> Self {
        self.empty_source_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refuses_empty_sources() {
        assert_eq!(
            PipelineConfig::default().empty_source_policy,
            EmptySourcePolicy::Refuse
        );
        let config = PipelineConfig::default().with_empty_source_policy(EmptySourcePolicy::Overwrite);
        assert_eq!(config.empty_source_policy, EmptySourcePolicy::Overwrite);
    }
}
