use crate::testing::*;
use crate::{AnalysisResult, Analyzer, Schema};
use test_context::TestContext;
pub use test_context::test_context;

/// Fresh analyzer (empty cache) paired with the fixture schema.
pub struct AnalyzerContext {
    pub analyzer: Analyzer,
    pub schema: Schema,
}

impl AnalyzerContext {
    pub fn analyze(&self, query: &str) -> AnalysisResult {
        self.analyzer.analyze(query, Some(&self.schema))
    }
}

impl TestContext for AnalyzerContext {
    fn setup() -> Self {
        crate::testing::common_init();
        Self {
            analyzer: Analyzer::with_oracle(Default::default(), 64),
            schema: fixture_schema(),
        }
    }
}
