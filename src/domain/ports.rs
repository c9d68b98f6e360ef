use crate::domain::model::ShowcaseOutput;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Showcase: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self) -> Result<ShowcaseOutput>;
}
