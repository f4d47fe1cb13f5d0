// Use case shapes shared by every bounded context.
//
// A command changes state and hands back what it created. A query only reads.
// Both take their input by value and answer with an explicit Result so the
// caller always handles the rejected path.

use async_trait::async_trait;

#[async_trait]
pub trait Command<TArgs: Send + 'static>: Send + Sync {
    type Output: Send;
    type Error: std::error::Error + Send;

    async fn execute(&self, args: TArgs) -> Result<Self::Output, Self::Error>;
}

#[async_trait]
pub trait Query<TArgs: Send + 'static>: Send + Sync {
    type Output: Send;
    type Error: std::error::Error + Send;

    async fn execute(&self, args: TArgs) -> Result<Self::Output, Self::Error>;
}
