use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// 評分資料來源，只在啟動時呼叫一次
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Record>>;
}
