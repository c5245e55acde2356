use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::logging::{FileLogStore, InboundRequest, LogHandle};
use crate::openai::ChatCompletionResponse;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// 请求记录存储抽象（默认实现为按请求落盘的文本文件）
pub trait RequestLogStore: Send + Sync {
    fn write_initial<'a>(&'a self, snapshot: &'a InboundRequest) -> BoxFuture<'a, Result<LogHandle>>;
    fn append_response<'a>(
        &'a self,
        handle: &'a LogHandle,
        response: &'a ChatCompletionResponse,
    ) -> BoxFuture<'a, Result<()>>;
    fn append_status<'a>(&'a self, handle: &'a LogHandle, status: u16) -> BoxFuture<'a, Result<()>>;
}

impl RequestLogStore for FileLogStore {
    fn write_initial<'a>(&'a self, snapshot: &'a InboundRequest) -> BoxFuture<'a, Result<LogHandle>> {
        Box::pin(async move { self.write_initial(snapshot).await })
    }

    fn append_response<'a>(
        &'a self,
        handle: &'a LogHandle,
        response: &'a ChatCompletionResponse,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { self.append_response(handle, response).await })
    }

    fn append_status<'a>(&'a self, handle: &'a LogHandle, status: u16) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { self.append_status(handle, status).await })
    }
}
