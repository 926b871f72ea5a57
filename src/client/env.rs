use crate::client::ClientError;
use std::future::Future;

/// What a purchase handler needs from the page it runs in.
pub trait ShopEnv {
    /// Blocking yes/no dialog.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);

    fn reload(&self);

    /// POSTs to `path` and resolves to the raw response body, whatever the
    /// status code. `body` is sent as JSON when present.
    fn post(&self, path: &str, body: Option<String>) -> impl Future<Output = Result<String, ClientError>>;
}
