use actix_web::{HttpRequest, HttpResponse};
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

pub type HandlerFuture = LocalBoxFuture<'static, HttpResponse>;

/// Type-erased view callable held by a route.
///
/// Cloning is cheap and the handler can be shared between workers.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(HttpRequest) -> HandlerFuture + Send + Sync>);

impl Handler {
    pub fn new<F, Fut>(view: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + 'static,
    {
        Self(Arc::new(move |req| view(req).boxed_local()))
    }

    pub fn call(&self, req: HttpRequest) -> HandlerFuture {
        (self.0)(req)
    }

    /// Whether both handlers refer to the same callable.
    #[cfg(test)]
    pub fn same_as(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Handler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Handler")
    }
}
