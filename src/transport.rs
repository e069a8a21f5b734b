//! The transport capability the managed client decorates.
//!
//! A [`Transport`] performs the actual request. The managed client never
//! inspects what it returns: the success value and the transport's own errors
//! are handed back to the caller as-is. The only requirement on the error type
//! is that a [`TimeoutError`] can be converted into it, so a timeout travels on
//! the same channel as every other failure.

use std::future::Future;
use std::sync::Arc;

use crate::error::TimeoutError;

/// Single-method capability: fetch a URL.
pub trait Transport: Send + Sync {
    /// What a successful request yields. Opaque to the managed client.
    type Output;

    /// The transport's failure type.
    type Error: From<TimeoutError>;

    fn get(&self, url: &str) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

impl<T: Transport> Transport for &T {
    type Output = T::Output;
    type Error = T::Error;

    fn get(&self, url: &str) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).get(url)
    }
}

impl<T: Transport> Transport for Arc<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn get(&self, url: &str) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).get(url)
    }
}

impl<T: Transport> Transport for Box<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn get(&self, url: &str) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (**self).get(url)
    }
}

/// Adapts a closure into a [`Transport`].
///
/// The closure receives an owned copy of the URL, so the future it returns
/// does not borrow from the caller.
///
/// ```rust,ignore
/// let transport = FnTransport::new(|url: String| async move {
///     Ok::<_, HttpError>(url.len())
/// });
/// ```
#[derive(Clone)]
pub struct FnTransport<F> {
    f: F,
}

impl<F> FnTransport<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut, O, E> Transport for FnTransport<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<O, E>> + Send,
    E: From<TimeoutError>,
{
    type Output = O;
    type Error = E;

    fn get(&self, url: &str) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        (self.f)(url.to_string())
    }
}
