use http_body::{Body, Frame, SizeHint};
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use std::time::Instant;
use tonic::codegen::{http, Service};
use tonic::Code;

const UNARY: &str = "unary";

/// Client side gRPC metrics, named after the go-grpc-prometheus client metrics.
#[derive(Debug, Clone)]
pub struct ClientMetrics {
    started: IntCounterVec,
    handled: IntCounterVec,
    handling_seconds: HistogramVec,
}

impl ClientMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let started = IntCounterVec::new(
            Opts::new(
                "grpc_client_started_total",
                "Total number of RPCs started on the client.",
            ),
            &["grpc_type", "grpc_service", "grpc_method"],
        )?;

        let handled = IntCounterVec::new(
            Opts::new(
                "grpc_client_handled_total",
                "Total number of RPCs completed by the client, regardless of success or failure.",
            ),
            &["grpc_type", "grpc_service", "grpc_method", "grpc_code"],
        )?;

        let handling_seconds = HistogramVec::new(
            HistogramOpts::new(
                "grpc_client_handling_seconds",
                "Histogram of response latency (seconds) of the gRPC until it is finished by the application.",
            ),
            &["grpc_type", "grpc_service", "grpc_method"],
        )?;

        Ok(Self {
            started,
            handled,
            handling_seconds,
        })
    }

    pub fn register(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        registry.register(Box::new(self.started.clone()))?;
        registry.register(Box::new(self.handled.clone()))?;
        registry.register(Box::new(self.handling_seconds.clone()))?;
        Ok(())
    }
}

/// A call whose final status has not been seen yet.
#[derive(Debug)]
struct InFlight {
    metrics: ClientMetrics,
    service: String,
    method: String,
    start: Instant,
}

impl InFlight {
    fn finish(self, code: Code) {
        let code = format!("{:?}", code);
        self.metrics
            .handled
            .with_label_values(&[UNARY, self.service.as_str(), self.method.as_str(), code.as_str()])
            .inc();
        self.metrics
            .handling_seconds
            .with_label_values(&[UNARY, self.service.as_str(), self.method.as_str()])
            .observe(self.start.elapsed().as_secs_f64());
    }
}

/// Wraps a channel and records [`ClientMetrics`] for every call going through it.
#[derive(Debug, Clone)]
pub struct MetricsService<S> {
    inner: S,
    metrics: ClientMetrics,
}

impl<S> MetricsService<S> {
    pub fn new(inner: S, metrics: ClientMetrics) -> Self {
        Self { inner, metrics }
    }
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for MetricsService<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = http::Response<MetricsBody<ResBody>>;

    type Error = S::Error;

    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<ReqBody>) -> Self::Future {
        let (service, method) = split_method(req.uri().path());
        self.metrics
            .started
            .with_label_values(&[UNARY, service.as_str(), method.as_str()])
            .inc();

        let call = InFlight {
            metrics: self.metrics.clone(),
            service,
            method,
            start: Instant::now(),
        };
        let fut = self.inner.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(response) => {
                    let (parts, body) = response.into_parts();
                    // Trailers-only responses carry the status in the headers.
                    let in_flight = match status_code(&parts.headers) {
                        Some(code) => {
                            call.finish(code);
                            None
                        }
                        None => Some(call),
                    };
                    Ok(http::Response::from_parts(
                        parts,
                        MetricsBody {
                            inner: body,
                            in_flight,
                        },
                    ))
                }
                Err(e) => {
                    call.finish(Code::Unavailable);
                    Err(e)
                }
            }
        })
    }
}

/// Response body that records the call once its `grpc-status` trailer arrives.
///
/// A body that ends without a status counts as `Unknown`, one dropped before
/// its end as `Cancelled`.
#[derive(Default)]
pub struct MetricsBody<B> {
    inner: B,
    in_flight: Option<InFlight>,
}

impl<B> MetricsBody<B> {
    fn finish(&mut self, code: Code) {
        if let Some(call) = self.in_flight.take() {
            call.finish(code);
        }
    }
}

impl<B> Body for MetricsBody<B>
where
    B: Body + Unpin,
{
    type Data = B::Data;
    type Error = B::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        let frame = ready!(Pin::new(&mut this.inner).poll_frame(cx));

        match &frame {
            Some(Ok(frame)) => {
                if let Some(trailers) = frame.trailers_ref() {
                    this.finish(status_code(trailers).unwrap_or(Code::Unknown));
                }
            }
            Some(Err(_)) | None => this.finish(Code::Unknown),
        }

        Poll::Ready(frame)
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<B> Drop for MetricsBody<B> {
    fn drop(&mut self) {
        self.finish(Code::Cancelled);
    }
}

/// Splits `/package.Service/Method` into its service and method parts.
fn split_method(path: &str) -> (String, String) {
    match path.trim_start_matches('/').rsplit_once('/') {
        Some((service, method)) => (service.to_string(), method.to_string()),
        None => ("unknown".to_string(), path.to_string()),
    }
}

fn status_code(headers: &http::HeaderMap) -> Option<Code> {
    headers
        .get("grpc-status")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i32>().ok())
        .map(Code::from_i32)
}
