use axum::body::{to_bytes, Body};
use axum::http::{header, response::Parts, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Format a byte count with dot-separated thousands
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Response with the original head and an empty body.
/// The upstream `Content-Length` no longer describes the body, so it is dropped.
fn without_body(mut parts: Parts) -> Response {
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::empty())
}

/// Logs method, path, status, body size and duration of every request
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} body read failed after {}ms: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return without_body(parts);
        }
    };

    tracing::info!(
        "{:>6} {} -> {} | {:>5}ms | {:>10} bytes",
        method.as_str(),
        uri.path(),
        parts.status.as_u16(),
        start.elapsed().as_millis(),
        format_number(bytes.len())
    );

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[tokio::test]
    async fn test_without_body_drops_content_length() {
        let response = Response::builder()
            .status(200)
            .header(header::CONTENT_LENGTH, "4096")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("partial"))
            .unwrap();
        let (parts, _) = response.into_parts();

        let response = without_body(parts);
        assert_eq!(response.status().as_u16(), 200);
        assert!(response.headers().get(header::CONTENT_LENGTH).is_none());
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
