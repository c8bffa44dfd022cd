//! `HttpGenerationService` against a one-shot local HTTP server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use ttb_model::Faculty;
use ttb_submit::{GenerateRequest, GenerationService, Header, HttpGenerationService, SubmitError};

/// Accepts one connection, answers it, and yields the request body.
fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/generate", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
        }
        let mut request = vec![0; content_length];
        reader.read_exact(&mut request).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
        String::from_utf8(request).unwrap()
    });

    (endpoint, handle)
}

fn send(endpoint: &str) -> ttb_submit::Result<String> {
    let header = Header {
        university: "VTU".to_string(),
        department: "CSE".to_string(),
        academic: "2025-26".to_string(),
    };
    let mut faculty = Faculty::new();
    faculty.name = "MSK".to_string();
    let faculties = vec![faculty];

    let service = HttpGenerationService::new(endpoint, None).unwrap();
    service.generate(&GenerateRequest::new(&header, &faculties))
}

#[test]
fn success_returns_redirect_and_posts_json() {
    let (endpoint, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"ok":true,"redirect":"/result/42"}"#,
    );

    assert_eq!(send(&endpoint).unwrap(), "/result/42");

    let request: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
    assert_eq!(request["university"], "VTU");
    assert_eq!(request["faculties"][0]["Name"], "MSK");
}

#[test]
fn client_error_status_still_reads_rejection() {
    let (endpoint, server) = serve_once(
        "400 Bad Request",
        "application/json",
        r#"{"ok":false,"error":"No faculties provided"}"#,
    );

    let err = send(&endpoint).unwrap_err();
    server.join().unwrap();

    assert_eq!(
        err,
        SubmitError::Rejected {
            message: "No faculties provided".to_string(),
            traceback: Vec::new(),
        }
    );
}

#[test]
fn server_error_status_keeps_message_and_traceback() {
    let (endpoint, server) = serve_once(
        "500 Internal Server Error",
        "application/json",
        r#"{"ok":false,"error":"Solver failed","traceback":["line 1","line 2"]}"#,
    );

    let err = send(&endpoint).unwrap_err();
    server.join().unwrap();

    assert_eq!(err.user_message(), "Solver failed");
    assert!(matches!(
        err,
        SubmitError::Rejected { ref traceback, .. } if traceback.len() == 2
    ));
}

#[test]
fn unreadable_error_page_is_prefixed_with_status() {
    let (endpoint, server) = serve_once(
        "500 Internal Server Error",
        "text/html",
        "<html><body>Internal Server Error</body></html>",
    );

    let err = send(&endpoint).unwrap_err();
    server.join().unwrap();

    match err {
        SubmitError::InvalidResponse(detail) => {
            assert!(detail.starts_with("HTTP 500"), "{detail}");
        }
        other => panic!("expected an invalid response, got {other:?}"),
    }
}

#[test]
fn unreadable_success_body_has_no_status_prefix() {
    let (endpoint, server) = serve_once("200 OK", "text/plain", "done");

    let err = send(&endpoint).unwrap_err();
    server.join().unwrap();

    match err {
        SubmitError::InvalidResponse(detail) => assert!(!detail.starts_with("HTTP"), "{detail}"),
        other => panic!("expected an invalid response, got {other:?}"),
    }
}

#[test]
fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/generate", listener.local_addr().unwrap());
    drop(listener);

    let err = send(&endpoint).unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(err.is_retryable());
}
