#![cfg(feature = "use_reqwest")]

use hawk_request::{sign, AuthCredential, AuthHeader, Client, ClientConfig, RequestTarget};
use pretty_assertions::assert_eq;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::str::FromStr;
use std::sync::mpsc;
use std::thread;

/// The request line and headers of one request received by the test server.
struct Received {
    request_line: String,
    headers: Vec<(String, String)>,
}

impl Received {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve one connection per reply, in order, reporting each request on the returned channel.
fn serve(replies: Vec<String>) -> (u16, mpsc::Receiver<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for reply in replies {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut headers = vec![];
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some(pos) = line.find(':') {
                    headers.push((line[..pos].to_string(), line[pos + 1..].trim().to_string()));
                }
            }
            let received = Received {
                request_line: request_line.trim_end().to_string(),
                headers,
            };
            // drain the body so closing the socket does not reset the connection
            let length = received
                .header("Content-Length")
                .map_or(0, |v| v.parse::<usize>().unwrap());
            let mut body = vec![0; length];
            reader.read_exact(&mut body).unwrap();
            tx.send(received).unwrap();
            stream.write_all(reply.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });
    (port, rx)
}

fn credential() -> AuthCredential {
    AuthCredential::new("booking-client", "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn")
}

#[test]
fn follows_redirect_and_parses_response() {
    let body = "{\"ok\":true,\"items\":[1,2]}";
    let (port, received) = serve(vec![
        "HTTP/1.1 302 Found\r\nLocation: /v1/final\r\nContent-Length: 0\r\n\
         Connection: close\r\n\r\n"
            .to_string(),
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nX-Served-By: final\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
    ]);

    let config = ClientConfig::new()
        .server("127.0.0.1")
        .port(port)
        .auth(credential());
    let client = Client::new(config).unwrap();
    let response = client
        .request("GET", "v1/start", &[("a", "1"), ("b", "2")])
        .unwrap();

    assert_eq!(response.status(), Some(200));
    assert_eq!(response.status_line, Some("HTTP/1.1 200 OK".to_string()));
    assert_eq!(response.headers.get("x-served-by"), Some("final"));
    assert_eq!(response.headers.get("X-Served-By"), None);
    assert_eq!(
        response.headers.get_ignore_case("Content-Type"),
        Some("application/json")
    );
    assert_eq!(response.body, serde_json::json!({"ok": true, "items": [1, 2]}));

    let first = received.recv().unwrap();
    assert_eq!(first.request_line, "GET /v1/start?a=1&b=2 HTTP/1.1");
    assert_eq!(
        first.header("Content-Type"),
        Some("application/json; charset=utf-8")
    );
    let header = AuthHeader::from_str(first.header("Authorization").unwrap()).unwrap();
    assert_eq!(
        first.header("x-identifier"),
        Some(sign::identifier(&header.stamp()).as_str())
    );
    let target = RequestTarget {
        method: "GET",
        endpoint: "v1/start?a=1&b=2",
        host: "127.0.0.1",
        port,
    };
    assert!(sign::validate_mac(&header, &credential(), &target).unwrap());

    let second = received.recv().unwrap();
    assert_eq!(second.request_line, "GET /v1/final HTTP/1.1");
}

#[test]
fn post_body_reaches_server() {
    let (port, received) = serve(vec![
        "HTTP/1.1 201 Created\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    ]);
    let client = Client::new(ClientConfig::new().server("127.0.0.1").port(port)).unwrap();
    let response = client.request("POST", "v1/bookings", &[("ref", "A B")]).unwrap();

    assert_eq!(response.status(), Some(201));
    assert_eq!(response.body, serde_json::Value::Null);

    let request = received.recv().unwrap();
    assert_eq!(request.request_line, "POST /v1/bookings HTTP/1.1");
    assert_eq!(request.header("Content-Length"), Some("7"));
    assert_eq!(request.header("Authorization"), None);
}

#[test]
fn connection_refused_is_transport_error() {
    // bind and drop to find a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = Client::new(ClientConfig::new().server("127.0.0.1").port(port)).unwrap();
    match client.request("GET", "v1/x", &[("a", "1")]) {
        Err(hawk_request::Error::Transport(_)) => {}
        other => panic!("expected a transport error, got {:?}", other),
    }
}
