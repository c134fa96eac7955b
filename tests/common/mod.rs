//! Common test utilities for integration tests.
//!
//! Provides a one-shot HTTP fixture: a real TCP listener that answers a
//! single request with a canned response, so client behavior can be
//! exercised over live sockets without a webhook logger running.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// A local server that answers exactly one HTTP request with a canned
/// response, then exits
pub struct OneShotServer {
    /// Base URL to hand to the client under test
    pub url: String,
    handle: JoinHandle<()>,
}

impl OneShotServer {
    /// Serve one response with the given status line and body
    pub fn spawn(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        let handle = thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                // Drain the request head; its content does not matter here.
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);

                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self {
            url: format!("http://{addr}"),
            handle,
        }
    }

    /// Serve a 200 response with the given JSON body
    pub fn spawn_ok(body: &'static str) -> Self {
        Self::spawn("HTTP/1.1 200 OK", body)
    }

    /// Wait for the fixture thread to finish
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

/// A base URL whose port was just released, so connecting to it fails
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}")
}
