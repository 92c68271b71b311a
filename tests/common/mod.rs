#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

use tempfile::TempDir;

/// Path to the compiled binary under test
pub fn storefront_binary() -> &'static str {
    env!("CARGO_BIN_EXE_storefront")
}

/// Helper struct to run storefront commands against an isolated data root
pub struct StorefrontTest {
    pub temp_dir: TempDir,
}

impl StorefrontTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        StorefrontTest { temp_dir }
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(storefront_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("STOREFRONT_ROOT", self.temp_dir.path())
            .env_remove("STOREFRONT_ENDPOINT")
            .env_remove("STOREFRONT_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute storefront command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.temp_dir.path().join("config.yaml"), content)
            .expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join("config.yaml")).ok()
    }

    pub fn write_storage(&self, content: &str) {
        fs::write(self.temp_dir.path().join("storage.json"), content)
            .expect("Failed to write storage file");
    }

    pub fn read_storage(&self) -> Option<serde_json::Value> {
        let content = fs::read_to_string(self.temp_dir.path().join("storage.json")).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Sample listing in the endpoint's response shape
pub const CATALOG_JSON: &str = r#"{
  "products": [
    {"id": 1, "title": "iPhone 9", "price": 549, "rating": 4.69, "thumbnail": "https://cdn.example/1.jpg"},
    {"id": 2, "title": "Essence Mascara", "price": 9.99, "rating": 4.94, "thumbnail": "https://cdn.example/2.jpg"},
    {"id": 3, "title": "apple airpods", "price": 129, "rating": 4.69, "thumbnail": "https://cdn.example/3.jpg"},
    {"id": 4, "title": "Samsung Universe", "price": 1249, "rating": 4.09, "thumbnail": "https://cdn.example/4.jpg"},
    {"id": 5, "title": "Calvin Klein", "price": 9.99, "rating": 4.0, "thumbnail": "https://cdn.example/5.jpg"},
    {"id": 6, "title": "Phone Stand", "price": 9.99, "rating": 4.94, "thumbnail": "https://cdn.example/6.jpg"}
  ],
  "total": 6,
  "skip": 0,
  "limit": 6
}"#;

/// Serve `body` with `status` to up to `requests` connections.
///
/// Returns the endpoint URL. The server thread exits once it has
/// answered `requests` connections.
pub fn serve_json(status: &'static str, body: &'static str, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut line = String::new();
            while reader.read_line(&mut line).is_ok() {
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/products")
}

/// An endpoint nothing listens on
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/products";
