use crate::harness::config::patch_config;
use crate::harness::{CapturedEvent, init_test_tracing};
use honeydash_core::conf::load_config;
use honeydash_core::server::build_pingora_server;
use reqwest::blocking::{Client, RequestBuilder};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Handle to a running Honeydash test server.
pub struct TestServer {
    base_url: String,
    client: Client,
    log_path: PathBuf,
    // Owns the directory holding the honeypot log.
    _dir: TempDir,
}

impl TestServer {
    /// Start a Honeydash instance from a config fixture, serving `log` as
    /// the honeypot log. `None` leaves the log file absent.
    ///
    /// Ports are allocated dynamically and injected into the config.
    pub fn start(fixture: &str, log: Option<&str>) -> Self {
        // Initialize tracing (this must happen first).
        let events = events();
        init_test_tracing(events.clone());
        events.lock().unwrap().clear();

        let listen_port = free_port();

        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log_path = dir.path().join("cowrie.json");
        if let Some(contents) = log {
            fs::write(&log_path, contents).expect("failed to write honeypot log");
        }

        let fixture_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("config")
            .join(fixture);

        assert!(
            fixture_dir.exists(),
            "fixture config directory does not exist: {:?}",
            fixture_dir
        );

        let cfg = load_config(&fixture_dir).expect("failed to load fixture config");
        let cfg = patch_config(cfg, listen_port, &log_path);

        let server = build_pingora_server(&cfg).expect("failed to build honeydash server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            log_path,
            _dir: dir,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.client.head(self.url(path))
    }

    /// Append lines to the honeypot log, the way the honeypot would.
    pub fn append_log(&self, lines: &str) {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .expect("failed to open honeypot log");
        f.write_all(lines.as_bytes())
            .expect("failed to append to honeypot log");
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Tracing events captured so far, across all servers in this process.
    pub fn captured_events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Poll until the server responds (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
