//! Tests de integración para el servidor de desarrollo
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero dentro del
//! proceso y habla HTTP crudo por un `TcpStream` real, así que la suite
//! corre con un simple `cargo test` sin pasos previos.

use dev_server::config::Config;
use dev_server::server::{Server, ShutdownHandle, StartupError};
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Directorio raíz único por test, con limpieza manual al final
fn temp_root(tag: &str) -> PathBuf {
    let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "dev_server_it_{}_{}_{}",
        tag,
        std::process::id(),
        seq
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Servidor corriendo sobre `root`: dirección, handle de apagado y thread
fn start_server(root: &PathBuf) -> (SocketAddr, ShutdownHandle, JoinHandle<()>) {
    let mut config = Config::default();
    config.port = 0;
    config.root = root.clone();
    config.no_browser = true;

    let server = Server::bind(&config).expect("bind failed");
    let addr = server.local_addr().unwrap();
    let handle = server.shutdown_handle().unwrap();
    let thread = thread::spawn(move || server.run().unwrap());

    (addr, handle, thread)
}

/// Envía un request crudo y retorna la response completa como texto
fn send_request(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect failed");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream.write_all(raw.as_bytes()).unwrap();
    stream.flush().unwrap();
    stream.shutdown(std::net::Shutdown::Write).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

fn get(addr: SocketAddr, path: &str) -> String {
    send_request(addr, &format!("GET {} HTTP/1.0\r\n\r\n", path))
}

/// Extrae el body de una response HTTP cruda
fn extract_body(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

/// Los dos headers de no-caché, verbatim como exige el contrato
fn assert_no_cache_headers(response: &str) {
    assert!(
        response.contains("Cache-Control: no-store, no-cache, must-revalidate\r\n"),
        "Missing no-cache Cache-Control header in: {}",
        response
    );
    assert!(
        response.contains("Expires: 0\r\n"),
        "Missing Expires: 0 header in: {}",
        response
    );
}

#[test]
fn test_frontend_scenario() {
    // El escenario concreto: frontend.html existe y se sirve byte a byte
    let root = temp_root("frontend");
    fs::write(root.join("frontend.html"), "<html>OK</html>").unwrap();
    let (addr, handle, thread) = start_server(&root);

    let response = get(addr, "/frontend.html");
    assert!(response.contains("200 OK"), "got: {}", response);
    assert_eq!(extract_body(&response), "<html>OK</html>");
    assert_no_cache_headers(&response);

    let response = get(addr, "/missing.html");
    assert!(response.contains("404"), "got: {}", response);
    assert_no_cache_headers(&response);

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_exact_bytes_for_binary_file() {
    let root = temp_root("binary");
    let payload: Vec<u8> = (0u8..=255).collect();
    fs::write(root.join("blob.bin"), &payload).unwrap();
    let (addr, handle, thread) = start_server(&root);

    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(b"GET /blob.bin HTTP/1.0\r\n\r\n").unwrap();
    stream.shutdown(std::net::Shutdown::Write).unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();

    let header_end = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header/body separator")
        + 4;
    assert_eq!(&response[header_end..], &payload[..]);

    let headers = String::from_utf8_lossy(&response[..header_end]);
    assert!(headers.contains("200 OK"));
    assert!(headers.contains("Content-Length: 256\r\n"));
    assert!(headers.contains("Content-Type: application/octet-stream\r\n"));

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_index_html_served_for_directory() {
    let root = temp_root("index");
    fs::write(root.join("index.html"), "<h1>portada</h1>").unwrap();
    let (addr, handle, thread) = start_server(&root);

    let response = get(addr, "/");
    assert!(response.contains("200 OK"));
    assert_eq!(extract_body(&response), "<h1>portada</h1>");
    assert_no_cache_headers(&response);

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_directory_redirect_and_listing() {
    let root = temp_root("listing");
    fs::create_dir(root.join("assets")).unwrap();
    fs::write(root.join("assets").join("app.css"), "body{}").unwrap();
    let (addr, handle, thread) = start_server(&root);

    // Sin slash final: redirección 301 con Location y sin caché
    let response = get(addr, "/assets");
    assert!(response.contains("301 Moved Permanently"), "got: {}", response);
    assert!(response.contains("Location: /assets/\r\n"));
    assert_no_cache_headers(&response);

    // Con slash y sin index: listado HTML
    let response = get(addr, "/assets/");
    assert!(response.contains("200 OK"));
    let body = extract_body(&response);
    assert!(body.contains("Directory listing for /assets/"));
    assert!(body.contains("app.css"));

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_traversal_rejected() {
    let root = temp_root("traversal");
    let (addr, handle, thread) = start_server(&root);

    let response = get(addr, "/../../etc/passwd");
    assert!(response.contains("403 Forbidden"), "got: {}", response);
    assert_no_cache_headers(&response);

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_head_returns_headers_only() {
    let root = temp_root("head");
    fs::write(root.join("frontend.html"), "<html>OK</html>").unwrap();
    let (addr, handle, thread) = start_server(&root);

    let response = send_request(addr, "HEAD /frontend.html HTTP/1.0\r\n\r\n");
    assert!(response.contains("200 OK"));
    assert!(response.contains("Content-Length: 15\r\n"));
    assert_no_cache_headers(&response);
    assert_eq!(extract_body(&response), "");

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_unsupported_method_is_501() {
    let root = temp_root("method");
    let (addr, handle, thread) = start_server(&root);

    let response = send_request(addr, "DELETE /frontend.html HTTP/1.0\r\n\r\n");
    assert!(response.contains("501 Not Implemented"), "got: {}", response);
    assert_no_cache_headers(&response);

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_second_bind_reports_port_in_use() {
    let root = temp_root("in_use");
    let (addr, handle, thread) = start_server(&root);

    let mut config = Config::default();
    config.port = addr.port();
    config.root = root.clone();
    config.no_browser = true;

    match Server::bind(&config) {
        Err(StartupError::PortInUse { port }) => assert_eq!(port, addr.port()),
        Err(other) => panic!("Expected PortInUse, got: {}", other),
        Ok(_) => panic!("Second bind on a busy port should fail"),
    }

    // El primer servidor sigue funcionando después del intento fallido
    fs::write(root.join("still.txt"), "here").unwrap();
    let response = get(addr, "/still.txt");
    assert!(response.contains("200 OK"));

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_shutdown_within_bounded_time() {
    let root = temp_root("shutdown");
    let mut config = Config::default();
    config.port = 0;
    config.root = root.clone();
    config.no_browser = true;

    let server = Server::bind(&config).unwrap();
    let handle = server.shutdown_handle().unwrap();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        server.run().unwrap();
        tx.send(()).unwrap();
    });

    handle.request_stop();
    rx.recv_timeout(Duration::from_secs(5))
        .expect("accept loop did not stop in bounded time");

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_concurrent_requests() {
    let root = temp_root("concurrent");
    for i in 0..8 {
        fs::write(root.join(format!("f{}.txt", i)), format!("contenido {}", i)).unwrap();
    }
    let (addr, handle, thread) = start_server(&root);

    let mut clients = Vec::new();
    for i in 0..8 {
        clients.push(thread::spawn(move || {
            let response = get(addr, &format!("/f{}.txt", i));
            assert!(response.contains("200 OK"), "request {} failed", i);
            assert_eq!(extract_body(&response), format!("contenido {}", i));
        }));
    }
    for client in clients {
        client.join().unwrap();
    }

    handle.request_stop();
    thread.join().unwrap();
    fs::remove_dir_all(&root).ok();
}
