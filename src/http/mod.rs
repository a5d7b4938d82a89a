//! # Módulo HTTP
//!
//! Este módulo implementa la parte del protocolo HTTP/1.0 que necesita
//! un servidor de archivos estáticos, sin librerías de alto nivel:
//!
//! - Parsing de requests (request line + headers, path percent-decoded)
//! - Construcción de responses
//! - Manejo de status codes
//!
//! ## Formato de Request
//!
//! ```text
//! GET /frontend.html HTTP/1.0\r\n
//! Host: 127.0.0.1:8000\r\n
//! \r\n
//! ```
//!
//! ## Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 15\r\n
//! Cache-Control: no-store, no-cache, must-revalidate\r\n
//! Expires: 0\r\n
//! \r\n
//! <html>OK</html>
//! ```

pub mod request; // Parsing de HTTP requests
pub mod response; // Construcción de HTTP responses
pub mod status; // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
