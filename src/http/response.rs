//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.0
//! de forma programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta HTTP/1.0
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 15\r\n
//! Cache-Control: no-store, no-cache, must-revalidate\r\n
//! \r\n
//! <html>OK</html>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use dev_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/html")
//!     .with_body("<html>OK</html>");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;
use std::collections::HashMap;

/// Representa una respuesta HTTP/1.0 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    /// Usamos HashMap para evitar duplicados
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta (versión builder)
    ///
    /// Si el header ya existe, se sobrescribe.
    ///
    /// # Ejemplo
    /// ```
    /// use dev_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/css");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self.headers
            .insert("Content-Length".to_string(), self.body.len().to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Es el camino normal para archivos: los bytes se envían tal cual,
    /// sin recodificar (imágenes, fuentes, etc.).
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.headers
            .insert("Content-Length".to_string(), self.body.len().to_string());
        self
    }

    /// Descarta el body pero conserva los headers, incluido Content-Length
    ///
    /// Esto implementa la semántica de HEAD: el cliente recibe los mismos
    /// headers que recibiría con GET, sin el contenido.
    pub fn without_body(mut self) -> Self {
        self.body = Vec::new();
        self
    }

    /// Crea una respuesta HTML exitosa (200 OK)
    ///
    /// # Ejemplo
    /// ```
    /// use dev_server::http::Response;
    ///
    /// let response = Response::html("<h1>Listado</h1>");
    /// ```
    pub fn html(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_body(body)
    }

    /// Crea una respuesta de error con cuerpo de texto plano
    ///
    /// # Ejemplo
    /// ```
    /// use dev_server::http::{Response, StatusCode};
    ///
    /// let response = Response::error(StatusCode::NotFound, "File not found");
    /// ```
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = format!("{}\n{}\n", status, message);
        Self::new(status)
            .with_header("Content-Type", "text/plain; charset=utf-8")
            .with_body(&body)
    }

    /// Crea una redirección 301 hacia `location`
    ///
    /// La usamos cuando piden un directorio sin el slash final, igual que
    /// hace cualquier servidor de archivos estáticos.
    pub fn redirect(location: &str) -> Self {
        Self::new(StatusCode::MovedPermanently)
            .with_header("Location", location)
            .with_header("Content-Length", "0")
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo HTTP/1.0:
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene el valor de un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
