//! # Parsing de Requests HTTP
//!
//! Este módulo implementa un parser HTTP/1.0 desde cero, limitado a lo
//! que necesita un servidor de archivos estáticos: la request line y los
//! headers. El body nunca se usa (GET/HEAD no llevan).
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /assets/logo%20v2.png?cache=no HTTP/1.0\r\n
//! Host: 127.0.0.1:8000\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! El path llega percent-encoded; aquí se decodifica (`%20` → espacio)
//! para que los nombres de archivo con espacios resuelvan bien. La query
//! string se separa del path y no participa en la resolución de archivos.

use std::collections::HashMap;

/// Métodos HTTP que un servidor estático atiende
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener el contenido de un archivo
    GET,

    /// HEAD - Como GET pero solo retorna headers
    HEAD,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna `UnsupportedMethod` para cualquier otro método; el
    /// servidor lo traduce a 501 Not Implemented.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET o HEAD)
    method: Method,

    /// Path ya decodificado, sin query string (ej: "/frontend.html")
    path: String,

    /// Query string cruda, si venía (ej: "cache=no")
    query: Option<String>,

    /// Headers HTTP (ej: {"Host": "127.0.0.1:8000"})
    headers: HashMap<String, String>,

    /// Versión HTTP ("HTTP/1.0" o "HTTP/1.1")
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// Método HTTP no soportado (el servidor responde 501)
    UnsupportedMethod(String),

    /// Versión HTTP desconocida
    InvalidHttpVersion(String),

    /// Header malformado
    InvalidHeader(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::InvalidHttpVersion(v) => write!(f, "Invalid HTTP version: {}", v),
            ParseError::InvalidHeader(h) => write!(f, "Invalid header: {}", h),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use dev_server::http::Request;
    ///
    /// let raw = b"GET /frontend.html HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/frontend.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Solo necesitamos request line + headers; validamos UTF-8 de una vez
        let request_str =
            std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidRequestLine)?;

        if request_str.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let lines: Vec<&str> = request_str.split("\r\n").collect();

        // 1. Request line (primera línea)
        let (method, path, query, version) = Self::parse_request_line(lines[0])?;

        // 2. Headers (hasta la línea vacía)
        let headers = Self::parse_headers(&lines[1..])?;

        Ok(Request {
            method,
            path,
            query,
            headers,
            version,
        })
    }

    /// Parsea la request line: `GET /path?query HTTP/1.0`
    fn parse_request_line(
        line: &str,
    ) -> Result<(Method, String, Option<String>, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Debe tener exactamente 3 partes: METHOD PATH VERSION
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = Method::from_str(parts[0])?;
        let (path, query) = Self::split_target(parts[1]);

        let version = parts[2].to_string();
        if version != "HTTP/1.0" && version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version));
        }

        Ok((method, path, query, version))
    }

    /// Separa el target en path decodificado y query cruda
    ///
    /// Ejemplo: "/docs/gu%C3%ADa.html?v=2" → ("/docs/guía.html", Some("v=2"))
    fn split_target(target: &str) -> (String, Option<String>) {
        match target.find('?') {
            Some(pos) => (
                Self::percent_decode(&target[..pos]),
                Some(target[pos + 1..].to_string()),
            ),
            None => (Self::percent_decode(target), None),
        }
    }

    /// Decodifica secuencias percent-encoded (`%XX`) de un path
    ///
    /// Las secuencias inválidas se dejan tal cual, y los bytes que no
    /// formen UTF-8 válido se reemplazan. El `+` NO se traduce a espacio:
    /// esa regla aplica solo a query strings, no a paths.
    fn percent_decode(s: &str) -> String {
        let bytes = s.as_bytes();
        let mut decoded: Vec<u8> = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .and_then(|h| std::str::from_utf8(h).ok());
                if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    decoded.push(byte);
                    i += 3;
                    continue;
                }
            }
            decoded.push(bytes[i]);
            i += 1;
        }

        String::from_utf8_lossy(&decoded).into_owned()
    }

    /// Parsea los headers HTTP (`Name: Value`, uno por línea)
    fn parse_headers(lines: &[&str]) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.trim().is_empty() {
                break;
            }

            if let Some(colon_pos) = line.find(':') {
                let name = line[..colon_pos].trim().to_string();
                let value = line[colon_pos + 1..].trim().to_string();
                headers.insert(name, value);
            } else {
                return Err(ParseError::InvalidHeader(line.to_string()));
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request, ya decodificado y sin query
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la query string cruda, si venía en el target
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }
}
