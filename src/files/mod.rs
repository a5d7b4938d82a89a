//! # Resolución de Archivos Estáticos
//! src/files/mod.rs
//!
//! Este módulo traduce el path de un request a una respuesta HTTP:
//!
//! 1. Sanitiza el path (nada de `..`, todo relativo a la raíz)
//! 2. Archivo regular → 200 con los bytes exactos y Content-Type inferido
//! 3. Directorio sin slash final → 301 hacia el path con slash
//! 4. Directorio con slash → `index.html`, `index.htm`, o listado HTML
//! 5. Nada → 404
//!
//! Los errores por request nunca tumban el servidor: se convierten en
//! respuestas 4xx/5xx.

use crate::http::{Method, Request, Response, StatusCode};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Archivos índice que se prueban al pedir un directorio, en orden
const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Directorio raíz desde el que se sirven archivos
///
/// La raíz es un parámetro explícito: el proceso nunca cambia su working
/// directory. Toda resolución es relativa a `root`.
pub struct StaticDir {
    root: PathBuf,
}

impl StaticDir {
    /// Crea un `StaticDir` sobre `root`
    ///
    /// Canonicaliza la ruta, así que falla si el directorio no existe o
    /// no es accesible.
    pub fn new(root: &Path) -> io::Result<Self> {
        let root = root.canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", root.display()),
            ));
        }
        Ok(Self { root })
    }

    /// Directorio raíz canonicalizado
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Genera la respuesta para un request GET o HEAD
    ///
    /// HEAD recibe exactamente los mismos headers que GET (incluido
    /// Content-Length) pero sin body.
    pub fn response_for(&self, request: &Request) -> Response {
        let response = self.resolve(request.path());
        match request.method() {
            Method::GET => response,
            Method::HEAD => response.without_body(),
        }
    }

    /// Resuelve un path decodificado contra la raíz
    fn resolve(&self, path: &str) -> Response {
        let relative = match Self::sanitize(path) {
            Some(rel) => rel,
            None => {
                return Response::error(
                    StatusCode::Forbidden,
                    "Path escapes the served directory",
                )
            }
        };

        let full = self.root.join(relative);

        if full.is_dir() {
            // Igual que cualquier servidor estático: el navegador necesita
            // el slash final para que los links relativos resuelvan
            if !path.ends_with('/') {
                return Response::redirect(&format!("{}/", encode_path(path)));
            }
            return self.dir_response(&full, path);
        }

        if full.is_file() {
            return self.file_response(&full);
        }

        Response::error(StatusCode::NotFound, "File not found")
    }

    /// Convierte un path de request en una ruta relativa segura
    ///
    /// Retorna `None` si el path intenta salir de la raíz. Los segmentos
    /// vacíos y `.` se descartan; cualquier `..` se rechaza de plano.
    fn sanitize(path: &str) -> Option<PathBuf> {
        let mut relative = PathBuf::new();

        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                other => {
                    // Un segmento que el sistema interprete como algo más
                    // que un nombre (p.ej. "C:\..." en Windows) tampoco vale
                    let as_path = Path::new(other);
                    if as_path.components().count() != 1 {
                        return None;
                    }
                    match as_path.components().next() {
                        Some(Component::Normal(_)) => relative.push(other),
                        _ => return None,
                    }
                }
            }
        }

        Some(relative)
    }

    /// Respuesta 200 con los bytes exactos del archivo
    fn file_response(&self, path: &Path) -> Response {
        match fs::read(path) {
            Ok(bytes) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                Response::new(StatusCode::Ok)
                    .with_header("Content-Type", mime.as_ref())
                    .with_body_bytes(bytes)
            }
            Err(e) => io_error_response(&e),
        }
    }

    /// Respuesta para un directorio pedido con slash final
    fn dir_response(&self, dir: &Path, request_path: &str) -> Response {
        for index in INDEX_FILES {
            let candidate = dir.join(index);
            if candidate.is_file() {
                return self.file_response(&candidate);
            }
        }
        self.listing_response(dir, request_path)
    }

    /// Listado HTML del directorio, entradas ordenadas por nombre
    fn listing_response(&self, dir: &Path, request_path: &str) -> Response {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => return io_error_response(&e),
        };

        let mut names: Vec<String> = Vec::new();
        for entry in entries.flatten() {
            let mut name = entry.file_name().to_string_lossy().into_owned();
            if entry.path().is_dir() {
                name.push('/');
            }
            names.push(name);
        }
        names.sort();

        let title = format!("Directory listing for {}", html_escape(request_path));
        let mut body = String::new();
        body.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n");
        body.push_str("<meta charset=\"utf-8\">\n");
        body.push_str(&format!("<title>{}</title>\n", title));
        body.push_str("</head>\n<body>\n");
        body.push_str(&format!("<h1>{}</h1>\n<hr>\n<ul>\n", title));
        for name in &names {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                encode_path(name),
                html_escape(name)
            ));
        }
        body.push_str("</ul>\n<hr>\n</body>\n</html>\n");

        Response::html(&body)
    }
}

/// Traduce un error de IO por request al status HTTP correspondiente
fn io_error_response(e: &io::Error) -> Response {
    match e.kind() {
        io::ErrorKind::NotFound => Response::error(StatusCode::NotFound, "File not found"),
        io::ErrorKind::PermissionDenied => {
            Response::error(StatusCode::Forbidden, "Permission denied")
        }
        _ => Response::error(
            StatusCode::InternalServerError,
            &format!("IO error: {}", e),
        ),
    }
}

/// Percent-encode de un path para usarlo en Location o en un href
///
/// Conserva los caracteres no reservados y el `/`; el resto se codifica
/// byte a byte.
fn encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}

/// Escapa texto para incrustarlo en HTML
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
