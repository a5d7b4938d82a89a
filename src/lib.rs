//! # Dev Server
//! src/lib.rs
//!
//! Servidor estático de desarrollo para el frontend: sirve los archivos
//! de un directorio por HTTP/1.0 con la caché deshabilitada en toda
//! respuesta, y abre el navegador en la página de entrada un instante
//! después de arrancar.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y construcción del protocolo HTTP/1.0
//! - `files`: Resolución de paths a archivos, índices y listados
//! - `server`: Socket TCP, accept loop, threads por conexión y apagado
//! - `browser`: Apertura diferida y best-effort del navegador
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use dev_server::config::Config;
//! use dev_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("no se pudo arrancar");
//! server.run().expect("error sirviendo");
//! ```

pub mod browser;
pub mod config;
pub mod files;
pub mod http;
pub mod server;
