//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Hace bind en un puerto con SO_REUSEADDR activo
//! 2. Acepta conexiones entrantes en un loop bloqueante
//! 3. Atiende cada conexión en su propio thread
//! 4. Responde archivos estáticos con headers de no-caché
//! 5. Se detiene cuando alguien levanta la bandera de shutdown

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{Server, ShutdownHandle, StartupError};
