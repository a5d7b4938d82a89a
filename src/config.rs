//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de desarrollo con
//! soporte para argumentos CLI y variables de entorno. Lo que en el
//! clásico script de desarrollo son dos constantes editadas a mano
//! (host y puerto) aquí es una struct explícita que se pasa al arranque.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./dev_server --port 8000 --root ./frontend --entry frontend.html
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! DEV_PORT=8000 DEV_ROOT=./frontend ./dev_server
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor estático de desarrollo
#[derive(Debug, Clone, Parser)]
#[command(name = "dev_server")]
#[command(about = "Servidor estático de desarrollo para el frontend, sin caché")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha (loopback por defecto)
    #[arg(long, default_value = "127.0.0.1", env = "DEV_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "8000", env = "DEV_PORT")]
    pub port: u16,

    /// Directorio raíz desde el que se sirven archivos
    #[arg(long, default_value = ".", env = "DEV_ROOT")]
    pub root: PathBuf,

    /// Página de entrada que se abre en el navegador
    #[arg(long, default_value = "frontend.html", env = "DEV_ENTRY")]
    pub entry: String,

    /// Milisegundos de espera antes de abrir el navegador
    #[arg(long = "browser-delay-ms", default_value = "1000", env = "BROWSER_DELAY_MS")]
    pub browser_delay_ms: u64,

    /// No abrir el navegador al arrancar
    #[arg(long = "no-browser")]
    pub no_browser: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use dev_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.root.as_os_str().is_empty() {
            return Err("Root directory must not be empty".to_string());
        }

        if self.entry.trim().is_empty() {
            return Err("Entry page must not be empty".to_string());
        }
        if self.entry.contains('/') || self.entry.contains('\\') {
            return Err("Entry page must be a plain file name".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        println!("   Dirección:  {}", self.address());
        println!("   Raíz:       {}", self.root.display());
        println!("   Entrada:    /{}", self.entry);
        if self.no_browser {
            println!("   Navegador:  deshabilitado");
        } else {
            println!("   Navegador:  se abre tras {} ms", self.browser_delay_ms);
        }
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto, igual a la del CLI sin argumentos
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            root: PathBuf::from("."),
            entry: "frontend.html".to_string(),
            browser_delay_ms: 1000,
            no_browser: false,
        }
    }
}
