//! # Dev Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor estático de desarrollo: parsea la
//! configuración, hace bind, instala el handler de Ctrl+C, programa la
//! apertura del navegador y se queda sirviendo hasta que lo detengan.

use dev_server::browser;
use dev_server::config::Config;
use dev_server::server::{Server, StartupError};
use std::time::Duration;

fn main() {
    println!("=================================");
    println!("  Frontend Dev Server");
    println!("=================================\n");

    let config = Config::new();
    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }
    config.print_summary();

    // Bind primero: si falla no hay nada que servir y salimos con
    // diagnóstico. El caso "puerto ocupado" merece instrucciones propias.
    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(StartupError::PortInUse { port }) => {
            eprintln!("❌ ¡El puerto {} ya está en uso!", port);
            eprintln!("Prueba una de estas opciones:");
            eprintln!(
                "  1. Matar el proceso que ocupa el puerto: lsof -ti:{} | xargs kill -9",
                port
            );
            eprintln!("  2. Usar otro puerto: --port {}", port + 1);
            eprintln!(
                "  3. Abrir {} directamente en el navegador, sin servidor",
                config.entry
            );
            std::process::exit(1);
        }
        Err(StartupError::Io(e)) => {
            eprintln!("❌ Error arrancando el servidor: {}", e);
            eprintln!(
                "Como alternativa, abre {} directamente en el navegador",
                config.entry
            );
            std::process::exit(1);
        }
    };

    // Con --port 0 el puerto real se conoce recién después del bind
    let addr = match server.local_addr() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Error arrancando el servidor: {}", e);
            std::process::exit(1);
        }
    };
    let entry_url = format!("http://{}/{}", addr, config.entry);

    println!("🚀 Servidor corriendo en http://{}", addr);
    println!("📄 Abre {} en tu navegador", entry_url);
    println!("📛 Presiona Ctrl+C para detener el servidor\n");

    match server.shutdown_handle() {
        Ok(handle) => {
            if let Err(e) = ctrlc::set_handler(move || {
                println!("\n👋 Servidor detenido.");
                handle.request_stop();
            }) {
                eprintln!("⚠️  No se pudo instalar el handler de Ctrl+C: {}", e);
            }
        }
        Err(e) => {
            eprintln!("⚠️  No se pudo preparar el apagado ordenado: {}", e);
        }
    }

    // Best-effort: el navegador se abre solo cuando el listener ya está
    // escuchando; su fallo jamás afecta al accept loop
    if !config.no_browser {
        browser::open_after_delay(entry_url, Duration::from_millis(config.browser_delay_ms));
    }

    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
