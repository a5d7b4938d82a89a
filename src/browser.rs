//! # Lanzamiento Diferido del Navegador
//! src/browser.rs
//!
//! Abre el navegador por defecto del usuario apuntando al servidor, un
//! instante después del arranque. Es estrictamente best-effort: si no hay
//! navegador o display disponible, se avisa por consola y el servidor
//! sigue como si nada.

use std::thread;
use std::time::Duration;

/// Programa la apertura del navegador en `url` tras `delay`
///
/// Corre en su propio thread, desacoplado del accept loop: no hay join,
/// no hay canal de error de vuelta y no hay cancelación. Si el servidor
/// se apaga antes de que dispare, el thread termina solo sin molestar.
///
/// Retorna el `JoinHandle` por si alguien (los tests) quiere esperarlo;
/// el binario lo ignora.
pub fn open_after_delay(url: String, delay: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        if let Err(e) = open::that(&url) {
            eprintln!("⚠️  No se pudo abrir el navegador: {}", e);
            eprintln!("    Abre {} manualmente", url);
        }
    })
}
