//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que atiende múltiples conexiones
//! simultáneas usando threads: el accept loop corre en el thread
//! principal y cada conexión se procesa en un thread propio. No hay
//! estado mutable compartido entre requests, así que no hace falta
//! ningún lock.
//!
//! El listener se crea vía `socket2` para poder activar SO_REUSEADDR
//! antes del bind: así un reinicio rápido tras un crash no falla con
//! "address in use".

use crate::config::Config;
use crate::files::StaticDir;
use crate::http::{ParseError, Request, Response, StatusCode};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Errores fatales de arranque
///
/// Se reportan una sola vez en `main` y el proceso termina sin servir.
/// Los errores por request nunca llegan aquí.
#[derive(Debug)]
pub enum StartupError {
    /// El puerto ya está ocupado por otro proceso
    PortInUse { port: u16 },

    /// Cualquier otro fallo al preparar el socket o la raíz
    Io(io::Error),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::PortInUse { port } => {
                write!(f, "Port {} is already in use", port)
            }
            StartupError::Io(e) => write!(f, "Startup error: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::PortInUse { .. } => None,
            StartupError::Io(e) => Some(e),
        }
    }
}

/// Handle clonable para pedir el apagado del servidor desde otro thread
///
/// Levanta una bandera atómica y despierta el accept bloqueante con una
/// conexión loopback de cortesía. Lo usan el handler de Ctrl+C y los
/// tests.
#[derive(Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
    addr: SocketAddr,
}

impl ShutdownHandle {
    /// Pide al servidor que deje de aceptar conexiones
    ///
    /// Idempotente; seguro de llamar desde cualquier thread o desde un
    /// signal handler.
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
        // Conexión de cortesía para desbloquear el accept; si falla, el
        // loop igual verá la bandera en su próxima iteración
        let _ = TcpStream::connect(self.addr);
    }

    /// Consulta si ya se pidió el apagado
    pub fn is_stopping(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Servidor de archivos estáticos, un thread por conexión
pub struct Server {
    files: Arc<StaticDir>,
    listener: TcpListener,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Hace bind del listener y prepara el directorio raíz
    ///
    /// Distingue el caso "puerto ocupado" del resto de errores de
    /// arranque para que `main` pueda dar instrucciones útiles.
    pub fn bind(config: &Config) -> Result<Self, StartupError> {
        let files = StaticDir::new(&config.root).map_err(StartupError::Io)?;

        let addr = config
            .address()
            .to_socket_addrs()
            .map_err(StartupError::Io)?
            .next()
            .ok_or_else(|| {
                StartupError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "bind address did not resolve",
                ))
            })?;

        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
            .map_err(StartupError::Io)?;
        socket.set_reuse_address(true).map_err(StartupError::Io)?;
        socket.bind(&addr.into()).map_err(|e| {
            if e.kind() == io::ErrorKind::AddrInUse {
                StartupError::PortInUse { port: config.port }
            } else {
                StartupError::Io(e)
            }
        })?;
        socket.listen(128).map_err(StartupError::Io)?;

        Ok(Self {
            files: Arc::new(files),
            listener: socket.into(),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Dirección real en la que quedó escuchando
    ///
    /// Con `--port 0` el sistema asigna un puerto efímero; esta es la
    /// forma de descubrirlo.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Obtiene un handle de apagado para este servidor
    pub fn shutdown_handle(&self) -> io::Result<ShutdownHandle> {
        Ok(ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
            addr: self.listener.local_addr()?,
        })
    }

    /// Loop principal: acepta conexiones hasta que pidan el apagado
    ///
    /// Bloquea el thread que lo llama. Retorna `Ok(())` tras un apagado
    /// ordenado; los threads de conexiones en vuelo quedan sueltos y
    /// terminan por su cuenta.
    pub fn run(&self) -> io::Result<()> {
        for stream in self.listener.incoming() {
            if self.shutdown.load(Ordering::SeqCst) {
                break;
            }

            match stream {
                Ok(stream) => {
                    let files = Arc::clone(&self.files);
                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, files) {
                            eprintln!("   ⚠️  Error atendiendo conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ⚠️  Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: leer, resolver, responder
    fn handle_connection(mut stream: TcpStream, files: Arc<StaticDir>) -> io::Result<()> {
        let start = Instant::now();

        // Request line + headers caben de sobra en 8 KiB; GET/HEAD no
        // llevan body
        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // El peer cerró sin mandar nada
            return Ok(());
        }

        let response = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                let response = files.response_for(&request);
                println!(
                    "   📨 {} {} → {} ({:.2}ms)",
                    request.method().as_str(),
                    request.path(),
                    response.status(),
                    start.elapsed().as_secs_f64() * 1000.0
                );
                response
            }
            Err(e) => {
                println!("   ⚠️  Request inválido: {}", e);
                match e {
                    ParseError::UnsupportedMethod(_) => {
                        Response::error(StatusCode::NotImplemented, &e.to_string())
                    }
                    _ => Response::error(StatusCode::BadRequest, &e.to_string()),
                }
            }
        };

        let response = Self::with_dev_headers(response);
        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        Ok(())
    }

    /// Headers comunes de TODA respuesta, incluidas las de error
    ///
    /// El contrato central del servidor de desarrollo: nada se cachea,
    /// ni en el navegador ni en proxies intermedios.
    fn with_dev_headers(mut response: Response) -> Response {
        response.add_header("Server", "dev-server/0.1");
        response.add_header("Connection", "close");
        response.add_header("Cache-Control", "no-store, no-cache, must-revalidate");
        response.add_header("Expires", "0");
        response
    }
}
