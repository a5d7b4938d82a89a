//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado que emite un servidor de
//! archivos estáticos. Según el RFC 1945, HTTP/1.0 define códigos en
//! 5 categorías:
//!
//! - **2xx**: Éxito (200 OK)
//! - **3xx**: Redirección (301 para directorios sin slash final)
//! - **4xx**: Error del cliente (400, 403, 404)
//! - **5xx**: Error del servidor (500, 501)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 301 Moved Permanently - Directorio pedido sin slash final
    MovedPermanently = 301,

    /// 400 Bad Request - Request malformado
    BadRequest = 400,

    /// 403 Forbidden - Path fuera del directorio raíz o sin permisos
    Forbidden = 403,

    /// 404 Not Found - El archivo no existe
    NotFound = 404,

    /// 500 Internal Server Error - Error interno del servidor
    InternalServerError = 500,

    /// 501 Not Implemented - Método HTTP no soportado
    NotImplemented = 501,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use dev_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// Estos textos están definidos en el RFC 1945 y son estándares.
    ///
    /// # Ejemplo
    /// ```
    /// use dev_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Verifica si el código indica redirección (3xx)
    pub fn is_redirect(&self) -> bool {
        matches!(self, StatusCode::MovedPermanently)
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
