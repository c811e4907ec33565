//! Single-line status shown in the output card of the bloom page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Processing,
    Error,
}

impl StatusKind {
    pub fn color(&self) -> &'static str {
        match self {
            StatusKind::Info => "#8b5cff",
            StatusKind::Processing => "#00d1ff",
            StatusKind::Error => "#ff4444",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Info => "ℹ",
            StatusKind::Processing => "⏳",
            StatusKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn welcome() -> Self {
        Self::new(
            StatusKind::Info,
            "🌺 Bienvenido a FLORABIU - Sube archivos LUT y datos para comenzar el análisis.",
        )
    }

    pub fn processing() -> Self {
        Self::new(StatusKind::Processing, "🌺 Procesando datos de floración...")
    }

    /// Any failure, from a missing file to an `error` field in the reply.
    pub fn error(detail: impl std::fmt::Display) -> Self {
        Self::new(StatusKind::Error, format!("❌ Error: {detail}"))
    }

    /// Shown without the `Error:` prefix since nothing was attempted.
    pub fn missing_files() -> Self {
        Self::new(
            StatusKind::Error,
            format!("❌ {}", crate::core::remote::ProcessError::MissingFiles),
        )
    }

    pub fn style(&self) -> String {
        format!("color: {};", self.kind.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::remote::ProcessError;

    #[test]
    fn palette() {
        assert_eq!(StatusKind::Error.color(), "#ff4444");
        assert_eq!(StatusKind::Processing.icon(), "⏳");
        assert_eq!(StatusMessage::welcome().kind, StatusKind::Info);
    }

    #[test]
    fn server_failure_mentions_status() {
        let status = StatusMessage::error(ProcessError::Server { status: 500 });
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "❌ Error: Error del servidor: 500");
    }

    #[test]
    fn missing_files_text() {
        assert_eq!(
            StatusMessage::missing_files().text,
            "❌ Selecciona archivo LUT XML y archivo .npz con datos."
        );
    }
}
