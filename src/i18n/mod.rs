//! Internationalization (i18n) module.
//!
//! Provides localized strings for the application UI and CLI output.
//! English is the default language; Spanish is available as an alternative.

use std::sync::OnceLock;

static CURRENT_LANG: OnceLock<Lang> = OnceLock::new();

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// English (default)
    En,
    /// Spanish
    Es,
}

impl Lang {
    /// Parse a language code string (e.g. "en", "es", "en_US", "es_ES").
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.to_lowercase();
        let prefix = normalized.split(['_', '-', '.']).next().unwrap_or("");
        match prefix {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Return the ISO 639-1 code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Initialize the global language. Call once at startup.
/// If already initialized, this is a no-op.
pub fn set_lang(lang: Lang) {
    let _ = CURRENT_LANG.set(lang);
}

/// Get the currently configured language (defaults to English).
pub fn lang() -> Lang {
    CURRENT_LANG.get().copied().unwrap_or(Lang::En)
}

/// Detect language from `INBOXVIEW_LANG`, then `LC_MESSAGES` / `LANG`.
pub fn detect_system_lang() -> Lang {
    std::env::var("INBOXVIEW_LANG")
        .ok()
        .and_then(|v| Lang::from_code(&v))
        .or_else(|| {
            std::env::var("LC_MESSAGES")
                .ok()
                .and_then(|v| Lang::from_code(&v))
        })
        .or_else(|| std::env::var("LANG").ok().and_then(|v| Lang::from_code(&v)))
        .unwrap_or(Lang::En)
}

/// Macro for defining translatable message functions.
/// Each function returns a `&'static str` based on the current language.
macro_rules! msg {
    ($name:ident, $en:expr, $es:expr) => {
        /// Returns a localized string for the current language.
        pub fn $name() -> &'static str {
            match lang() {
                Lang::En => $en,
                Lang::Es => $es,
            }
        }
    };
}

// ── General ──────────────────────────────────────────────────────

msg!(app_name, "inboxview", "inboxview");
msg!(
    app_about,
    "inboxview \u{2014} Terminal viewer for captured-email inboxes.",
    "inboxview \u{2014} Visor de terminal para bandejas de correo capturado."
);
msg!(
    app_long_about,
    "inboxview \u{2014} Terminal viewer for captured-email inboxes.\nPolls a mail capture server, lists every received message\nand shows the selected one. Built in Rust.",
    "inboxview \u{2014} Visor de terminal para bandejas de correo capturado.\nConsulta peri\u{f3}dicamente un servidor de captura, lista los mensajes\nrecibidos y muestra el seleccionado. Escrito en Rust."
);
msg!(
    app_after_help,
    "Examples:\n  inboxview                          Watch http://localhost:8025\n  inboxview --url http://dev:8025    Watch another server\n  inboxview list --json              Print received messages as JSON\n  inboxview show 3                   Print message 3\n  inboxview clear --yes              Delete every captured message",
    "Ejemplos:\n  inboxview                          Vigilar http://localhost:8025\n  inboxview --url http://dev:8025    Vigilar otro servidor\n  inboxview list --json              Listar mensajes en JSON\n  inboxview show 3                   Mostrar el mensaje 3\n  inboxview clear --yes              Borrar todos los mensajes capturados"
);

// ── CLI help strings ─────────────────────────────────────────────

msg!(
    help_cmd_watch,
    "Watch the inbox in the TUI (default if no subcommand given)",
    "Vigilar la bandeja en la TUI (por defecto si no se da subcomando)"
);
msg!(
    help_cmd_list,
    "List received messages",
    "Listar los mensajes recibidos"
);
msg!(help_cmd_show, "Show one message", "Mostrar un mensaje");
msg!(
    help_cmd_clear,
    "Delete all captured messages",
    "Borrar todos los mensajes capturados"
);
msg!(
    help_cmd_completions,
    "Generate shell completions",
    "Generar autocompletado para la shell"
);
msg!(
    help_cmd_manpage,
    "Generate a man page",
    "Generar p\u{e1}gina de manual"
);

// ── Placeholders ─────────────────────────────────────────────────

msg!(no_subject, "(No subject)", "(Sin asunto)");
msg!(list_empty, "No emails received", "No se han recibido correos");
msg!(content_empty, "No emails to display", "No hay correos que mostrar");
msg!(list_error, "Error loading emails", "Error al cargar los correos");
msg!(
    content_error,
    "Error loading email content",
    "Error al cargar el contenido del correo"
);
msg!(list_loading, "Loading emails...", "Cargando correos...");
msg!(content_idle, "No message selected", "Ning\u{fa}n mensaje seleccionado");
msg!(
    confirm_clear,
    "Are you sure you want to delete all emails?",
    "\u{bf}Seguro que quieres borrar todos los correos?"
);

// ── TUI ──────────────────────────────────────────────────────────

msg!(tui_messages_title, " Messages ", " Mensajes ");
msg!(tui_message_title, " Message ", " Mensaje ");
msg!(tui_confirm_title, " Clear all ", " Borrar todo ");
msg!(tui_confirm_keys, "[y] Yes    [n] No", "[y] S\u{ed}    [n] No");
msg!(tui_help_title, " Help ", " Ayuda ");
msg!(
    tui_help_description,
    "Captured-email inbox viewer",
    "Visor de bandeja de correo capturado"
);
msg!(tui_help_hint, " [?] Help ", " [?] Ayuda ");
msg!(tui_synced, "synced", "sincronizado");
msg!(tui_not_synced, "not synced yet", "sin sincronizar");
msg!(tui_messages_count, "messages", "mensajes");

msg!(tui_header_date, "Date:    ", "Fecha:   ");
msg!(tui_header_from, "From:    ", "De:      ");
msg!(tui_header_to, "To:      ", "Para:    ");
msg!(tui_header_subject, "Subject: ", "Asunto:  ");

msg!(tui_col_date, "Date", "Fecha");
msg!(tui_col_from, "From", "De");
msg!(tui_col_subject, "Subject", "Asunto");

msg!(tui_help_navigation, "Navigation", "Navegaci\u{f3}n");
msg!(tui_help_actions, "Actions", "Acciones");
msg!(tui_help_next_prev, "Next / prev", "Siguiente / anterior");
msg!(tui_help_first_last, "First / last", "Primero / \u{fa}ltimo");
msg!(tui_help_click, "Select message", "Seleccionar mensaje");
msg!(tui_help_page_scroll, "Page scroll", "Avance de p\u{e1}gina");
msg!(tui_help_open_message, "Read message", "Leer mensaje");
msg!(tui_help_cycle_panel, "Cycle panel", "Cambiar panel");
msg!(tui_help_back_close, "Back / close", "Atr\u{e1}s / cerrar");
msg!(tui_help_refresh, "Refresh now", "Actualizar ahora");
msg!(tui_help_clear_all, "Delete all", "Borrar todo");
msg!(tui_help_layout_mode, "Layout mode", "Modo disposici\u{f3}n");
msg!(tui_help_this_help, "This help", "Esta ayuda");
msg!(tui_help_quit, "Quit", "Salir");
msg!(tui_help_force_quit, "Force quit", "Forzar salida");

msg!(tui_hint_nav, "Nav", "Nav");
msg!(tui_hint_open, "Read", "Leer");
msg!(tui_hint_refresh, "Refresh", "Actualizar");
msg!(tui_hint_clear, "Clear", "Borrar");
msg!(tui_hint_panel, "Panel", "Panel");
msg!(tui_hint_help, "Help", "Ayuda");
msg!(tui_hint_quit, "Quit", "Salir");
msg!(tui_hint_scroll, "Scroll", "Scroll");
msg!(tui_hint_back, "Back", "Atr\u{e1}s");
msg!(tui_hint_confirm, "Confirm", "Confirmar");
msg!(tui_hint_cancel, "Cancel", "Cancelar");

msg!(status_refreshing, "Refreshing...", "Actualizando...");
msg!(
    status_clearing,
    "Deleting all messages...",
    "Borrando todos los mensajes..."
);

// ── CLI output ───────────────────────────────────────────────────

msg!(msg_fetching, "Fetching", "Descargando");
msg!(cli_result_count, "message(s)", "mensaje(s)");
msg!(cli_confirm_suffix, " [y/N] ", " [s/N] ");
msg!(cli_cleared, "All messages deleted.", "Todos los mensajes borrados.");
msg!(cli_aborted, "Aborted.", "Cancelado.");
