//! Global constants for the photo selector.

/// Catalog layout for the event photo set.
pub mod catalog {
    /// Original session photos: `photos/photo_001.webp` .. `photos/photo_230.webp`
    pub const SESSION_COUNT: usize = 230;
    /// First number of the session range
    pub const SESSION_START: u32 = 1;
    /// Zero-padding width of session photo numbers
    pub const SESSION_PAD: usize = 3;

    /// Event photos: `photos/evento-141.webp` .. `photos/evento-364.webp`
    pub const EVENT_COUNT: usize = 224;
    /// First number of the event range
    pub const EVENT_START: u32 = 141;
}

/// Local key-value store keys.
pub mod storage {
    /// Key holding the per-photo category assignments
    pub const SELECTIONS_KEY: &str = "valentina_xv_photo_selections";
    /// Key holding the feedback log
    pub const FEEDBACK_KEY: &str = "valentina_xv_feedback";
    /// Key holding the exported app configuration (wasm only)
    pub const CONFIG_KEY: &str = "fotosel-config";
}

/// Soft limits on category membership.
pub mod limits {
    /// Recommended number of photos for print
    pub const IMPRESION: usize = 100;
    /// Recommended number of photos for the USB box cover
    pub const CAJA_USB: usize = 1;
    /// Recommended number of photos for the photo box cover
    pub const CAJA_FOTOS: usize = 1;
}

/// Event details printed in exported reports.
pub mod event {
    pub const SUBJECT_NAME: &str = "Valentina Rivera Olmedo";
    pub const EVENT_DATE: &str = "18 de octubre de 2025";
    pub const CONTACT: &str = "4779203776";
    pub const SUMMARY_TITLE: &str = "SELECCIÓN DE FOTOS - XV AÑOS VALENTINA RIVERA OLMEDO";
}

/// Placeholder written into reports for empty feedback lists.
pub const NO_FEEDBACK_PLACEHOLDER: &str = "Sin cambios sugeridos";
