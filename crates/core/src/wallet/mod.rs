//! Ticket wallet surfaces: QR payload rendering and calendar export.

pub mod ics;
mod qr;

pub use qr::qr_image_url;
