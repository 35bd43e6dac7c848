use super::types::Rgb;

/// A screen-space layer the compositor can stack: splash image, level
/// select, score overlays. `None` means transparent at that pixel and the
/// next layer down decides.
pub trait OverlayLayer {
    fn sample(&self, px: u16, py: u16) -> Option<Rgb>;
}
