//! Couples the loader with the gallery: whatever hotel comes back from a
//! fetch opens on its first image with the viewer closed.

use super::gallery::GalleryState;
use super::load::{HotelLoader, LoadTicket};

pub fn begin_page_load(
    loader: &mut HotelLoader,
    gallery: &mut GalleryState,
    hotel_id: impl Into<String>,
) -> LoadTicket {
    gallery.reset();
    loader.begin(hotel_id)
}

/// `None` leaves the gallery alone when there is nothing to retry.
pub fn retry_page_load(
    loader: &mut HotelLoader,
    gallery: &mut GalleryState,
) -> Option<LoadTicket> {
    let ticket = loader.retry()?;
    gallery.reset();
    Some(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browsed_gallery() -> GalleryState {
        let mut gallery = GalleryState::default();
        gallery.select_image(2, 3);
        gallery.open_viewer();
        gallery
    }

    #[test]
    fn test_new_load_resets_gallery() {
        let mut loader = HotelLoader::default();
        let mut gallery = browsed_gallery();

        let ticket = begin_page_load(&mut loader, &mut gallery, "h2");

        assert_eq!(ticket.hotel_id, "h2");
        assert!(loader.state().is_loading());
        assert_eq!(gallery.selected(), 0);
        assert!(!gallery.is_viewer_open());
    }

    #[test]
    fn test_retry_resets_gallery() {
        let mut loader = HotelLoader::default();
        let mut gallery = GalleryState::default();
        let first = begin_page_load(&mut loader, &mut gallery, "h1");
        loader.complete(&first, Err("timeout".to_string()));

        gallery = browsed_gallery();
        let ticket = retry_page_load(&mut loader, &mut gallery).unwrap();

        assert_eq!(ticket.hotel_id, "h1");
        assert!(loader.state().is_loading());
        assert_eq!(gallery, GalleryState::default());
    }

    #[test]
    fn test_retry_before_any_load_keeps_gallery() {
        let mut loader = HotelLoader::default();
        let mut gallery = browsed_gallery();

        assert_eq!(retry_page_load(&mut loader, &mut gallery), None);
        assert_eq!(gallery.selected(), 2);
        assert!(gallery.is_viewer_open());
    }
}
