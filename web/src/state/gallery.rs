#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    selected: usize,
    viewer_open: bool,
}

impl GalleryState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer_open
    }

    /// Out-of-range indexes clamp to the last image.
    pub fn select_image(&mut self, index: usize, image_count: usize) {
        self.selected = index.min(image_count.saturating_sub(1));
    }

    pub fn next(&mut self, image_count: usize) {
        if image_count > 0 {
            self.selected = (self.selected + 1) % image_count;
        }
    }

    pub fn previous(&mut self, image_count: usize) {
        if image_count > 0 {
            self.selected = (self.selected + image_count - 1) % image_count;
        }
    }

    pub fn open_viewer(&mut self) {
        self.viewer_open = true;
    }

    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn selected_image<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.selected).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_default_shows_first_image_with_viewer_closed() {
        let gallery = GalleryState::default();
        assert_eq!(gallery.selected(), 0);
        assert!(!gallery.is_viewer_open());
        assert_eq!(gallery.selected_image(&images()), Some("a"));
    }

    #[test]
    fn test_select_image_shows_that_image() {
        let images = images();
        let mut gallery = GalleryState::default();

        for i in 0..images.len() {
            gallery.select_image(i, images.len());
            assert_eq!(gallery.selected(), i);
            assert_eq!(gallery.selected_image(&images), Some(images[i].as_str()));
        }
    }

    #[test]
    fn test_select_image_clamps_out_of_range() {
        let mut gallery = GalleryState::default();
        gallery.select_image(10, 3);
        assert_eq!(gallery.selected(), 2);

        gallery.select_image(4, 0);
        assert_eq!(gallery.selected(), 0);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut gallery = GalleryState::default();
        gallery.previous(3);
        assert_eq!(gallery.selected(), 2);
        gallery.next(3);
        assert_eq!(gallery.selected(), 0);
        gallery.next(3);
        assert_eq!(gallery.selected(), 1);

        gallery.next(0);
        assert_eq!(gallery.selected(), 1);
    }

    #[test]
    fn test_viewer_toggle_keeps_selection() {
        let mut gallery = GalleryState::default();
        gallery.select_image(1, 3);
        gallery.open_viewer();
        assert!(gallery.is_viewer_open());
        gallery.close_viewer();
        assert!(!gallery.is_viewer_open());
        assert_eq!(gallery.selected(), 1);
    }

    #[test]
    fn test_reset() {
        let mut gallery = GalleryState::default();
        gallery.select_image(2, 3);
        gallery.open_viewer();
        gallery.reset();
        assert_eq!(gallery, GalleryState::default());
    }
}
